use std::{collections::BTreeMap, fmt::Display, result};

use pano_boundary::{
    ApiInfo, Error as JsonErrorResponse, Health, RandomLocation, ServiceStatus,
};
use pano_core::{
    entities::Timestamp,
    usecases::{self, RandomLocationSampler},
};
use rocket::{
    self, get,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    tokio::task,
    Route, State,
};

use super::{guards::*, Cfg};

mod error;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

pub const API_NAME: &str = "Random Location Panorama API";

type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![get_index, get_health]
}

pub fn api_routes() -> Vec<Route> {
    routes![get_random_location, get_version]
}

fn endpoints() -> BTreeMap<String, String> {
    [
        ("/api/random-location", "Get a random location with panorama"),
        ("/health", "Health check endpoint"),
    ]
    .into_iter()
    .map(|(path, description)| (path.to_string(), description.to_string()))
    .collect()
}

#[get("/")]
pub fn get_index(cfg: &State<Cfg>) -> Json<ApiInfo> {
    Json(ApiInfo {
        api: API_NAME.to_string(),
        status: ServiceStatus::Running,
        api_key_status: cfg.api_key_status.into(),
        endpoints: endpoints(),
        timestamp: Timestamp::now().format_date_time(),
    })
}

#[get("/health")]
pub fn get_health(cfg: &State<Cfg>) -> Json<Health> {
    Json(Health {
        status: ServiceStatus::Healthy,
        api_key_status: cfg.api_key_status.into(),
        timestamp: Timestamp::now().format_date_time(),
    })
}

#[get("/random-location")]
pub async fn get_random_location(
    cfg: &State<Cfg>,
    gateways: &State<Gateways>,
) -> Result<RandomLocation> {
    let timestamp = Timestamp::now();
    if !cfg.api_key_status.is_valid() {
        return Err(ApiError::InvalidApiKey);
    }
    let Gateways {
        metadata,
        image,
        repo,
    } = gateways.inner().clone();
    let max_attempts = cfg.max_attempts;
    // The gateways block on network I/O.
    let doc_ref = task::spawn_blocking(move || {
        let mut sampler = RandomLocationSampler::default();
        usecases::discover_random_panorama(&mut sampler, &*metadata, &*image, &*repo, max_attempts)
    })
    .await??;
    info!("Stored panorama record {}", doc_ref.path);
    Ok(Json(RandomLocation::new(
        doc_ref.id.into(),
        timestamp.format_date_time(),
    )))
}

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let timestamp = Timestamp::now().format_date_time();
    let boundary_error = JsonErrorResponse::new(message, timestamp);
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
