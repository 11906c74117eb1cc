use std::net::{IpAddr, Ipv4Addr};

use pano_core::{entities::ApiKeyStatus, usecases::DEFAULT_MAX_ATTEMPTS};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;


pub use self::guards::Gateways;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Result of the credential check at startup.
    pub api_key_status: ApiKeyStatus,
    pub max_attempts: u32,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            api_key_status: ApiKeyStatus::Invalid,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(gateways).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes()), ("/api", api::api_routes())]
}

fn rocket_cfg(port: u16) -> RocketCfg {
    RocketCfg {
        address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        port,
        ..RocketCfg::default()
    }
}

pub async fn run(
    port: u16,
    enable_cors: bool,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg(port)),
        cfg,
        version,
    };
    let instance = rocket_instance(options, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
