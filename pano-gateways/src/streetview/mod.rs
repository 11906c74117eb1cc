//! Gateways for the Google Street View Static API.
//!
//! See <https://developers.google.com/maps/documentation/streetview>

use std::time::Duration;

use pano_core::{
    entities::*,
    gateways::streetview::{PanoramaImageGateway, PanoramaMetadataGateway, ProviderOutcome},
};
use reqwest::{blocking::Client, header::CONTENT_TYPE};

mod metadata;

use self::metadata::MetadataResponse;

pub const DEFAULT_METADATA_URL: &str = "https://maps.googleapis.com/maps/api/streetview/metadata";
pub const DEFAULT_IMAGE_URL: &str = "https://maps.googleapis.com/maps/api/streetview";
pub const DEFAULT_IMAGE_SIZE: &str = "600x400";
pub const DEFAULT_FIELD_OF_VIEW: u16 = 90;
pub const DEFAULT_HEADING: u16 = 0;
pub const DEFAULT_METADATA_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct StreetViewConfig {
    pub metadata_url: String,
    pub image_url: String,
    /// `{width}x{height}` in pixels
    pub image_size: String,
    /// Horizontal field of view in degrees
    pub field_of_view: u16,
    /// Compass heading in degrees (0 = North)
    pub heading: u16,
    pub metadata_timeout: Duration,
    pub image_timeout: Duration,
}

impl Default for StreetViewConfig {
    fn default() -> Self {
        Self {
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            heading: DEFAULT_HEADING,
            metadata_timeout: DEFAULT_METADATA_TIMEOUT,
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
        }
    }
}

/// Street View gateway for panorama metadata and images.
#[derive(Debug, Clone)]
pub struct StreetView {
    api_key: Option<ApiKey>,
    config: StreetViewConfig,
    client: Client,
}

impl StreetView {
    pub fn try_new(api_key: Option<ApiKey>, config: StreetViewConfig) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            api_key,
            config,
            client,
        })
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    fn request_metadata(
        &self,
        api_key: &ApiKey,
        pos: &Coordinate,
    ) -> reqwest::Result<MetadataResponse> {
        let location = pos.to_string();
        self.client
            .get(&self.config.metadata_url)
            .query(&[("location", location.as_str()), ("key", api_key.as_str())])
            .timeout(self.config.metadata_timeout)
            .send()?
            .error_for_status()?
            .json()
    }

    fn request_image(
        &self,
        api_key: &ApiKey,
        id: &PanoramaId,
    ) -> reqwest::Result<(Option<String>, Vec<u8>)> {
        let StreetViewConfig {
            image_size,
            field_of_view,
            heading,
            ..
        } = &self.config;
        let field_of_view = field_of_view.to_string();
        let heading = heading.to_string();
        let response = self
            .client
            .get(&self.config.image_url)
            .query(&[
                ("size", image_size.as_str()),
                ("pano", id.as_str()),
                ("key", api_key.as_str()),
                ("fov", field_of_view.as_str()),
                ("heading", heading.as_str()),
            ])
            .timeout(self.config.image_timeout)
            .send()?
            .error_for_status()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let bytes = response.bytes()?;
        Ok((content_type, bytes.to_vec()))
    }
}

impl PanoramaMetadataGateway for StreetView {
    fn lookup_panorama(&self, pos: &Coordinate) -> ProviderOutcome<PanoramaId> {
        let Some(api_key) = &self.api_key else {
            return ProviderOutcome::TransientError("No API key configured".to_string());
        };
        match self.request_metadata(api_key, pos) {
            Ok(response) => response.into_outcome(pos),
            Err(err) => {
                log::error!("Error checking panorama at {pos}: {err}");
                ProviderOutcome::TransientError(err.to_string())
            }
        }
    }
}

impl PanoramaImageGateway for StreetView {
    fn fetch_panorama_image(&self, id: &PanoramaId) -> ProviderOutcome<ImageData> {
        let Some(api_key) = &self.api_key else {
            return ProviderOutcome::TransientError("No API key configured".to_string());
        };
        match self.request_image(api_key, id) {
            Ok((content_type, bytes)) => image_outcome(id, content_type.as_deref(), bytes),
            Err(err) => {
                log::error!("Error fetching panorama image for ID {id}: {err}");
                ProviderOutcome::TransientError(err.to_string())
            }
        }
    }
}

fn image_outcome(
    id: &PanoramaId,
    content_type: Option<&str>,
    bytes: Vec<u8>,
) -> ProviderOutcome<ImageData> {
    match content_type {
        Some(content_type) if content_type.starts_with("image/") => {
            log::info!("Successfully fetched image for panorama ID: {id}");
            ProviderOutcome::Found(bytes.into())
        }
        _ => {
            log::warn!(
                "Received non-image response ({}) for panorama ID: {id}",
                content_type.unwrap_or("no content type")
            );
            ProviderOutcome::NotAvailable
        }
    }
}
