use pano_core::{entities::*, gateways::streetview::ProviderOutcome};
use serde::Deserialize;

const STATUS_OK: &str = "OK";

/// The relevant part of a metadata response.
///
/// Possible status codes are `OK`, `ZERO_RESULTS`, `NOT_FOUND`,
/// `OVER_QUERY_LIMIT`, `REQUEST_DENIED`, `INVALID_REQUEST`
/// and `UNKNOWN_ERROR`.
#[derive(Debug, Deserialize)]
pub struct MetadataResponse {
    pub status: String,
    pub pano_id: Option<String>,
    pub error_message: Option<String>,
}

impl MetadataResponse {
    pub fn into_outcome(self, pos: &Coordinate) -> ProviderOutcome<PanoramaId> {
        let Self {
            status,
            pano_id,
            error_message,
        } = self;
        if status != STATUS_OK {
            log::info!("No panorama at {pos}. Status: {status}");
            if let Some(msg) = error_message {
                log::debug!("Error message: {msg}");
            }
            return ProviderOutcome::NotAvailable;
        }
        match pano_id.filter(|id| !id.is_empty()) {
            Some(id) => {
                log::info!("Found panorama at {pos}: {id}");
                ProviderOutcome::Found(id.into())
            }
            None => {
                log::warn!("Missing panorama ID in metadata for {pos}");
                ProviderOutcome::TransientError("Missing panorama ID".to_string())
            }
        }
    }
}
