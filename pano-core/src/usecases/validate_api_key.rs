use super::prelude::*;

/// A location that is known to have street-level coverage (New York City).
pub const API_KEY_TEST_LOCATION: Coordinate = Coordinate::from_lat_lng_deg(40.714728, -73.998672);

/// Validates the provider credential by requesting
/// the metadata for a well-known location.
///
/// A missing key is invalid without any request.
pub fn validate_api_key<G>(api_key: Option<&ApiKey>, metadata_gw: &G) -> ApiKeyStatus
where
    G: PanoramaMetadataGateway + ?Sized,
{
    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        log::warn!("Google Maps API key is not set in environment variables!");
        return ApiKeyStatus::Invalid;
    };
    log::info!("Using API key: {api_key}");
    match metadata_gw.lookup_panorama(&API_KEY_TEST_LOCATION) {
        ProviderOutcome::Found(_) => {
            log::info!("Google Maps API key validation successful");
            ApiKeyStatus::Valid
        }
        ProviderOutcome::NotAvailable => {
            log::error!("API key validation failed: the provider rejected the test request");
            ApiKeyStatus::Invalid
        }
        ProviderOutcome::TransientError(err) => {
            log::error!("Could not validate Google Maps API key: {err}");
            ApiKeyStatus::Invalid
        }
    }
}
