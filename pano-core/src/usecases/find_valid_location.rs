use super::prelude::*;

/// Maximum number of sample-check-fetch cycles
/// before the discovery is declared failed.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 40;

/// Searches for a random location with an available panorama.
///
/// Each attempt samples a fresh location, looks up a panorama
/// for it and fetches the image. The first attempt that yields
/// both a panorama ID and image data wins. Provider errors count
/// as "not found" and do not abort the search. There is no backoff
/// between attempts and already visited locations are not tracked.
pub fn find_valid_location<S, M, I>(
    sampler: &mut S,
    metadata_gw: &M,
    image_gw: &I,
    max_attempts: u32,
) -> Result<DiscoveryResult>
where
    S: LocationSampler + ?Sized,
    M: PanoramaMetadataGateway + ?Sized,
    I: PanoramaImageGateway + ?Sized,
{
    log::info!("Starting search for valid panorama location. Max attempts: {max_attempts}");
    let mut transient_errors = 0u32;
    for attempt in 1..=max_attempts {
        let pos = sampler.sample_location();
        log::info!("Attempt {attempt}/{max_attempts}: Checking location {pos}");

        let lookup = metadata_gw.lookup_panorama(&pos);
        if lookup.is_transient_error() {
            transient_errors += 1;
        }
        let Some(panorama_id) = lookup.found() else {
            continue;
        };

        let fetched = image_gw.fetch_panorama_image(&panorama_id);
        if fetched.is_transient_error() {
            transient_errors += 1;
        }
        let Some(image) = fetched.found() else {
            continue;
        };

        log::info!(
            "Found valid location with panorama {panorama_id} at {pos} after {attempt} attempt(s)"
        );
        return Ok(DiscoveryResult {
            pos,
            image,
            panorama_id,
        });
    }
    log::debug!("{transient_errors} provider request(s) failed during the search");
    log::error!("Failed to find valid location after {max_attempts} attempts");
    Err(Error::NoCoverageFound {
        attempts: max_attempts,
    })
}
