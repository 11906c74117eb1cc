use super::prelude::*;

/// Finds a random location with an available panorama
/// and stores it as a new record.
///
/// Either both steps succeed or the whole operation fails.
pub fn discover_random_panorama<S, M, I, R>(
    sampler: &mut S,
    metadata_gw: &M,
    image_gw: &I,
    repo: &R,
    max_attempts: u32,
) -> Result<DocumentRef>
where
    S: LocationSampler + ?Sized,
    M: PanoramaMetadataGateway + ?Sized,
    I: PanoramaImageGateway + ?Sized,
    R: PanoramaRepo + ?Sized,
{
    let discovery = find_valid_location(sampler, metadata_gw, image_gw, max_attempts)?;
    store_panorama(repo, discovery)
}
