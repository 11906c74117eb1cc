use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::prelude::*;

/// Stores a discovered panorama under a freshly generated ID.
pub fn store_panorama<R>(repo: &R, discovery: DiscoveryResult) -> Result<DocumentRef>
where
    R: PanoramaRepo + ?Sized,
{
    let DiscoveryResult {
        pos,
        image,
        panorama_id,
    } = discovery;
    log::info!("Storing panorama data for location {pos}");
    let record = NewPanoramaRecord {
        id: Id::new(),
        pos,
        panorama_id,
        image_base64: BASE64.encode(image.as_bytes()),
    };
    let doc_ref = repo.create_panorama(record)?;
    log::info!("Stored panorama data with ID: {}", doc_ref.id);
    Ok(doc_ref)
}
