use std::fmt;

use crate::{geo::Coordinate, id::Id, time::Timestamp};

/// Provider-issued identifier of a 360° street-level panorama.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanoramaId(String);

impl PanoramaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PanoramaId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for PanoramaId {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<PanoramaId> for String {
    fn from(from: PanoramaId) -> Self {
        from.0
    }
}

impl AsRef<str> for PanoramaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanoramaId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw (encoded) image data as returned by the provider, e.g. a JPEG.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData(Vec<u8>);

impl ImageData {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ImageData {
    fn from(from: Vec<u8>) -> Self {
        Self(from)
    }
}

// Images are large, so only print their size.
impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ImageData({} bytes)", self.0.len())
    }
}

/// A location for which a panorama has been found
/// together with the fetched image.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryResult {
    pub pos: Coordinate,
    pub image: ImageData,
    pub panorama_id: PanoramaId,
}

/// A panorama record that has not been stored yet.
///
/// The creation time is assigned by the document store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPanoramaRecord {
    pub id: Id,
    pub pos: Coordinate,
    pub panorama_id: PanoramaId,
    /// The image encoded as standard base64
    pub image_base64: String,
}

/// A persisted panorama record.
#[derive(Debug, Clone, PartialEq)]
pub struct PanoramaRecord {
    pub id: Id,
    pub pos: Coordinate,
    pub panorama_id: PanoramaId,
    pub image_base64: String,
    pub created_at: Timestamp,
}

impl NewPanoramaRecord {
    pub fn into_record(self, created_at: Timestamp) -> PanoramaRecord {
        let Self {
            id,
            pos,
            panorama_id,
            image_base64,
        } = self;
        PanoramaRecord {
            id,
            pos,
            panorama_id,
            image_base64,
            created_at,
        }
    }
}

/// Reference to a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub id: Id,
    /// Path of the document within the store, e.g. `panoramas/<id>`
    pub path: String,
}

impl DocumentRef {
    pub fn new(collection: &str, id: Id) -> Self {
        let path = format!("{collection}/{id}");
        Self { id, path }
    }
}
