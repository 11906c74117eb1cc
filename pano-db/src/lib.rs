//! Document stores for discovered panoramas.

pub mod firestore;
pub mod json_file;

/// Name of the collection that holds panorama documents.
pub const PANORAMA_COLLECTION: &str = "panoramas";
