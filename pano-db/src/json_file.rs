use std::{
    io,
    path::{Path, PathBuf},
};

use jfs::Store;
use pano_core::{entities::*, repositories as repo};
use serde::{Deserialize, Serialize};

use crate::PANORAMA_COLLECTION;

/// A local document store that keeps one JSON file per panorama.
///
/// Useful for development without cloud credentials.
pub struct JsonFileStore {
    json_store: Store,
}

impl JsonFileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn document_path(&self, id: &Id) -> PathBuf {
        self.path().join(format!("{id}.json"))
    }

    /// Reads back all stored panoramas.
    pub fn load_all(&self) -> io::Result<Vec<PanoramaRecord>> {
        let records = self
            .json_store
            .all::<JsonPanorama>()?
            .into_iter()
            .filter_map(|(id, doc)| {
                let record = doc.into_record(id.as_str().into());
                if record.is_none() {
                    log::warn!("Ignoring panorama document {id} with invalid timestamp");
                }
                record
            })
            .collect();
        Ok(records)
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonPanorama {
    latitude: f64,
    longitude: f64,
    image_base64: String,
    panorama_id: String,
    /// Unix time in seconds
    timestamp: i64,
}

impl JsonPanorama {
    fn new(record: &NewPanoramaRecord, timestamp: Timestamp) -> Self {
        Self {
            latitude: record.pos.lat,
            longitude: record.pos.lng,
            image_base64: record.image_base64.clone(),
            panorama_id: record.panorama_id.as_str().to_owned(),
            timestamp: timestamp.as_secs(),
        }
    }

    fn into_record(self, id: Id) -> Option<PanoramaRecord> {
        let created_at = Timestamp::from_secs(self.timestamp)?;
        Some(PanoramaRecord {
            id,
            pos: Coordinate::from_lat_lng_deg(self.latitude, self.longitude),
            panorama_id: self.panorama_id.into(),
            image_base64: self.image_base64,
            created_at,
        })
    }
}

impl repo::PanoramaRepo for JsonFileStore {
    fn create_panorama(&self, record: NewPanoramaRecord) -> Result<DocumentRef, repo::Error> {
        if self.document_path(&record.id).exists() {
            return Err(repo::Error::AlreadyExists);
        }
        let doc = JsonPanorama::new(&record, Timestamp::now());
        self.json_store
            .save_with_id(&doc, record.id.as_str())
            .inspect_err(|err| {
                log::warn!("Unable to save panorama {} in JSON file: {err}", record.id);
            })?;
        Ok(DocumentRef::new(PANORAMA_COLLECTION, record.id))
    }
}
