use std::sync::Arc;

use anyhow::Result;
use pano_core::repositories::PanoramaRepo;
use pano_db::{
    firestore::{Firestore, FirestoreConfig, ServiceAccount},
    json_file::JsonFileStore,
};
use pano_gateways::streetview::{StreetView, StreetViewConfig};

use crate::config;

pub fn street_view(cfg: &config::StreetView) -> Result<StreetView> {
    let config::StreetView {
        api_key,
        metadata_url,
        image_url,
        image_size,
        field_of_view,
        heading,
        metadata_timeout,
        image_timeout,
    } = cfg;
    let config = StreetViewConfig {
        metadata_url: metadata_url.clone(),
        image_url: image_url.clone(),
        image_size: image_size.clone(),
        field_of_view: *field_of_view,
        heading: *heading,
        metadata_timeout: *metadata_timeout,
        image_timeout: *image_timeout,
    };
    StreetView::try_new(api_key.clone(), config)
}

pub fn panorama_store(cfg: &config::Store) -> Result<Arc<dyn PanoramaRepo + Send + Sync>> {
    match cfg.backend {
        config::StoreBackend::Firestore => {
            let config::Firestore {
                credentials_path,
                collection,
                database,
                timeout,
            } = &cfg.firestore;
            log::info!(
                "Loading Firestore credentials from {}",
                credentials_path.display()
            );
            let account = ServiceAccount::from_file(credentials_path)?;
            let mut config = FirestoreConfig::default();
            if let Some(collection) = collection {
                config.collection = collection.clone();
            }
            if let Some(database) = database {
                config.database = database.clone();
            }
            if let Some(timeout) = timeout {
                config.timeout = *timeout;
            }
            let store = Firestore::try_new(account, config)?;
            Ok(Arc::new(store))
        }
        config::StoreBackend::JsonFile => {
            let dir = &cfg.json_file.dir;
            log::info!("Use JSON file store ({})", dir.display());
            let store = JsonFileStore::try_new(dir)?;
            Ok(Arc::new(store))
        }
    }
}
