use duration_str::deserialize_duration;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("streetpano.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub streetview: Option<StreetView>,
    pub discovery: Option<Discovery>,
    pub store: Option<Store>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StreetView {
    pub api_key: Option<String>,
    pub metadata_url: String,
    pub image_url: String,
    pub image_size: String,
    pub field_of_view: u16,
    pub heading: u16,
    #[serde(deserialize_with = "deserialize_duration")]
    pub metadata_timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub image_timeout: Duration,
}

impl Default for StreetView {
    fn default() -> Self {
        Config::default()
            .streetview
            .expect("Street View configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Discovery {
    pub max_attempts: u32,
}

impl Default for Discovery {
    fn default() -> Self {
        Config::default()
            .discovery
            .expect("Discovery configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub backend: StoreBackend,
    pub firestore: Option<Firestore>,
    pub json_file: Option<JsonFile>,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreBackend {
    Firestore,
    JsonFile,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Firestore {
    pub credentials_path: PathBuf,
    pub collection: Option<String>,
    pub database: Option<String>,
    #[serde(default, deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Firestore {
    fn default() -> Self {
        Store::default()
            .firestore
            .expect("Firestore configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JsonFile {
    pub dir: PathBuf,
}

impl Default for JsonFile {
    fn default() -> Self {
        Store::default().json_file.expect("JSON file configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.streetview.is_some());
        assert!(cfg.discovery.is_some());
        assert!(cfg.store.is_some());
        assert!(cfg.webserver.is_some());
    }

    #[test]
    fn default_streetview_config() {
        let cfg = StreetView::default();
        assert!(cfg.api_key.is_none());
        assert_eq!("600x400", cfg.image_size);
        assert_eq!(90, cfg.field_of_view);
        assert_eq!(0, cfg.heading);
        assert_eq!(Duration::from_secs(5), cfg.metadata_timeout);
        assert_eq!(Duration::from_secs(10), cfg.image_timeout);
    }

    #[test]
    fn default_store_config() {
        let cfg = Store::default();
        assert_eq!(StoreBackend::Firestore, cfg.backend);
        assert_eq!(
            PathBuf::from("firebase-credentials.json"),
            Firestore::default().credentials_path
        );
        assert_eq!(PathBuf::from("panoramas"), JsonFile::default().dir);
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string =
            fs::read_to_string("src/config/streetpano.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let store = cfg.store.unwrap();
        assert_eq!(StoreBackend::JsonFile, store.backend);
        assert_eq!(
            Some(Duration::from_secs(5)),
            store.firestore.unwrap().timeout
        );
    }
}
