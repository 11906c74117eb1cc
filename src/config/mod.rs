use anyhow::{anyhow, Context as _, Result};
use pano_entities::api_key::ApiKey;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

pub use raw::StoreBackend;

const DEFAULT_CONFIG_FILE_NAME: &str = "streetpano.toml";

const ENV_NAME_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_CREDENTIALS_PATH: &str = "FIREBASE_CREDENTIALS_PATH";
const ENV_NAME_PORT: &str = "PORT";

pub struct Config {
    pub streetview: StreetView,
    pub discovery: Discovery,
    pub store: Store,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = var(ENV_NAME_API_KEY) {
            self.streetview.api_key = Some(ApiKey::new(api_key));
        }
        if let Some(path) = var(ENV_NAME_CREDENTIALS_PATH) {
            self.store.firestore.credentials_path = PathBuf::from(path);
        }
        if let Some(port) = var(ENV_NAME_PORT) {
            self.webserver.port = port
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_PORT} '{port}'"))?;
        }
        Ok(())
    }
}

pub struct StreetView {
    pub api_key: Option<ApiKey>,
    pub metadata_url: String,
    pub image_url: String,
    pub image_size: String,
    pub field_of_view: u16,
    pub heading: u16,
    pub metadata_timeout: Duration,
    pub image_timeout: Duration,
}

pub struct Discovery {
    pub max_attempts: u32,
}

pub struct Store {
    pub backend: StoreBackend,
    pub firestore: Firestore,
    pub json_file: JsonFile,
}

pub struct Firestore {
    pub credentials_path: PathBuf,
    pub collection: Option<String>,
    pub database: Option<String>,
    pub timeout: Option<Duration>,
}

pub struct JsonFile {
    /// File system directory for the JSON documents.
    pub dir: PathBuf,
}

pub struct WebServer {
    pub port: u16,
    pub enable_cors: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            streetview,
            discovery,
            store,
            webserver,
        } = from;

        let raw::StreetView {
            api_key,
            metadata_url,
            image_url,
            image_size,
            field_of_view,
            heading,
            metadata_timeout,
            image_timeout,
        } = streetview.unwrap_or_default();

        if !is_valid_image_size(&image_size) {
            return Err(anyhow!("Invalid image size '{image_size}'"));
        }
        let streetview = StreetView {
            api_key: api_key.map(ApiKey::new),
            metadata_url,
            image_url,
            image_size,
            field_of_view,
            heading,
            metadata_timeout,
            image_timeout,
        };

        let raw::Discovery { max_attempts } = discovery.unwrap_or_default();
        if max_attempts == 0 {
            return Err(anyhow!("At least one discovery attempt is required"));
        }
        let discovery = Discovery { max_attempts };

        let raw::Store {
            backend,
            firestore,
            json_file,
        } = store.unwrap_or_default();

        let raw::Firestore {
            credentials_path,
            collection,
            database,
            timeout,
        } = firestore.unwrap_or_default();
        let firestore = Firestore {
            credentials_path,
            collection,
            database,
            timeout,
        };

        let raw::JsonFile { dir } = json_file.unwrap_or_default();
        let json_file = JsonFile { dir };

        let store = Store {
            backend,
            firestore,
            json_file,
        };

        let raw::WebServer { port, cors } = webserver.unwrap_or_default();
        let webserver = WebServer {
            port,
            enable_cors: cors,
        };

        Ok(Self {
            streetview,
            discovery,
            store,
            webserver,
        })
    }
}

/// `{width}x{height}` with positive dimensions
fn is_valid_image_size(size: &str) -> bool {
    size.split_once('x').is_some_and(|(w, h)| {
        matches!(
            (w.parse::<u16>(), h.parse::<u16>()),
            (Ok(w), Ok(h)) if w > 0 && h > 0
        )
    })
}
