use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use pano_core::{entities::ApiKeyStatus, usecases};
use pano_gateways::streetview::StreetView;

mod config;
mod gateways;

use self::config::{Config, StoreBackend};

#[derive(Parser, Debug)]
#[command(version, about = "Serves random locations with a street-level panorama")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Where discovered panoramas are stored
    #[arg(long, value_enum)]
    store: Option<StoreBackendCli>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreBackendCli {
    Firestore,
    JsonFile,
}

impl From<StoreBackendCli> for StoreBackend {
    fn from(from: StoreBackendCli) -> Self {
        match from {
            StoreBackendCli::Firestore => Self::Firestore,
            StoreBackendCli::JsonFile => Self::JsonFile,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(port) = args.port {
        cfg.webserver.port = port;
    }
    if let Some(store) = args.store {
        cfg.store.backend = store.into();
    }

    let street_view = Arc::new(gateways::street_view(&cfg.streetview)?);
    let api_key_status = check_api_key(&street_view);

    let repo = gateways::panorama_store(&cfg.store)?;

    let web_cfg = pano_webserver::Cfg {
        api_key_status,
        max_attempts: cfg.discovery.max_attempts,
    };
    let web_gateways = pano_webserver::Gateways {
        metadata: street_view.clone(),
        image: street_view,
        repo,
    };

    log::info!("Listening on port {}", cfg.webserver.port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(pano_webserver::run(
        cfg.webserver.port,
        cfg.webserver.enable_cors,
        web_cfg,
        web_gateways,
        env!("CARGO_PKG_VERSION"),
    ));
    Ok(())
}

// Runs once before the web server starts.
fn check_api_key(street_view: &StreetView) -> ApiKeyStatus {
    let status = usecases::validate_api_key(street_view.api_key(), street_view);
    if !status.is_valid() {
        log::warn!("Random locations are unavailable until a valid API key is configured");
    }
    status
}
