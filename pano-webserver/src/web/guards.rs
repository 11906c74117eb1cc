use std::sync::Arc;

use pano_core::{
    gateways::streetview::{PanoramaImageGateway, PanoramaMetadataGateway},
    repositories::PanoramaRepo,
};

pub struct Version(pub &'static str);

/// Everything a discovery run talks to.
///
/// Shared with the blocking worker threads.
#[derive(Clone)]
pub struct Gateways {
    pub metadata: Arc<dyn PanoramaMetadataGateway + Send + Sync>,
    pub image: Arc<dyn PanoramaImageGateway + Send + Sync>,
    pub repo: Arc<dyn PanoramaRepo + Send + Sync>,
}
