use crate::repositories;
use pano_entities::region::RegionInvalidation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not find a valid location with panorama available after {attempts} attempts")]
    NoCoverageFound { attempts: u32 },
    #[error("No regions defined")]
    EmptyRegionTable,
    #[error(transparent)]
    InvalidRegion(#[from] RegionInvalidation),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
