pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use pano_entities::{
        api_key::*, geo::*, id::*, panorama::*, region::*, time::*,
    };
}
