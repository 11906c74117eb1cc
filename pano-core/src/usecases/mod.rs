mod discover_random_panorama;
mod error;
mod find_valid_location;
mod regions;
mod sample_location;
mod store_panorama;
mod validate_api_key;


pub use self::{
    discover_random_panorama::*, error::Error, find_valid_location::*, regions::*,
    sample_location::*, store_panorama::*, validate_api_key::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::streetview::*, repositories::*};
    pub use super::{find_valid_location, store_panorama, LocationSampler, WeightedRegions};
}
