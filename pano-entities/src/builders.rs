pub use super::{geo::*, id::*, panorama::*, region::*};

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub mod discovery_result_builder {

    use super::*;

    #[derive(Debug)]
    pub struct DiscoveryResultBuilder {
        result: DiscoveryResult,
    }

    impl DiscoveryResultBuilder {
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.result.pos = Coordinate::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn panorama_id(mut self, id: &str) -> Self {
            self.result.panorama_id = id.into();
            self
        }
        pub fn image(mut self, bytes: &[u8]) -> Self {
            self.result.image = bytes.to_vec().into();
            self
        }
        pub fn finish(self) -> DiscoveryResult {
            self.result
        }
    }

    impl Builder for DiscoveryResult {
        type Build = DiscoveryResultBuilder;
        fn build() -> Self::Build {
            Self::Build {
                result: DiscoveryResult {
                    pos: Coordinate::from_lat_lng_deg(40.0, -74.0),
                    image: vec![0xFF, 0xD8, 0xFF, 0xE0].into(),
                    panorama_id: "pano123".into(),
                },
            }
        }
    }
}

pub use self::discovery_result_builder::*;
