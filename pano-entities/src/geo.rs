use std::fmt;

/// Number of decimal digits that are kept for
/// sampled latitude and longitude values.
pub const COORDINATE_PRECISION: i32 = 6;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Formats the coordinate as `lat,lng`, the notation
/// that is expected by the panorama metadata API.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

pub fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_PRECISION);
    (value * factor).round() / factor
}

/// Checks that a value has no more than [`COORDINATE_PRECISION`] decimal digits.
pub fn has_coordinate_precision(value: f64) -> bool {
    round_to_precision(value) == value
}
