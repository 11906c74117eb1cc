use std::ops::RangeInclusive;

use thiserror::Error;

use crate::geo::Coordinate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionInvalidation {
    #[error("The latitude bounds of region '{0}' exceed [-90, 90]")]
    LatitudeBounds(String),
    #[error("The longitude bounds of region '{0}' exceed [-180, 180]")]
    LongitudeBounds(String),
    #[error("The latitude range of region '{0}' is empty")]
    LatitudeRange(String),
    #[error("The longitude range of region '{0}' is empty")]
    LongitudeRange(String),
    #[error("The weight of region '{0}' must be at least 1")]
    Weight(String),
}

/// A geographic bounding box with a relative sampling weight.
///
/// The bounds are inclusive, finite, within the valid coordinate
/// ranges and always ordered, i.e. `lat_min <= lat_max` and
/// `lng_min <= lng_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    name: String,
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
    weight: u32,
}

impl Region {
    pub fn try_new(
        name: impl Into<String>,
        lat: RangeInclusive<f64>,
        lng: RangeInclusive<f64>,
        weight: u32,
    ) -> Result<Self, RegionInvalidation> {
        let name = name.into();
        let (lat_min, lat_max) = lat.into_inner();
        let (lng_min, lng_max) = lng.into_inner();
        // Range checks also reject NaN and infinite values.
        if !(is_latitude(lat_min) && is_latitude(lat_max)) {
            return Err(RegionInvalidation::LatitudeBounds(name));
        }
        if !(is_longitude(lng_min) && is_longitude(lng_max)) {
            return Err(RegionInvalidation::LongitudeBounds(name));
        }
        if lat_min > lat_max {
            return Err(RegionInvalidation::LatitudeRange(name));
        }
        if lng_min > lng_max {
            return Err(RegionInvalidation::LongitudeRange(name));
        }
        if weight < 1 {
            return Err(RegionInvalidation::Weight(name));
        }
        Ok(Self {
            name,
            lat_min,
            lat_max,
            lng_min,
            lng_max,
            weight,
        })
    }

    /// Creates a region from bounds that are known to be valid.
    pub const fn new_unchecked(
        name: String,
        (lat_min, lat_max): (f64, f64),
        (lng_min, lng_max): (f64, f64),
        weight: u32,
    ) -> Self {
        Self {
            name,
            lat_min,
            lat_max,
            lng_min,
            lng_max,
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat_range(&self) -> RangeInclusive<f64> {
        self.lat_min..=self.lat_max
    }

    pub fn lng_range(&self) -> RangeInclusive<f64> {
        self.lng_min..=self.lng_max
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        self.lat_range().contains(&pos.lat) && self.lng_range().contains(&pos.lng)
    }
}

fn is_latitude(value: f64) -> bool {
    (-90.0..=90.0).contains(&value)
}

fn is_longitude(value: f64) -> bool {
    (-180.0..=180.0).contains(&value)
}
