use rand::{rngs::StdRng, Rng, SeedableRng};

use super::prelude::*;

/// A source of candidate locations.
pub trait LocationSampler {
    fn sample_location(&mut self) -> Coordinate;
}

/// Draws a weighted-random region, then a uniform-random point within it.
///
/// Both components of the returned coordinate are rounded to
/// [`COORDINATE_PRECISION`] decimal digits and stay within the
/// bounds of the selected region.
pub fn sample_location<'r, R>(regions: &'r WeightedRegions, rng: &mut R) -> (&'r Region, Coordinate)
where
    R: Rng + ?Sized,
{
    let region = regions.choose(rng);
    let lat = sample_within(rng, region.lat_range().into_inner());
    let lng = sample_within(rng, region.lng_range().into_inner());
    (region, Coordinate::from_lat_lng_deg(lat, lng))
}

fn sample_within<R>(rng: &mut R, (min, max): (f64, f64)) -> f64
where
    R: Rng + ?Sized,
{
    let value = round_to_precision(rng.gen_range(min..=max));
    // Rounding might exceed bounds with more than 6 decimal digits.
    value.clamp(min, max)
}

#[derive(Debug)]
pub struct RandomLocationSampler<R = StdRng> {
    regions: WeightedRegions,
    rng: R,
}

impl RandomLocationSampler {
    pub fn new(regions: WeightedRegions) -> Self {
        Self::with_rng(regions, StdRng::from_entropy())
    }
}

impl<R> RandomLocationSampler<R>
where
    R: Rng,
{
    pub fn with_rng(regions: WeightedRegions, rng: R) -> Self {
        Self { regions, rng }
    }
}

impl Default for RandomLocationSampler {
    fn default() -> Self {
        Self::new(WeightedRegions::default())
    }
}

impl<R> LocationSampler for RandomLocationSampler<R>
where
    R: Rng,
{
    fn sample_location(&mut self) -> Coordinate {
        let (region, pos) = sample_location(&self.regions, &mut self.rng);
        log::debug!("Sampled location {pos} in region '{}'", region.name());
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_locations_are_within_region_bounds() {
        let regions = WeightedRegions::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let (region, pos) = sample_location(&regions, &mut rng);
            assert!(region.contains(&pos), "{pos} not in {region:?}");
            assert!(pos.is_valid());
            assert!(has_coordinate_precision(pos.lat));
            assert!(has_coordinate_precision(pos.lng));
        }
    }

    #[test]
    fn sample_from_degenerated_region() {
        let region = Region::try_new("spot", 40.0..=40.0, -74.0..=-74.0, 1).unwrap();
        let regions = WeightedRegions::try_new(vec![region]).unwrap();
        let mut sampler = RandomLocationSampler::with_rng(regions, StdRng::seed_from_u64(1));
        assert_eq!(
            Coordinate::from_lat_lng_deg(40.0, -74.0),
            sampler.sample_location()
        );
    }

    #[test]
    fn keep_bounds_with_high_precision_limits() {
        let region = Region::try_new("tiny", 1.0..=1.000_000_6, 2.0..=2.0, 1).unwrap();
        let regions = WeightedRegions::try_new(vec![region.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let (_, pos) = sample_location(&regions, &mut rng);
            assert!(region.contains(&pos));
        }
    }

    #[test]
    fn seeded_samplers_are_deterministic() {
        let mut a = RandomLocationSampler::with_rng(
            WeightedRegions::default(),
            StdRng::seed_from_u64(99),
        );
        let mut b = RandomLocationSampler::with_rng(
            WeightedRegions::default(),
            StdRng::seed_from_u64(99),
        );
        for _ in 0..10 {
            assert_eq!(a.sample_location(), b.sample_location());
        }
    }
}
