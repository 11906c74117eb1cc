use rand::Rng;

use super::prelude::*;

/// Regions with a high probability of street-level coverage.
///
/// `(name, (lat_min, lat_max), (lng_min, lng_max), weight)`
const DEFAULT_REGIONS: [(&str, (f64, f64), (f64, f64), u32); 7] = [
    ("Urban US", (32.0, 42.0), (-118.0, -71.0), 3),
    ("Urban Europe", (45.0, 55.0), (-5.0, 20.0), 3),
    ("Japan", (34.0, 38.0), (130.0, 141.0), 2),
    ("Rest of North America", (25.0, 49.0), (-125.0, -66.0), 1),
    ("South America", (-34.0, -15.0), (-70.0, -40.0), 1),
    ("Australia", (-38.0, -25.0), (144.0, 153.0), 1),
    ("South Africa", (-34.0, -25.0), (18.0, 31.0), 1),
];

pub fn default_regions() -> Vec<Region> {
    DEFAULT_REGIONS
        .iter()
        .map(|(name, lat, lng, weight)| {
            Region::new_unchecked((*name).to_string(), *lat, *lng, *weight)
        })
        .collect()
}

/// An immutable table of regions that are selected
/// with a probability proportional to their weight.
#[derive(Debug, Clone)]
pub struct WeightedRegions {
    regions: Vec<Region>,
    // Prefix sums of the weights, i.e. the last
    // element is the total weight of all regions.
    cumulative_weights: Vec<u64>,
}

impl WeightedRegions {
    pub fn try_new(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::EmptyRegionTable);
        }
        let cumulative_weights = cumulative_weights(&regions);
        Ok(Self {
            regions,
            cumulative_weights,
        })
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn total_weight(&self) -> u64 {
        // The table is never empty
        self.cumulative_weights.last().copied().unwrap_or_default()
    }

    /// Maps a draw from `0..total_weight()` onto a region.
    ///
    /// Each region occupies a slot of `weight` consecutive
    /// values, so a uniform draw selects region `i` with
    /// probability `w_i / Σw`.
    pub fn region_at(&self, draw: u64) -> &Region {
        let index = self
            .cumulative_weights
            .partition_point(|&upper| upper <= draw)
            .min(self.regions.len() - 1);
        &self.regions[index]
    }

    pub fn choose<R>(&self, rng: &mut R) -> &Region
    where
        R: Rng + ?Sized,
    {
        let draw = rng.gen_range(0..self.total_weight());
        self.region_at(draw)
    }
}

impl Default for WeightedRegions {
    fn default() -> Self {
        let regions = default_regions();
        let cumulative_weights = cumulative_weights(&regions);
        Self {
            regions,
            cumulative_weights,
        }
    }
}

fn cumulative_weights(regions: &[Region]) -> Vec<u64> {
    regions
        .iter()
        .scan(0u64, |sum, region| {
            *sum += u64::from(region.weight());
            Some(*sum)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn region(name: &str, weight: u32) -> Region {
        Region::try_new(name, 0.0..=1.0, 0.0..=1.0, weight).unwrap()
    }

    #[test]
    fn default_table() {
        let table = WeightedRegions::default();
        assert_eq!(7, table.regions().len());
        assert_eq!(12, table.total_weight());
        for r in table.regions() {
            assert!(Region::try_new(r.name(), r.lat_range(), r.lng_range(), r.weight()).is_ok());
        }
    }

    #[test]
    fn reject_empty_table() {
        assert!(matches!(
            WeightedRegions::try_new(vec![]),
            Err(Error::EmptyRegionTable)
        ));
    }

    #[test]
    fn map_draws_onto_weight_slots() {
        let table =
            WeightedRegions::try_new(vec![region("a", 3), region("b", 1), region("c", 2)])
                .unwrap();
        assert_eq!(6, table.total_weight());
        let names: Vec<_> = (0..6).map(|d| table.region_at(d).name()).collect();
        assert_eq!(vec!["a", "a", "a", "b", "c", "c"], names);
    }

    #[test]
    fn same_result_as_expanded_list() {
        let table = WeightedRegions::default();
        let expanded: Vec<_> = table
            .regions()
            .iter()
            .flat_map(|r| std::iter::repeat(r.name()).take(r.weight() as usize))
            .collect();
        for (draw, name) in expanded.into_iter().enumerate() {
            assert_eq!(name, table.region_at(draw as u64).name());
        }
    }

    #[test]
    fn large_weights_do_not_allocate_slots() {
        let table =
            WeightedRegions::try_new(vec![region("a", u32::MAX), region("b", u32::MAX)]).unwrap();
        assert_eq!(2 * u64::from(u32::MAX), table.total_weight());
        assert_eq!("a", table.region_at(u64::from(u32::MAX) - 1).name());
        assert_eq!("b", table.region_at(u64::from(u32::MAX)).name());
    }

    #[test]
    fn selection_frequency_converges_to_weights() {
        let table = WeightedRegions::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let samples = 120_000;
        let mut counts = vec![0usize; table.regions().len()];
        for _ in 0..samples {
            let name = table.choose(&mut rng).name().to_owned();
            let index = table
                .regions()
                .iter()
                .position(|r| r.name() == name)
                .unwrap();
            counts[index] += 1;
        }
        let total = table.total_weight() as f64;
        for (region, count) in table.regions().iter().zip(counts) {
            let expected = f64::from(region.weight()) / total;
            let actual = count as f64 / samples as f64;
            assert!(
                (expected - actual).abs() < 0.01,
                "{}: expected {expected}, got {actual}",
                region.name()
            );
        }
    }

    #[test]
    fn default_regions_pass_validation() {
        for r in default_regions() {
            let (lat_min, lat_max) = r.lat_range().into_inner();
            let (lng_min, lng_max) = r.lng_range().into_inner();
            let checked =
                Region::try_new(r.name(), lat_min..=lat_max, lng_min..=lng_max, r.weight())
                    .unwrap();
            assert_eq!(r, checked);
        }
    }
}
