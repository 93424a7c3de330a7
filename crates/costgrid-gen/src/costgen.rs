//! Random generators that fill a [`GridMap`] for a search to work on.
//!
//! Two passes are provided:
//! - **Obstacle scattering**: marks a fraction of cells [`IMPASSABLE`],
//!   never touching the start or finish cell.
//! - **Cost noise**: gives every passable cell a uniform random cost.

use std::ops::RangeInclusive;

use costgrid_core::{GridMap, IMPASSABLE, Location, MapError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Parameters for [`CostGen::generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostGenConfig {
    /// Fraction (0.0–1.0) of eligible cells to block.
    pub obstacle_density: f64,
    pub min_cost: i32,
    pub max_cost: i32,
}

impl Default for CostGenConfig {
    fn default() -> Self {
        Self {
            obstacle_density: 0.25,
            min_cost: 0,
            max_cost: 0,
        }
    }
}

/// Random map generator.
pub struct CostGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> CostGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Block `density` of the cells that are neither start nor finish.
    ///
    /// `density` is clamped to `[0, 1]`. Returns the number of cells blocked.
    pub fn scatter_obstacles(&mut self, map: &mut GridMap, density: f64) -> Result<usize, MapError> {
        let (start, finish) = (map.start(), map.finish());
        let mut candidates: Vec<Location> = map
            .bounds()
            .locations()
            .filter(|&loc| loc != start && loc != finish)
            .collect();
        let target = (candidates.len() as f64 * density.clamp(0.0, 1.0)) as usize;

        candidates.shuffle(&mut self.rng);
        for &loc in &candidates[..target] {
            map.set_cost_at(loc, IMPASSABLE)?;
        }
        log::debug!(
            "blocked {target} of {} cells on {}x{} map",
            candidates.len(),
            map.width(),
            map.height()
        );
        Ok(target)
    }

    /// Give each passable cell a uniform random cost from `range`.
    ///
    /// [`IMPASSABLE`] is never drawn, so the set of blocked cells is left as
    /// it was. A range holding no other value leaves the map untouched.
    /// Returns the number of cells written.
    pub fn random_costs(
        &mut self,
        map: &mut GridMap,
        range: RangeInclusive<i32>,
    ) -> Result<usize, MapError> {
        if range.is_empty() || range == (IMPASSABLE..=IMPASSABLE) {
            log::warn!("no passable cost in {range:?}, leaving costs unchanged");
            return Ok(0);
        }
        let passable: Vec<Location> = map
            .iter()
            .filter(|&(_, cost)| cost != IMPASSABLE)
            .map(|(loc, _)| loc)
            .collect();
        for &loc in &passable {
            let cost = loop {
                let c = self.rng.random_range(range.clone());
                if c != IMPASSABLE {
                    break c;
                }
            };
            map.set_cost_at(loc, cost)?;
        }
        Ok(passable.len())
    }

    /// Run both passes with the given configuration: reset the map to zero,
    /// scatter obstacles, then add cost noise.
    ///
    /// Returns the number of cells blocked.
    pub fn generate(&mut self, map: &mut GridMap, config: &CostGenConfig) -> Result<usize, MapError> {
        map.fill(0);
        let blocked = self.scatter_obstacles(map, config.obstacle_density)?;
        self.random_costs(map, config.min_cost..=config.max_cost)?;
        Ok(blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blocked(map: &GridMap) -> usize {
        map.iter().filter(|&(_, c)| c == IMPASSABLE).count()
    }

    #[test]
    fn scatter_blocks_requested_fraction() {
        let mut map = GridMap::new(10, 10).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(7));
        let n = g.scatter_obstacles(&mut map, 0.5).unwrap();
        // 98 candidates once start and finish are excluded.
        assert_eq!(n, 49);
        assert_eq!(blocked(&map), 49);
    }

    #[test]
    fn scatter_never_blocks_endpoints() {
        let mut map = GridMap::new(6, 4).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(1));
        let n = g.scatter_obstacles(&mut map, 1.0).unwrap();
        assert_eq!(n, 22);
        assert_eq!(map.cost_at(map.start()), Ok(0));
        assert_eq!(map.cost_at(map.finish()), Ok(0));
    }

    #[test]
    fn scatter_clamps_density() {
        let mut map = GridMap::new(3, 3).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(3));
        assert_eq!(g.scatter_obstacles(&mut map, -2.0).unwrap(), 0);
        assert_eq!(g.scatter_obstacles(&mut map, 5.0).unwrap(), 7);
    }

    #[test]
    fn scatter_ignores_off_map_endpoints() {
        let mut map = GridMap::new(2, 2).unwrap();
        map.set_start(Location::new(-1, -1)).unwrap();
        map.set_finish(Location::new(9, 9)).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(5));
        assert_eq!(g.scatter_obstacles(&mut map, 1.0).unwrap(), 4);
    }

    #[test]
    fn random_costs_stay_in_range_and_skip_blocked() {
        let mut map = GridMap::new(8, 8).unwrap();
        map.set_cost(3, 3, IMPASSABLE).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(11));
        let n = g.random_costs(&mut map, 1..=9).unwrap();
        assert_eq!(n, 63);
        assert_eq!(map.cost(3, 3), Ok(IMPASSABLE));
        assert!(
            map.iter()
                .filter(|&(loc, _)| loc != Location::new(3, 3))
                .all(|(_, c)| (1..=9).contains(&c))
        );
    }

    #[test]
    fn empty_cost_range_is_a_no_op() {
        let mut map = GridMap::new(3, 3).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(2));
        #[allow(clippy::reversed_empty_ranges)]
        let n = g.random_costs(&mut map, 5..=1).unwrap();
        assert_eq!(n, 0);
        assert!(map.iter().all(|(_, c)| c == 0));
    }

    #[test]
    fn cost_noise_never_blocks_cells() {
        let mut map = GridMap::new(6, 6).unwrap();
        map.set_cost(2, 2, IMPASSABLE).unwrap();
        let mut g = CostGen::new(StdRng::seed_from_u64(9));
        assert_eq!(g.random_costs(&mut map, -2..=0).unwrap(), 35);
        assert_eq!(blocked(&map), 1);
        assert!(map.iter().all(|(_, c)| c == -2 || c == 0 || c == IMPASSABLE));

        // Only the blocked value is on offer: nothing is written.
        let before = map.clone();
        assert_eq!(g.random_costs(&mut map, IMPASSABLE..=IMPASSABLE).unwrap(), 0);
        assert_eq!(map, before);
    }

    #[test]
    fn generate_reports_the_blocked_count_on_the_map() {
        let config = CostGenConfig {
            obstacle_density: 0.0,
            min_cost: -1,
            max_cost: -1,
        };
        let mut map = GridMap::new(4, 4).unwrap();
        let n = CostGen::new(StdRng::seed_from_u64(4))
            .generate(&mut map, &config)
            .unwrap();
        assert_eq!(n, 0);
        assert_eq!(blocked(&map), 0);

        let config = CostGenConfig {
            obstacle_density: 0.5,
            min_cost: -3,
            max_cost: 3,
        };
        let n = CostGen::new(StdRng::seed_from_u64(4))
            .generate(&mut map, &config)
            .unwrap();
        assert_eq!(n, 7);
        assert_eq!(blocked(&map), n);
    }

    #[test]
    fn generate_is_deterministic_for_a_seed() {
        let config = CostGenConfig {
            obstacle_density: 0.3,
            min_cost: 1,
            max_cost: 4,
        };
        let mut a = GridMap::new(12, 9).unwrap();
        let mut b = GridMap::new(12, 9).unwrap();
        let na = CostGen::new(StdRng::seed_from_u64(42))
            .generate(&mut a, &config)
            .unwrap();
        let nb = CostGen::new(StdRng::seed_from_u64(42))
            .generate(&mut b, &config)
            .unwrap();
        assert_eq!(na, nb);
        assert_eq!(a, b);
        assert_eq!(blocked(&a), na);
    }

    #[test]
    fn generate_resets_previous_content() {
        let mut map = GridMap::new(5, 5).unwrap();
        map.fill(IMPASSABLE);
        let config = CostGenConfig {
            obstacle_density: 0.0,
            ..CostGenConfig::default()
        };
        CostGen::new(rand::rng()).generate(&mut map, &config).unwrap();
        assert!(map.iter().all(|(_, c)| c == 0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_fills_missing_fields() {
        let cfg: CostGenConfig = serde_json::from_str(r#"{"max_cost":8}"#).unwrap();
        assert_eq!(cfg.max_cost, 8);
        assert_eq!(cfg.obstacle_density, CostGenConfig::default().obstacle_density);
    }
}
