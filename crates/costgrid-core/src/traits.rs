use crate::error::MapError;
use crate::geom::{Bounds, Location};
use crate::map::GridMap;

/// Read-only cost interface consumed by search code.
pub trait CostSource {
    /// The half-open rectangle of valid locations.
    fn bounds(&self) -> Bounds;

    /// Whether `loc` is a valid cell.
    fn contains(&self, loc: Location) -> bool {
        self.bounds().contains(loc)
    }

    /// Cost of entering `loc`. Fails for locations outside [`bounds`](Self::bounds).
    fn cost(&self, loc: Location) -> Result<i32, MapError>;

    /// Where a route should begin. Not guaranteed to be on the map.
    fn start(&self) -> Location;

    /// Where a route should end. Not guaranteed to be on the map.
    fn finish(&self) -> Location;
}

impl CostSource for GridMap {
    fn bounds(&self) -> Bounds {
        GridMap::bounds(self)
    }

    fn contains(&self, loc: Location) -> bool {
        self.contains_location(loc)
    }

    fn cost(&self, loc: Location) -> Result<i32, MapError> {
        self.cost_at(loc)
    }

    fn start(&self) -> Location {
        GridMap::start(self)
    }

    fn finish(&self) -> Location {
        GridMap::finish(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sums the costs along a route, the way a search scores a candidate.
    fn route_cost<S: CostSource>(src: &S, route: &[Location]) -> Result<i32, MapError> {
        route.iter().try_fold(0, |acc, &loc| Ok(acc + src.cost(loc)?))
    }

    #[test]
    fn grid_map_as_cost_source() {
        let mut m = GridMap::new(4, 4).unwrap();
        m.set_cost(1, 2, 3).unwrap();
        m.set_cost(2, 2, 4).unwrap();
        let src: &dyn CostSource = &m;
        assert_eq!(src.bounds(), Bounds::new(4, 4));
        assert!(src.contains(Location::new(3, 3)));
        assert!(!src.contains(Location::new(4, 3)));
        assert_eq!(src.start(), Location::new(0, 2));
        assert_eq!(src.finish(), Location::new(3, 2));

        let route: Vec<_> = (0..4).map(|x| Location::new(x, 2)).collect();
        assert_eq!(route_cost(&m, &route), Ok(7));
    }

    #[test]
    fn route_off_the_map_fails() {
        let m = GridMap::new(2, 2).unwrap();
        let route = [Location::new(1, 1), Location::new(2, 1)];
        assert!(matches!(
            route_cost(&m, &route),
            Err(MapError::OutOfBounds { .. })
        ));
    }
}
