//! A fixed-size grid of traversal costs with designated start and finish.
//!
//! [`GridMap`] stores one `i32` cost per cell in a single row-major buffer.
//! Every coordinate-taking accessor checks the half-open range
//! `[0, width) × [0, height)` and reports [`MapError::OutOfBounds`] instead
//! of clamping or wrapping, so a search walking neighbours off the edge gets
//! a predictable rejection.

use crate::error::{Endpoint, MapError};
use crate::geom::{Bounds, Location};

/// Cost conventionally used for cells a search must not enter.
///
/// The map itself attaches no meaning to it; the view and generator layers
/// use it to translate between passability and cost.
pub const IMPASSABLE: i32 = -1;

/// One `value` per cell of `bounds`.
///
/// Fails with [`MapError::InvalidDimension`] when the extent is not
/// positive or the buffer cannot be allocated.
pub fn alloc_cells<T: Clone>(bounds: Bounds, value: T) -> Result<Vec<T>, MapError> {
    let len = bounds.checked_len()?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| MapError::InvalidDimension {
            width: bounds.width,
            height: bounds.height,
        })?;
    cells.resize(len, value);
    Ok(cells)
}

/// Construction parameters for a [`GridMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridMapConfig {
    pub width: i32,
    pub height: i32,
    /// Overrides the default start on the left edge.
    pub start: Option<Location>,
    /// Overrides the default finish on the right edge.
    pub finish: Option<Location>,
}

impl Default for GridMapConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            start: None,
            finish: None,
        }
    }
}

/// A rectangular map of integer traversal costs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGridMap", into = "RawGridMap")
)]
pub struct GridMap {
    width: i32,
    height: i32,
    cells: Vec<i32>,
    start: Location,
    finish: Location,
}

impl GridMap {
    /// Create a map with every cost set to zero.
    ///
    /// The start sits at `(0, height / 2)` and the finish at
    /// `(width - 1, height / 2)`.
    pub fn new(width: i32, height: i32) -> Result<Self, MapError> {
        let cells = alloc_cells(Bounds::new(width, height), 0)?;
        log::debug!("creating {width}x{height} grid map");
        Ok(Self {
            width,
            height,
            cells,
            start: Location::new(0, height / 2),
            finish: Location::new(width - 1, height / 2),
        })
    }

    /// Create a map from a [`GridMapConfig`], applying any endpoint overrides.
    pub fn from_config(config: &GridMapConfig) -> Result<Self, MapError> {
        let mut map = Self::new(config.width, config.height)?;
        if let Some(start) = config.start {
            map.set_start(start)?;
        }
        if let Some(finish) = config.finish {
            map.set_finish(finish)?;
        }
        Ok(map)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The cells `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Whether `(x, y)` lies on the map.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_location(Location::new(x, y))
    }

    /// [`contains`](Self::contains) for a [`Location`].
    #[inline]
    pub fn contains_location(&self, loc: Location) -> bool {
        self.bounds().contains(loc)
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, MapError> {
        let loc = Location::new(x, y);
        self.bounds().index(loc).ok_or(MapError::OutOfBounds {
            loc,
            width: self.width,
            height: self.height,
        })
    }

    /// The stored cost of cell `(x, y)`.
    pub fn cost(&self, x: i32, y: i32) -> Result<i32, MapError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// [`cost`](Self::cost) for a [`Location`].
    pub fn cost_at(&self, loc: Location) -> Result<i32, MapError> {
        self.cost(loc.x, loc.y)
    }

    /// Overwrite the cost of cell `(x, y)`.
    pub fn set_cost(&mut self, x: i32, y: i32, value: i32) -> Result<(), MapError> {
        let idx = self.index(x, y)?;
        log::trace!("cost ({x}, {y}) = {value}");
        self.cells[idx] = value;
        Ok(())
    }

    /// [`set_cost`](Self::set_cost) for a [`Location`].
    pub fn set_cost_at(&mut self, loc: Location, value: i32) -> Result<(), MapError> {
        self.set_cost(loc.x, loc.y, value)
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: i32) {
        self.cells.fill(value);
    }

    /// Iterate over `(Location, cost)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Location, i32)> + '_ {
        let bounds = self.bounds();
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cost)| (bounds.location(idx), cost))
    }

    /// Where a route should begin.
    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    /// Replace the start location.
    ///
    /// The location is not checked against the map bounds; see
    /// [`endpoints`](Self::endpoints).
    pub fn set_start(&mut self, loc: impl Into<Option<Location>>) -> Result<(), MapError> {
        self.start = self.accept_endpoint(Endpoint::Start, loc.into())?;
        Ok(())
    }

    /// Where a route should end.
    #[inline]
    pub fn finish(&self) -> Location {
        self.finish
    }

    /// Replace the finish location. Same rules as [`set_start`](Self::set_start).
    pub fn set_finish(&mut self, loc: impl Into<Option<Location>>) -> Result<(), MapError> {
        self.finish = self.accept_endpoint(Endpoint::Finish, loc.into())?;
        Ok(())
    }

    fn accept_endpoint(
        &self,
        which: Endpoint,
        loc: Option<Location>,
    ) -> Result<Location, MapError> {
        let loc = loc.ok_or(MapError::NullLocation(which))?;
        if !self.contains_location(loc) {
            log::warn!(
                "{which} location {loc} is outside the {}x{} map",
                self.width,
                self.height
            );
        }
        Ok(loc)
    }

    /// Start and finish, provided both lie on the map.
    ///
    /// Searches should call this rather than trusting the stored endpoints,
    /// since the setters accept any location.
    pub fn endpoints(&self) -> Result<(Location, Location), MapError> {
        for (which, loc) in [(Endpoint::Start, self.start), (Endpoint::Finish, self.finish)] {
            if !self.contains_location(loc) {
                return Err(MapError::EndpointOutOfBounds { which, loc });
            }
        }
        Ok((self.start, self.finish))
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGridMap {
    width: i32,
    height: i32,
    cells: Vec<i32>,
    start: Location,
    finish: Location,
}

#[cfg(feature = "serde")]
impl From<GridMap> for RawGridMap {
    fn from(map: GridMap) -> Self {
        Self {
            width: map.width,
            height: map.height,
            cells: map.cells,
            start: map.start,
            finish: map.finish,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMap> for GridMap {
    type Error = MapError;

    fn try_from(raw: RawGridMap) -> Result<Self, MapError> {
        let expected = Bounds::new(raw.width, raw.height).checked_len()?;
        if raw.cells.len() != expected {
            return Err(MapError::CellCount {
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
            start: raw.start,
            finish: raw.finish,
        })
    }
}
