//! A map-sized array of [`CellViewState`] values.
//!
//! The editor layer owns a [`ViewGrid`] next to its [`GridMap`]: passability
//! edits happen on the view, get written back to the map with
//! [`ViewGrid::apply_to`] before a search, and the search result is shown
//! with [`ViewGrid::mark_path`]. Passable cells translate to cost `0` and
//! impassable cells to [`IMPASSABLE`].

use costgrid_core::{Bounds, GridMap, IMPASSABLE, Location, MapError, alloc_cells};

use crate::cell::CellViewState;

/// Per-cell view state for a whole map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawViewGrid", into = "RawViewGrid")
)]
pub struct ViewGrid {
    width: i32,
    height: i32,
    cells: Vec<CellViewState>,
}

impl ViewGrid {
    /// A grid of passable, unflagged cells.
    pub fn new(width: i32, height: i32) -> Result<Self, MapError> {
        let cells = alloc_cells(Bounds::new(width, height), CellViewState::default())?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build view state matching `map`: cells costing [`IMPASSABLE`] are
    /// blocked, and the start and finish are flagged as endpoints.
    pub fn from_map(map: &GridMap) -> Self {
        let cells = map
            .iter()
            .map(|(_, cost)| CellViewState::new(cost != IMPASSABLE))
            .collect();
        let mut view = Self {
            width: map.width(),
            height: map.height(),
            cells,
        };
        view.sync_endpoints(map);
        view
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

    fn index(&self, loc: Location) -> Option<usize> {
        self.bounds().index(loc)
    }

    /// The view state at `loc`, or `None` if it lies off the grid.
    pub fn get(&self, loc: Location) -> Option<&CellViewState> {
        self.index(loc).map(|i| &self.cells[i])
    }

    /// Mutable access to the view state at `loc`.
    pub fn get_mut(&mut self, loc: Location) -> Option<&mut CellViewState> {
        self.index(loc).map(|i| &mut self.cells[i])
    }

    /// Iterate over `(Location, &CellViewState)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Location, &CellViewState)> + '_ {
        let bounds = self.bounds();
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (bounds.location(idx), cell))
    }

    /// Re-flag endpoints from the map's current start and finish.
    ///
    /// Endpoints lying off the grid are not shown.
    pub fn sync_endpoints(&mut self, map: &GridMap) {
        for cell in &mut self.cells {
            cell.set_endpoint(false);
        }
        for loc in [map.start(), map.finish()] {
            match self.get_mut(loc) {
                Some(cell) => cell.set_endpoint(true),
                None => log::debug!("endpoint {loc} is off the view grid"),
            }
        }
    }

    /// Write passability back into `map` as costs.
    ///
    /// Fails with [`MapError::SizeMismatch`], leaving `map` untouched, unless
    /// the view and the map have the same dimensions.
    pub fn apply_to(&self, map: &mut GridMap) -> Result<(), MapError> {
        let expected = (map.width(), map.height());
        let actual = (self.width, self.height);
        if expected != actual {
            return Err(MapError::SizeMismatch { expected, actual });
        }
        for (loc, cell) in self.iter() {
            let cost = if cell.is_passable() { 0 } else { IMPASSABLE };
            map.set_cost_at(loc, cost)?;
        }
        log::debug!("applied {}x{} view to map", self.width, self.height);
        Ok(())
    }

    /// Replace the displayed route with `route`.
    ///
    /// Locations off the grid are skipped. Returns the number of cells
    /// flagged.
    pub fn mark_path(&mut self, route: &[Location]) -> usize {
        self.clear_path();
        let mut marked = 0;
        for &loc in route {
            if let Some(cell) = self.get_mut(loc) {
                if !cell.is_on_path() {
                    cell.set_path(true);
                    marked += 1;
                }
            }
        }
        marked
    }

    /// Remove every path flag.
    pub fn clear_path(&mut self) {
        for cell in &mut self.cells {
            cell.set_path(false);
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawViewGrid {
    width: i32,
    height: i32,
    cells: Vec<CellViewState>,
}

#[cfg(feature = "serde")]
impl From<ViewGrid> for RawViewGrid {
    fn from(v: ViewGrid) -> Self {
        Self {
            width: v.width,
            height: v.height,
            cells: v.cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewGrid> for ViewGrid {
    type Error = MapError;

    fn try_from(raw: RawViewGrid) -> Result<Self, MapError> {
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
        })
    }
}
