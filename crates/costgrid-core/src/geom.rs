//! Cell coordinates and the extent of a map.

use std::fmt;

use crate::error::MapError;

/// Coordinates of one cell. X grows right, Y grows down.
///
/// A `Location` is not tied to any map and may lie off it; the neighbours
/// of an edge cell routinely do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// The cell at column `x`, row `y`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The location `dx` columns right and `dy` rows down.
    ///
    /// Wraps at the `i32` limits; a wrapped result is still rejected by any
    /// map smaller than the whole `i32` plane.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Location; 4] {
        [(0, -1), (1, 0), (0, 1), (-1, 0)].map(|(dx, dy)| self.shift(dx, dy))
    }

    /// The cardinal neighbours followed by the diagonals, starting up-right
    /// and turning clockwise.
    #[inline]
    pub fn neighbors_8(self) -> [Location; 8] {
        [(0, -1), (1, 0), (0, 1), (-1, 0), (1, -1), (1, 1), (-1, 1), (-1, -1)]
            .map(|(dx, dy)| self.shift(dx, dy))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The cells `[0, width) × [0, height)` of a map, laid out row by row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// The extent `width` columns by `height` rows.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of cells, failing for non-positive sizes or a count that does
    /// not fit in `usize`.
    pub fn checked_len(self) -> Result<usize, MapError> {
        let invalid = MapError::InvalidDimension {
            width: self.width,
            height: self.height,
        };
        if self.width <= 0 || self.height <= 0 {
            return Err(invalid);
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(invalid)
    }

    /// Number of cells; zero for a degenerate extent.
    #[inline]
    pub fn len(self) -> usize {
        self.checked_len().unwrap_or(0)
    }

    /// Whether the extent holds no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `loc` is one of the cells.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        (0..self.width).contains(&loc.x) && (0..self.height).contains(&loc.y)
    }

    /// Buffer offset of `loc`, or `None` if it lies outside.
    #[inline]
    pub fn index(self, loc: Location) -> Option<usize> {
        self.contains(loc)
            .then(|| loc.y as usize * self.width as usize + loc.x as usize)
    }

    /// The location stored at buffer offset `idx`.
    #[inline]
    pub fn location(self, idx: usize) -> Location {
        let w = self.width as usize;
        Location::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Every cell, in buffer order.
    pub fn locations(self) -> impl ExactSizeIterator<Item = Location> {
        (0..self.len()).map(move |idx| self.location(idx))
    }
}
