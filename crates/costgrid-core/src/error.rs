//! Errors reported by [`GridMap`](crate::GridMap).

use std::fmt;

use crate::geom::Location;

/// Which of the two designated locations an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Finish => f.write_str("finish"),
        }
    }
}

/// Errors that can occur when building or accessing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Width or height was not strictly positive, or the grid is too large
    /// to allocate.
    InvalidDimension { width: i32, height: i32 },
    /// A coordinate fell outside `[0, width) × [0, height)`.
    OutOfBounds {
        loc: Location,
        width: i32,
        height: i32,
    },
    /// `set_start` / `set_finish` was given no location.
    NullLocation(Endpoint),
    /// A stored start or finish lies outside the map.
    EndpointOutOfBounds { which: Endpoint, loc: Location },
    /// Serialized cell data does not match the declared dimensions.
    CellCount { expected: usize, actual: usize },
    /// Two grids that must line up cell for cell have different sizes.
    SizeMismatch {
        expected: (i32, i32),
        actual: (i32, i32),
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } if *width > 0 && *height > 0 => {
                write!(f, "a {width}x{height} grid is too large to allocate")
            }
            Self::InvalidDimension { width, height } => write!(
                f,
                "width and height must be positive values; got {width}x{height}"
            ),
            Self::OutOfBounds { loc, width, height } => {
                if loc.x < 0 || loc.x >= *width {
                    write!(f, "x must be in range [0, {width}), got {}", loc.x)
                } else {
                    write!(f, "y must be in range [0, {height}), got {}", loc.y)
                }
            }
            Self::NullLocation(which) => write!(f, "{which} location cannot be absent"),
            Self::EndpointOutOfBounds { which, loc } => {
                write!(f, "{which} location {loc} lies outside the map")
            }
            Self::CellCount { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "expected a {}x{} grid, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_names_the_offending_axis() {
        let x_err = MapError::OutOfBounds {
            loc: Location::new(5, 0),
            width: 5,
            height: 3,
        };
        assert_eq!(x_err.to_string(), "x must be in range [0, 5), got 5");

        let y_err = MapError::OutOfBounds {
            loc: Location::new(0, -1),
            width: 5,
            height: 3,
        };
        assert_eq!(y_err.to_string(), "y must be in range [0, 3), got -1");
    }

    #[test]
    fn display_messages() {
        let e = MapError::InvalidDimension {
            width: 0,
            height: 4,
        };
        assert_eq!(
            e.to_string(),
            "width and height must be positive values; got 0x4"
        );
        let e = MapError::InvalidDimension {
            width: i32::MAX,
            height: 2,
        };
        assert_eq!(e.to_string(), "a 2147483647x2 grid is too large to allocate");
        let e = MapError::SizeMismatch {
            expected: (2, 2),
            actual: (3, 2),
        };
        assert_eq!(e.to_string(), "expected a 2x2 grid, got 3x2");
        assert_eq!(
            MapError::NullLocation(Endpoint::Finish).to_string(),
            "finish location cannot be absent"
        );
        let e = MapError::EndpointOutOfBounds {
            which: Endpoint::Start,
            loc: Location::new(-1, 2),
        };
        assert_eq!(e.to_string(), "start location (-1, 2) lies outside the map");
    }
}
