//! **costgrid-core** — a fixed-size 2D cost surface for shortest-path search.
//!
//! This crate provides the map model consumed by search code: [`Location`]
//! coordinates, the [`GridMap`] cost store with its start and finish
//! locations, and the [`CostSource`] trait through which a search reads it.
//! Every coordinate-taking accessor is bounds-checked and reports
//! [`MapError`] rather than clamping.

pub mod error;
pub mod geom;
pub mod map;
pub mod traits;

pub use error::{Endpoint, MapError};
pub use geom::{Bounds, Location};
pub use map::{GridMap, GridMapConfig, IMPASSABLE, alloc_cells};
pub use traits::CostSource;
