//! Presentation state for costgrid maps.
//!
//! A renderer needs three booleans per cell (passable, endpoint, on-path)
//! and a colour derived from them. [`CellViewState`] holds those flags for
//! one cell, [`color_for`] is the derivation rule, and [`ViewGrid`] keeps
//! a whole map's worth of view state in sync with a
//! [`GridMap`](costgrid_core::GridMap).

pub mod cell;
pub mod color;
pub mod view_grid;

pub use cell::CellViewState;
pub use color::{Color, Palette, color_for};
pub use view_grid::ViewGrid;
