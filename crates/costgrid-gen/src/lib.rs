//! Random map generation for costgrid: obstacle scattering and cost noise.

pub mod costgen;

pub use costgen::{CostGen, CostGenConfig};
