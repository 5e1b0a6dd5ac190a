//! Spatial storage for the particle field

pub mod grid;
