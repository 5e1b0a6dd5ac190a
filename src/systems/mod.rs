//! Systems - per-frame logic that acts on the grid

pub mod emission;
