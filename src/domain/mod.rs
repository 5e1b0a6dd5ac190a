//! Domain types: colors and effect configuration

pub mod color;
pub mod config;
