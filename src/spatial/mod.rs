//! Spatial data structures for generated levels
//!
//! This module contains spatial-related functionality including:
//! - Caller-owned tile grids and generation regions
//! - The closed tile vocabulary written by the generator

/// Tile grid container and generation regions
pub mod grid;
/// Tile vocabulary and renderer codes
pub mod tiles;

pub use grid::TileGrid;
