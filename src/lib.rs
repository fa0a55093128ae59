//! Procedural maze generation producing tile grids for top-down game levels
//!
//! The generator combines Eller's algorithm for maze connectivity, a
//! rasterization step that doubles resolution into floor and wall tiles, and
//! two probabilistic placement passes that embed doors and collectible items.

#![forbid(unsafe_code)]

/// Core generation passes: connectivity, rasterization, door and item placement
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile grid management and the tile vocabulary
pub mod spatial;

pub use io::error::{MazeError, Result};
