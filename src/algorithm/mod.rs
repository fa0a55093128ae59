//! Maze generation passes
//!
//! Generation flows strictly forward: connectivity structure, raster tiles,
//! doors, then items. No pass reads ahead of what the previous pass wrote.

/// Probabilistic door placement over rasterized tiles
pub mod doors;
/// Orchestration of the generation passes and seeded randomness
pub mod executor;
/// Probabilistic item placement on remaining floor tiles
pub mod items;
/// Expansion of connectivity structure into full-resolution tiles
pub mod raster;
/// Maze connectivity via Eller's algorithm
pub mod structure;
