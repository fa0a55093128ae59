//! Algorithm constants and runtime configuration defaults

// Eller row processing probabilities
/// Chance that two horizontally adjacent structural cells of different sets
/// merge
pub const HORIZONTAL_JOIN_CHANCE: f64 = 0.5;
/// Chance that a structural cell carries its set into the next row
pub const VERTICAL_CARRY_CHANCE: f64 = 0.5;

// Default values for configurable parameters
/// Per-cell door probability when the caller does not specify one
pub const DEFAULT_DOOR_CHANCE: f64 = 0.5;
/// Per-cell item probability when the caller does not specify one
pub const DEFAULT_ITEM_CHANCE: f64 = 0.2;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default maze width for the command line tool
pub const DEFAULT_WIDTH: usize = 31;
/// Default maze height for the command line tool
pub const DEFAULT_HEIGHT: usize = 31;

// Output settings
/// Pixels drawn per tile when exporting PNG images
pub const TILE_PIXEL_SIZE: u32 = 8;
