//! Orchestration of the generation passes
//!
//! Validates parameters, then runs the structural, raster, door, and item
//! passes in order over the configured region. The grid is only written
//! inside that region, and only after every parameter has been checked, so
//! a failed call leaves the caller's grid untouched.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    algorithm::doors::{DoorPlacement, place_doors},
    algorithm::items::{ItemPlacement, place_items},
    algorithm::raster::rasterize,
    algorithm::structure::{ConnectivitySource, EllerMaze},
    io::configuration::{DEFAULT_DOOR_CHANCE, DEFAULT_ITEM_CHANCE},
    io::error::{MazeError, Result},
    spatial::grid::{MazeRegion, TileGrid},
};

/// Seeded random selector for reproducible stochastic choices
///
/// All three randomized passes draw from one selector threaded through the
/// call, never from ambient process state, so a fixed seed reproduces an
/// identical grid and identical placement records.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Independent draw against a probability in `[0, 1]`
    ///
    /// A probability of zero never succeeds; a probability of one always
    /// does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Uniform selection from a slice
    ///
    /// Returns `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        if options.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..options.len());
        options.get(index)
    }
}

/// Parameters for one generation call
#[derive(Clone, Copy, Debug)]
pub struct MazeConfig {
    /// Region width in tiles; must be odd
    pub width: usize,
    /// Region height in tiles; must be odd
    pub height: usize,
    /// Column of the region's left edge inside the grid
    pub horizontal_offset: usize,
    /// Row of the region's top edge inside the grid
    pub vertical_offset: usize,
    /// Per-cell door probability; `None` resolves to the documented default,
    /// while an explicit `Some(0.0)` means never place
    pub door_chance: Option<f64>,
    /// Per-cell item probability; `None` resolves to the documented default,
    /// while an explicit `Some(0.0)` means never place
    pub item_chance: Option<f64>,
}

impl MazeConfig {
    /// Configuration for a region at the grid origin with default chances
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            horizontal_offset: 0,
            vertical_offset: 0,
            door_chance: None,
            item_chance: None,
        }
    }

    /// The grid window this configuration writes into
    pub const fn region(&self) -> MazeRegion {
        MazeRegion {
            top: self.vertical_offset,
            left: self.horizontal_offset,
            height: self.height,
            width: self.width,
        }
    }
}

/// Doors and items committed during one generation call
///
/// Consumers instantiate live objects from these records; the grid itself
/// only stores tile codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    /// Doors in placement order
    pub doors: Vec<DoorPlacement>,
    /// Items in placement order
    pub items: Vec<ItemPlacement>,
}

fn validate(grid: &TileGrid, config: &MazeConfig) -> Result<()> {
    if config.width % 2 == 0 || config.height % 2 == 0 {
        return Err(MazeError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }

    for (parameter, chance) in [
        ("door_chance", config.door_chance),
        ("item_chance", config.item_chance),
    ] {
        if let Some(value) = chance {
            if !(0.0..=1.0).contains(&value) {
                return Err(MazeError::ChanceOutOfRange { parameter, value });
            }
        }
    }

    let region = config.region();
    if !grid.contains_region(&region) {
        return Err(MazeError::RegionOutOfBounds {
            required: (region.bottom(), region.right()),
            available: (grid.rows(), grid.cols()),
        });
    }

    Ok(())
}

/// Generate a maze into a grid region using Eller connectivity
///
/// Mutates the grid in place and returns the committed door and item
/// placements. Writes are confined to the configured region; nothing outside
/// it changes.
///
/// # Errors
///
/// Returns an error, with the grid untouched, if:
/// - Width or height is even
/// - A chance parameter falls outside `[0, 1]`
/// - The region does not fit inside the grid
pub fn generate_maze(
    grid: &mut TileGrid,
    config: &MazeConfig,
    random: &mut RandomSelector,
) -> Result<PlacementSummary> {
    generate_maze_with(grid, config, &EllerMaze, random)
}

/// Generate a maze with a caller-supplied connectivity source
///
/// Identical to [`generate_maze`] but takes any [`ConnectivitySource`], for
/// callers that swap the structural algorithm.
///
/// # Errors
///
/// Returns an error, with the grid untouched, if:
/// - Width or height is even
/// - A chance parameter falls outside `[0, 1]`
/// - The region does not fit inside the grid
pub fn generate_maze_with<S: ConnectivitySource>(
    grid: &mut TileGrid,
    config: &MazeConfig,
    source: &S,
    random: &mut RandomSelector,
) -> Result<PlacementSummary> {
    validate(grid, config)?;

    let region = config.region();
    let structure = source.connectivity(
        config.height.div_ceil(2),
        config.width.div_ceil(2),
        random,
    );
    rasterize(grid, &region, &structure);

    let doors = place_doors(
        grid,
        &region,
        config.door_chance.unwrap_or(DEFAULT_DOOR_CHANCE),
        random,
    );
    let items = place_items(
        grid,
        &region,
        config.item_chance.unwrap_or(DEFAULT_ITEM_CHANCE),
        random,
    );

    Ok(PlacementSummary { doors, items })
}
