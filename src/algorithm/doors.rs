//! Probabilistic door placement over a rasterized region
//!
//! A second full sweep over the region, row-major. A cell becomes a door
//! when an independent per-cell draw succeeds, the cell is still clear
//! floor, and the four axis-aligned neighbors form one of the two door
//! patterns: walls above and below with open corridor left and right, or
//! walls left and right with open corridor above and below. Doors never sit
//! next to other doors.

use crate::algorithm::executor::RandomSelector;
use crate::spatial::grid::{MazeRegion, TileGrid};
use crate::spatial::tiles::{DOOR_STYLES, DoorStyle, Orientation, TileType};

/// A door committed to the grid during placement
///
/// Consumers instantiate live objects (sprites, bodies) from these records;
/// the grid itself only stores the tile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorPlacement {
    /// Grid row of the door tile
    pub row: usize,
    /// Grid column of the door tile
    pub col: usize,
    /// Orientation chosen from the local wall pattern
    pub orientation: Orientation,
    /// Style drawn uniformly for the sprite layer
    pub style: DoorStyle,
}

/// The four axis-aligned neighbors of a candidate cell
///
/// `None` marks a neighbor outside the region, which counts as a wall for
/// the wall flags and never as open floor.
struct NeighborProbe {
    up: Option<TileType>,
    down: Option<TileType>,
    left: Option<TileType>,
    right: Option<TileType>,
}

impl NeighborProbe {
    fn at(grid: &TileGrid, region: &MazeRegion, row: usize, col: usize) -> Self {
        let up = (row > region.top)
            .then(|| grid.tile(row - 1, col))
            .flatten();
        let down = (row + 1 < region.bottom())
            .then(|| grid.tile(row + 1, col))
            .flatten();
        let left = (col > region.left)
            .then(|| grid.tile(row, col - 1))
            .flatten();
        let right = (col + 1 < region.right())
            .then(|| grid.tile(row, col + 1))
            .flatten();
        Self {
            up,
            down,
            left,
            right,
        }
    }

    fn touches_door(&self) -> bool {
        [self.up, self.down, self.left, self.right]
            .into_iter()
            .flatten()
            .any(TileType::is_door)
    }

    fn door_orientation(&self) -> Option<Orientation> {
        let wall = |tile: Option<TileType>| tile.is_none_or(|t| matches!(t, TileType::Wall));
        let open = |tile: Option<TileType>| matches!(tile, Some(TileType::Clear));

        if wall(self.up) && wall(self.down) && open(self.left) && open(self.right) {
            Some(Orientation::UpDown)
        } else if wall(self.left) && wall(self.right) && open(self.up) && open(self.down) {
            Some(Orientation::LeftRight)
        } else {
            None
        }
    }
}

/// Convert eligible clear cells into doors
///
/// The chance draw happens for every cell, clear or not; eligibility is only
/// consulted after a successful draw. A successful draw with no structurally
/// valid door pattern leaves the cell clear. Returns the committed doors in
/// placement order.
pub fn place_doors(
    grid: &mut TileGrid,
    region: &MazeRegion,
    door_chance: f64,
    random: &mut RandomSelector,
) -> Vec<DoorPlacement> {
    let mut placed = Vec::new();

    for row in region.top..region.bottom() {
        for col in region.left..region.right() {
            if !random.chance(door_chance) {
                continue;
            }
            if grid.tile(row, col) != Some(TileType::Clear) {
                continue;
            }

            let probe = NeighborProbe::at(grid, region, row, col);
            if probe.touches_door() {
                continue;
            }
            let Some(orientation) = probe.door_orientation() else {
                continue;
            };

            let style = random.pick(&DOOR_STYLES).copied().unwrap_or(DoorStyle::Plain);
            grid.set(row, col, TileType::Door(orientation, style));
            placed.push(DoorPlacement {
                row,
                col,
                orientation,
                style,
            });
        }
    }

    placed
}
