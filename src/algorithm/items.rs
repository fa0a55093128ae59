//! Probabilistic item placement on remaining floor tiles
//!
//! The third and final sweep, identical in shape to door placement but with
//! no orientation logic: any still-clear cell whose draw succeeds receives a
//! uniformly chosen item. Running strictly after doors means a higher door
//! chance leaves fewer cells eligible for items.

use crate::algorithm::executor::RandomSelector;
use crate::spatial::grid::{MazeRegion, TileGrid};
use crate::spatial::tiles::{ITEM_KINDS, ItemKind, TileType};

/// An item committed to the grid during placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPlacement {
    /// Grid row of the item tile
    pub row: usize,
    /// Grid column of the item tile
    pub col: usize,
    /// Kind drawn uniformly for the sprite layer
    pub kind: ItemKind,
}

/// Convert remaining clear cells into items
///
/// Returns the committed items in placement order so a consumer can register
/// live pickups against its object pool.
pub fn place_items(
    grid: &mut TileGrid,
    region: &MazeRegion,
    item_chance: f64,
    random: &mut RandomSelector,
) -> Vec<ItemPlacement> {
    let mut placed = Vec::new();

    for row in region.top..region.bottom() {
        for col in region.left..region.right() {
            if !random.chance(item_chance) {
                continue;
            }
            if grid.tile(row, col) != Some(TileType::Clear) {
                continue;
            }

            let kind = random.pick(&ITEM_KINDS).copied().unwrap_or(ItemKind::Coin);
            grid.set(row, col, TileType::Item(kind));
            placed.push(ItemPlacement { row, col, kind });
        }
    }

    placed
}
