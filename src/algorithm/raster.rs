//! Expansion of half-resolution connectivity into full-resolution tiles

use ndarray::Array2;

use crate::algorithm::structure::StructuralCell;
use crate::spatial::grid::{MazeRegion, TileGrid};
use crate::spatial::tiles::TileType;

const fn wall_or_clear(walled: bool) -> TileType {
    if walled { TileType::Wall } else { TileType::Clear }
}

/// Write a structural maze into a grid region at double resolution
///
/// Each structural cell at `(sy, sx)` lands on the raster coordinate
/// `(top + 2*sy, left + 2*sx)` and becomes clear floor. Its bottom and right
/// walls become the tiles directly below and to the right; the diagonal
/// corner between four cells is always a wall, which closes the lattice
/// around every cell. Tiles on the region's last row and column receive no
/// wall counterpart: the outer border is the caller's concern.
pub fn rasterize(grid: &mut TileGrid, region: &MazeRegion, structure: &Array2<StructuralCell>) {
    let bottom = region.bottom();
    let right = region.right();

    for row in (region.top..bottom).step_by(2) {
        for col in (region.left..right).step_by(2) {
            let cell = structure
                .get([(row - region.top) / 2, (col - region.left) / 2])
                .copied()
                .unwrap_or_default();

            grid.set(row, col, TileType::Clear);

            if row + 1 < bottom && col + 1 < right {
                grid.set(row + 1, col + 1, TileType::Wall);
            }
            if row + 1 < bottom {
                grid.set(row + 1, col, wall_or_clear(cell.bottom_walled));
            }
            if col + 1 < right {
                grid.set(row, col + 1, wall_or_clear(cell.right_walled));
            }
        }
    }
}
