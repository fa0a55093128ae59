//! Caller-owned tile grid and the sub-region written by one generation call
//!
//! The grid is a plain rectangular container: generation mutates it in place
//! through a region window and never resizes or retains it. Ownership stays
//! with the caller before and after the call.

use std::fmt;

use ndarray::Array2;

use crate::spatial::tiles::TileType;

/// Rectangular window of a [`TileGrid`] targeted by one generation call
///
/// Rows `[top, top + height)` and columns `[left, left + width)`. All writes
/// performed by the generation passes land inside this window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeRegion {
    /// First row written (vertical offset from the grid origin)
    pub top: usize,
    /// First column written (horizontal offset from the grid origin)
    pub left: usize,
    /// Region height in tiles
    pub height: usize,
    /// Region width in tiles
    pub width: usize,
}

impl MazeRegion {
    /// One past the last row of the region
    pub const fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// One past the last column of the region
    pub const fn right(&self) -> usize {
        self.left + self.width
    }

    /// Whether a grid coordinate falls inside the region
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row < self.bottom() && col >= self.left && col < self.right()
    }
}

/// Mutable rectangular container of tiles owned by the caller
///
/// Backed by a dense two-dimensional array indexed as `(row, col)`. A fresh
/// grid is entirely clear floor; the generator overwrites a sub-region and
/// leaves everything outside it untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Array2<TileType>,
}

impl TileGrid {
    /// Create a grid of the given dimensions filled with clear tiles
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tiles: Array2::from_elem((rows, cols), TileType::Clear),
        }
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Tile at a coordinate, or `None` outside the grid
    pub fn tile(&self, row: usize, col: usize) -> Option<TileType> {
        self.tiles.get([row, col]).copied()
    }

    /// Overwrite the tile at a coordinate
    ///
    /// Out-of-bounds coordinates are ignored; generation validates its region
    /// against the grid before writing, so in-tree callers never miss.
    pub fn set(&mut self, row: usize, col: usize, tile: TileType) {
        if let Some(slot) = self.tiles.get_mut([row, col]) {
            *slot = tile;
        }
    }

    /// Whether the region lies fully inside the grid
    pub fn contains_region(&self, region: &MazeRegion) -> bool {
        region.bottom() <= self.rows() && region.right() <= self.cols()
    }

    /// Renderer codes for every tile
    ///
    /// The flat integer encoding handed to the tilemap layer; see
    /// [`TileType::code`] for the mapping.
    pub fn codes(&self) -> Array2<u8> {
        self.tiles.mapv(TileType::code)
    }

    /// Borrow the underlying tile array
    pub const fn as_array(&self) -> &Array2<TileType> {
        &self.tiles
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let glyph = self.tile(row, col).map_or(' ', TileType::glyph);
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MazeRegion, TileGrid};
    use crate::spatial::tiles::TileType;

    #[test]
    fn test_new_grid_is_all_clear() {
        let grid = TileGrid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        for ((_, _), &tile) in grid.as_array().indexed_iter() {
            assert_eq!(tile, TileType::Clear);
        }
    }

    #[test]
    fn test_out_of_bounds_access_is_safe() {
        let mut grid = TileGrid::new(2, 2);
        assert_eq!(grid.tile(5, 0), None);
        grid.set(5, 0, TileType::Wall);
        assert_eq!(grid, TileGrid::new(2, 2));
    }

    #[test]
    fn test_region_bounds_checks() {
        let grid = TileGrid::new(10, 8);
        let inside = MazeRegion {
            top: 2,
            left: 1,
            height: 7,
            width: 7,
        };
        let overflowing = MazeRegion {
            top: 4,
            left: 0,
            height: 7,
            width: 7,
        };
        assert!(grid.contains_region(&inside));
        assert!(!grid.contains_region(&overflowing));

        assert!(inside.contains(2, 1));
        assert!(inside.contains(8, 7));
        assert!(!inside.contains(9, 7));
        assert!(!inside.contains(1, 1));
    }
}
