//! Maze connectivity via Eller's algorithm
//!
//! Builds a half-resolution connectivity matrix one row at a time. Cells
//! sharing a set label are already connected; horizontal merges and vertical
//! carries keep exactly one path between any two cells, so the finished
//! matrix is a spanning tree over the structural grid.

use std::collections::BTreeMap;

use ndarray::Array2;

use crate::algorithm::executor::RandomSelector;
use crate::io::configuration::{HORIZONTAL_JOIN_CHANCE, VERTICAL_CARRY_CHANCE};

/// Wall flags for one half-resolution cell
///
/// Only the bottom and right walls are stored; the top and left walls of a
/// cell belong to its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralCell {
    /// Wall between this cell and the one below
    pub bottom_walled: bool,
    /// Wall between this cell and the one to the right
    pub right_walled: bool,
}

impl Default for StructuralCell {
    fn default() -> Self {
        Self {
            bottom_walled: true,
            right_walled: true,
        }
    }
}

/// Source of maze connectivity consumed by the rasterizer
///
/// Implementations must return a spanning tree over the structural cells:
/// every cell reachable from every other through exactly one path. Content
/// may be randomized per call; the matrix shape is `(rows, cols)` exactly.
pub trait ConnectivitySource {
    /// Produce wall flags for a `rows` x `cols` structural grid
    fn connectivity(
        &self,
        rows: usize,
        cols: usize,
        random: &mut RandomSelector,
    ) -> Array2<StructuralCell>;
}

/// Row-by-row maze generation after Eller
///
/// Processes one row at a time with constant memory beyond the output
/// matrix. Set bookkeeping iterates in key order so that a fixed seed
/// reproduces the identical structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllerMaze;

impl ConnectivitySource for EllerMaze {
    fn connectivity(
        &self,
        rows: usize,
        cols: usize,
        random: &mut RandomSelector,
    ) -> Array2<StructuralCell> {
        let mut cells = Array2::from_elem((rows, cols), StructuralCell::default());
        if rows == 0 || cols == 0 {
            return cells;
        }

        // Set label per column of the row being processed; 0 = unassigned
        let mut row_sets = vec![0_usize; cols];
        let mut next_set = 1_usize;

        for row in 0..rows {
            let last_row = row + 1 == rows;

            for set in &mut row_sets {
                if *set == 0 {
                    *set = next_set;
                    next_set += 1;
                }
            }

            // Open right walls between members of different sets. Cells of
            // the same set are already connected; merging them again would
            // close a loop. The last row merges unconditionally so every
            // remaining set ends up connected.
            for col in 1..cols {
                let left_set = row_sets.get(col - 1).copied().unwrap_or(0);
                let right_set = row_sets.get(col).copied().unwrap_or(0);
                if left_set == right_set {
                    continue;
                }
                if last_row || random.chance(HORIZONTAL_JOIN_CHANCE) {
                    if let Some(cell) = cells.get_mut([row, col - 1]) {
                        cell.right_walled = false;
                    }
                    for set in &mut row_sets {
                        if *set == right_set {
                            *set = left_set;
                        }
                    }
                }
            }

            if last_row {
                break;
            }

            // Every set must carry at least one cell into the next row or it
            // would be sealed off from the rest of the maze.
            let mut columns_by_set: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
            for (col, &set) in row_sets.iter().enumerate() {
                columns_by_set.entry(set).or_default().push(col);
            }

            let mut next_row = vec![0_usize; cols];
            for (set, columns) in &columns_by_set {
                let mut carried = false;
                for &col in columns {
                    if random.chance(VERTICAL_CARRY_CHANCE) {
                        if let Some(cell) = cells.get_mut([row, col]) {
                            cell.bottom_walled = false;
                        }
                        if let Some(slot) = next_row.get_mut(col) {
                            *slot = *set;
                        }
                        carried = true;
                    }
                }
                if !carried {
                    if let Some(&col) = random.pick(columns) {
                        if let Some(cell) = cells.get_mut([row, col]) {
                            cell.bottom_walled = false;
                        }
                        if let Some(slot) = next_row.get_mut(col) {
                            *slot = *set;
                        }
                    }
                }
            }
            row_sets = next_row;
        }

        cells
    }
}
