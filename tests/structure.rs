//! Validates the spanning-tree guarantees of the Eller connectivity source

use std::collections::VecDeque;

use mazetile::algorithm::executor::RandomSelector;
use mazetile::algorithm::structure::{ConnectivitySource, EllerMaze, StructuralCell};
use ndarray::Array2;

fn open_edges(cells: &Array2<StructuralCell>) -> usize {
    let (rows, cols) = cells.dim();
    let mut edges = 0;
    for ((row, col), cell) in cells.indexed_iter() {
        if row + 1 < rows && !cell.bottom_walled {
            edges += 1;
        }
        if col + 1 < cols && !cell.right_walled {
            edges += 1;
        }
    }
    edges
}

fn reachable_cells(cells: &Array2<StructuralCell>) -> usize {
    let (rows, cols) = cells.dim();
    if rows == 0 || cols == 0 {
        return 0;
    }

    let open_down = |row: usize, col: usize| {
        cells
            .get([row, col])
            .is_some_and(|cell| !cell.bottom_walled)
    };
    let open_right = |row: usize, col: usize| {
        cells.get([row, col]).is_some_and(|cell| !cell.right_walled)
    };

    let mut seen = vec![false; rows * cols];
    let mut queue = VecDeque::from([(0_usize, 0_usize)]);
    if let Some(slot) = seen.first_mut() {
        *slot = true;
    }
    let mut count = 0;

    while let Some((row, col)) = queue.pop_front() {
        count += 1;
        let mut neighbors = Vec::new();
        if row + 1 < rows && open_down(row, col) {
            neighbors.push((row + 1, col));
        }
        if row > 0 && open_down(row - 1, col) {
            neighbors.push((row - 1, col));
        }
        if col + 1 < cols && open_right(row, col) {
            neighbors.push((row, col + 1));
        }
        if col > 0 && open_right(row, col - 1) {
            neighbors.push((row, col - 1));
        }
        for (nr, nc) in neighbors {
            if seen.get(nr * cols + nc) == Some(&false) {
                if let Some(slot) = seen.get_mut(nr * cols + nc) {
                    *slot = true;
                }
                queue.push_back((nr, nc));
            }
        }
    }

    count
}

// A spanning tree over N cells is connected with exactly N - 1 open edges;
// together those two checks also rule out cycles
#[test]
fn test_connectivity_is_a_spanning_tree() {
    for seed in 0..25 {
        for (rows, cols) in [(1, 1), (1, 8), (8, 1), (3, 3), (5, 9), (16, 16)] {
            let mut random = RandomSelector::new(seed);
            let cells = EllerMaze.connectivity(rows, cols, &mut random);

            assert_eq!(cells.dim(), (rows, cols));
            assert_eq!(
                reachable_cells(&cells),
                rows * cols,
                "{rows}x{cols} seed {seed}: not connected"
            );
            assert_eq!(
                open_edges(&cells),
                rows * cols - 1,
                "{rows}x{cols} seed {seed}: wrong edge count for a tree"
            );
        }
    }
}

#[test]
fn test_outer_walls_stay_closed() {
    let mut random = RandomSelector::new(6);
    let cells = EllerMaze.connectivity(7, 7, &mut random);

    for col in 0..7 {
        assert!(
            cells
                .get([6, col])
                .is_some_and(|cell| cell.bottom_walled),
            "last row must keep its bottom wall"
        );
    }
    for row in 0..7 {
        assert!(
            cells.get([row, 6]).is_some_and(|cell| cell.right_walled),
            "last column must keep its right wall"
        );
    }
}

#[test]
fn test_same_seed_reproduces_identical_structure() {
    let mut first_random = RandomSelector::new(1234);
    let mut second_random = RandomSelector::new(1234);
    let first = EllerMaze.connectivity(9, 11, &mut first_random);
    let second = EllerMaze.connectivity(9, 11, &mut second_random);
    assert_eq!(first, second);
}

#[test]
fn test_empty_dimensions_yield_empty_matrix() {
    let mut random = RandomSelector::new(0);
    let cells = EllerMaze.connectivity(0, 5, &mut random);
    assert_eq!(cells.dim(), (0, 5));
}
