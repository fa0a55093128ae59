//! Performance measurement for complete maze generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mazetile::algorithm::executor::{MazeConfig, RandomSelector, generate_maze};
use mazetile::spatial::TileGrid;
use std::hint::black_box;

/// Measures a full generation pass at a typical level size
fn bench_generate_63x63(c: &mut Criterion) {
    c.bench_function("generate_63x63", |b| {
        b.iter(|| {
            let mut grid = TileGrid::new(63, 63);
            let config = MazeConfig::new(63, 63);
            let mut random = RandomSelector::new(12_345);
            if generate_maze(&mut grid, &config, &mut random).is_err() {
                return;
            }
            black_box(grid.rows());
        });
    });
}

/// Measures generation at a large level size to expose scan costs
fn bench_generate_255x255(c: &mut Criterion) {
    c.bench_function("generate_255x255", |b| {
        b.iter(|| {
            let mut grid = TileGrid::new(255, 255);
            let config = MazeConfig::new(255, 255);
            let mut random = RandomSelector::new(12_345);
            if generate_maze(&mut grid, &config, &mut random).is_err() {
                return;
            }
            black_box(grid.rows());
        });
    });
}

criterion_group!(benches, bench_generate_63x63, bench_generate_255x255);
criterion_main!(benches);
