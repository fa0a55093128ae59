//! PNG export of generated tile grids

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::TILE_PIXEL_SIZE;
use crate::io::error::{MazeError, Result};
use crate::spatial::TileGrid;
use crate::spatial::tiles::{Orientation, TileType};

const fn tile_color(tile: TileType) -> [u8; 4] {
    match tile {
        TileType::Clear => [236, 231, 220, 255],
        TileType::Wall => [52, 46, 55, 255],
        TileType::Door(Orientation::UpDown, _) => [166, 106, 52, 255],
        TileType::Door(Orientation::LeftRight, _) => [140, 88, 44, 255],
        TileType::Item(_) => [212, 175, 55, 255],
    }
}

/// Export a tile grid as a PNG image
///
/// Each tile becomes a square block of [`TILE_PIXEL_SIZE`] pixels colored by
/// tile kind. The parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TileGrid, output_path: &Path) -> Result<()> {
    let width = grid.cols() as u32 * TILE_PIXEL_SIZE;
    let height = grid.rows() as u32 * TILE_PIXEL_SIZE;

    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &tile) in grid.as_array().indexed_iter() {
        let rgba = tile_color(tile);
        let pixel = Rgba(rgba);
        let base_x = col as u32 * TILE_PIXEL_SIZE;
        let base_y = row as u32 * TILE_PIXEL_SIZE;

        for dy in 0..TILE_PIXEL_SIZE {
            for dx in 0..TILE_PIXEL_SIZE {
                img.put_pixel(base_x + dx, base_y + dy, pixel);
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
