//! Command-line interface for batch maze generation
//!
//! Generates one or many mazes to PNG files, or prints a terminal preview.
//! Batch runs derive each maze's seed from the base seed plus its index so a
//! whole batch is reproducible from a single number.

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::executor::{MazeConfig, RandomSelector, generate_maze};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::TileGrid;

#[derive(Parser)]
#[command(name = "mazetile")]
#[command(
    author,
    version,
    about = "Generate maze tile grids with doors and collectible items"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// Output PNG file; batch runs append an index before the extension
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Maze width in tiles (must be odd)
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in tiles (must be odd)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Per-cell door probability in [0, 1]
    #[arg(short, long)]
    pub doors: Option<f64>,

    /// Per-cell item probability in [0, 1]
    #[arg(short, long)]
    pub items: Option<f64>,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Print the maze to the terminal instead of writing a PNG
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.preview
    }
}

/// Orchestrates batch generation with progress tracking
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a new batch runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate all requested mazes
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or PNG export fails
    pub fn run(&mut self) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.generate_one(index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for terminal preview output
    #[allow(clippy::print_stdout)]
    fn generate_one(&mut self, index: usize) -> Result<()> {
        let config = MazeConfig {
            width: self.cli.width,
            height: self.cli.height,
            horizontal_offset: 0,
            vertical_offset: 0,
            door_chance: self.cli.doors,
            item_chance: self.cli.items,
        };

        let mut grid = TileGrid::new(self.cli.height, self.cli.width);
        let mut random = RandomSelector::new(self.cli.seed.wrapping_add(index as u64));
        generate_maze(&mut grid, &config, &mut random)?;

        if self.cli.preview {
            println!("{grid}");
            return Ok(());
        }

        let output_path = self.output_path(index);
        export_grid_as_png(&grid, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.advance(&output_path);
        }

        Ok(())
    }

    fn output_path(&self, index: usize) -> PathBuf {
        if self.cli.count == 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let extension = self
            .cli
            .output
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("png");
        let indexed_name = format!("{}_{index:03}.{extension}", stem.to_string_lossy());
        self.cli.output.with_file_name(indexed_name)
    }
}
