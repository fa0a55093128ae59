//! Progress reporting for batch maze generation

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mazes: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch generation
///
/// Shows a single bar for real batches and stays silent for single-maze
/// runs, where a bar would only flicker.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the bar for the number of mazes to generate
    pub fn initialize(&mut self, maze_count: usize) {
        if maze_count > 1 {
            let bar = ProgressBar::new(maze_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Record one finished maze and the path it was written to
    pub fn advance(&self, path: &Path) {
        if let Some(bar) = &self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("All mazes generated");
        }
    }
}
