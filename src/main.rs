//! CLI entry point for maze tile grid generation

use clap::Parser;
use mazetile::io::cli::{BatchRunner, Cli};

fn main() -> mazetile::Result<()> {
    let cli = Cli::parse();
    let mut runner = BatchRunner::new(cli);
    runner.run()
}
