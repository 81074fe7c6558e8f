//! CLI entry point for the overlapping wave function collapse generator

use clap::Parser;
use wavetile::io::cli::{self, Cli};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
