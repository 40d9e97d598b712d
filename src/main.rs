//! CLI entry point for the slideshow assembler

use clap::Parser;
use slidereel::io::cli::{Cli, FileProcessor};

fn main() -> slidereel::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
