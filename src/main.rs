//! CLI entry point for the weekly timetable generator

use clap::Parser;
use timetabler::io::cli::{Cli, FileProcessor};
use timetabler::io::logging;

fn main() -> timetabler::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
