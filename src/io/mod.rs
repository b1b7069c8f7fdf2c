//! Catalog input, report output and the command-line surface

/// Subject catalog reader
pub mod catalog;
/// Command-line interface and batch processing
pub mod cli;
/// Default timetable shape, limits and labels
pub mod configuration;
/// Error types
pub mod error;
/// Logging setup
pub mod logging;
/// Progress display for batch runs
pub mod progress;
/// Timetable and workload reports
pub mod report;
