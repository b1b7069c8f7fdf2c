//! Randomized greedy timetable generation for multi-section course catalogs
//!
//! Subjects are ordered by priority, then each weekly occurrence is placed in
//! the first feasible cell of a shuffled week, honouring lunch breaks, session
//! length and shared faculty availability. A backfill pass closes the gaps the
//! greedy sweep leaves behind.

#![forbid(unsafe_code)]

/// Placement engine: feasibility, ordering, greedy placement and backfill
pub mod algorithm;
/// Catalog input, report output, configuration and error handling
pub mod io;
/// Subject catalog and per-section timetable grids
pub mod timetable;

pub use algorithm::executor::{GenerationConfig, GenerationResult, TimetableGenerator, generate};
pub use io::error::{Result, TimetableError};
