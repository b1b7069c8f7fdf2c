//! Timetable data model shared by the engine and the reporters

/// Per-section weekly placement grids
pub mod grid;
/// Subject records and the catalog
pub mod subject;

pub use grid::{Cell, Timetable};
pub use subject::{SessionLength, Subject, SubjectCatalog, SubjectId};
