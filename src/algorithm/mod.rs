/// Backfill sweep over cells left empty by the greedy placement
pub mod backfill;
/// Run orchestration and generation results
pub mod executor;
/// Faculty interning and shared busy tracking
pub mod faculty;
/// Placement legality checks
pub mod feasibility;
/// Randomized greedy placement of weekly occurrences
pub mod placement;
/// Subject attempt ordering
pub mod priority;
/// Mutable state owned by a single run
pub mod state;
