//! Randomized greedy placement of every required occurrence
//!
//! Each occurrence scans a freshly shuffled day order and slot order and
//! commits the first feasible cell. Commits are never undone: an occurrence
//! that finds no cell is reported and the subject is dropped for that section.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::feasibility::can_place;
use crate::algorithm::state::ScheduleState;
use crate::timetable::{Cell, SubjectId};

/// Seeded random source for reproducible day and slot orders
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Indices `0..len` in shuffled order
    pub fn shuffled(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

/// An occurrence the engine could not place anywhere
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacementFailure {
    /// Subject that was abandoned
    pub subject: SubjectId,
    /// Its catalog name
    pub name: String,
    /// Section it was being placed in
    pub section: usize,
    /// 1-based occurrence that failed
    pub occurrence: usize,
}

impl fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' could not be placed for occurrence {} in section {}",
            self.name,
            self.occurrence,
            self.section + 1
        )
    }
}

/// Scan one shuffled week for the first cell `subject` may start at
///
/// The day order is drawn before the slot order; the lunch slot is part of
/// the shuffle and left to the feasibility check.
pub fn find_slot(
    state: &ScheduleState<'_>,
    selector: &mut RandomSelector,
    subject: SubjectId,
    section: usize,
) -> Option<Cell> {
    let timetable = state.timetable();
    let days = selector.shuffled(timetable.days());
    let slots = selector.shuffled(timetable.slots_per_day());

    days.iter()
        .flat_map(|&day| slots.iter().map(move |&slot| Cell::new(section, day, slot)))
        .find(|&cell| can_place(state, subject, cell))
}

/// Place every weekly occurrence of `subject` in `section`
///
/// Stops at the first occurrence with no feasible cell and returns it as a
/// failure; earlier occurrences stay committed.
pub fn place_subject(
    state: &mut ScheduleState<'_>,
    selector: &mut RandomSelector,
    subject: SubjectId,
    section: usize,
) -> Option<PlacementFailure> {
    let record = state.subject(subject)?;
    let target = record.weekly_occurrences;

    for occurrence in 1..=target {
        let Some(cell) = find_slot(state, selector, subject, section) else {
            tracing::warn!(
                subject = %record.name,
                section = section + 1,
                occurrence,
                "could not place occurrence"
            );
            return Some(PlacementFailure {
                subject,
                name: record.name.clone(),
                section,
                occurrence,
            });
        };

        state.commit(subject, cell);
        if occurrence == target {
            state.mark_fulfilled(subject, section);
        }
    }

    None
}

/// Place `subject` in every section it is eligible for
pub fn place_in_sections(
    state: &mut ScheduleState<'_>,
    selector: &mut RandomSelector,
    subject: SubjectId,
) -> Vec<PlacementFailure> {
    let Some(record) = state.subject(subject) else {
        return Vec::new();
    };
    let sections = state.timetable().sections();

    record
        .eligible_sections(sections)
        .filter_map(|section| place_subject(state, selector, subject, section))
        .collect()
}

/// Run the greedy placement for subjects in `order`
///
/// Returns the abandoned occurrences in the order they happened.
pub fn place_all(
    state: &mut ScheduleState<'_>,
    selector: &mut RandomSelector,
    order: &[SubjectId],
) -> Vec<PlacementFailure> {
    order
        .iter()
        .flat_map(|&subject| place_in_sections(state, selector, subject))
        .collect()
}
