use crate::algorithm::feasibility::can_place;
use crate::algorithm::state::ScheduleState;
use crate::timetable::{Cell, SessionLength, SubjectId};

/// First single-slot subject in catalog order that fits exactly at `cell`
pub fn backfill_candidate(state: &ScheduleState<'_>, cell: Cell) -> Option<SubjectId> {
    state
        .catalog()
        .iter()
        .filter(|(_, subject)| subject.length == SessionLength::Single)
        .map(|(id, _)| id)
        .find(|&id| can_place(state, id, cell))
}

/// Fill empty non-lunch cells with any feasible single-slot subject
///
/// Sweeps sections, then days, then slots in index order. A subject may end up
/// with more sessions than its weekly target, but its `fulfilled` flags are
/// left as the placement engine set them. Double sessions are never
/// backfilled, and cells with no candidate stay free. Returns the number of
/// cells filled.
pub fn backfill(state: &mut ScheduleState<'_>) -> usize {
    let timetable = state.timetable();
    let (sections, days, slots) = (
        timetable.sections(),
        timetable.days(),
        timetable.slots_per_day(),
    );

    let mut filled = 0;
    for section in 0..sections {
        for day in 0..days {
            for slot in 0..slots {
                let cell = Cell::new(section, day, slot);
                if state.timetable().is_lunch(slot) || !state.timetable().is_free(cell) {
                    continue;
                }

                let Some(subject) = backfill_candidate(state, cell) else {
                    continue;
                };

                state.commit(subject, cell);
                filled += 1;
            }
        }
    }

    tracing::debug!(filled, "backfill complete");
    filled
}
