use std::fmt;

use crate::algorithm::state::ScheduleState;
use crate::timetable::{Cell, SessionLength, SubjectId};

/// Reason a candidate placement was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Section, day or slot is outside the timetable, or the subject is unknown
    OutOfRange,
    /// Subject is restricted to a different section
    SectionMismatch,
    /// Target cell already holds a subject
    CellOccupied,
    /// Target slot is the lunch break
    LunchSlot,
    /// Double session would start in the last slot of the day
    RunsPastDayEnd,
    /// Second slot of a double session is lunch or occupied
    FollowingSlotUnavailable,
    /// A required faculty member is busy in one of the covered slots
    FacultyBusy,
    /// Subject already meets this section on this day
    AlreadyScheduledToday,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::OutOfRange => "outside the timetable",
            Self::SectionMismatch => "subject belongs to another section",
            Self::CellOccupied => "cell already occupied",
            Self::LunchSlot => "lunch slot",
            Self::RunsPastDayEnd => "double session would run past the last slot",
            Self::FollowingSlotUnavailable => "following slot is lunch or occupied",
            Self::FacultyBusy => "faculty busy",
            Self::AlreadyScheduledToday => "subject already scheduled that day",
        };
        f.write_str(reason)
    }
}

/// Check whether `subject` may start at `cell`, naming the first rule it breaks
///
/// Rules are evaluated in a fixed order and the first failure wins. The check
/// only reads `state`.
///
/// # Errors
///
/// Returns the [`Rejection`] of the first failed rule
pub fn check_placement(
    state: &ScheduleState<'_>,
    subject: SubjectId,
    cell: Cell,
) -> Result<(), Rejection> {
    let timetable = state.timetable();
    let Some(record) = state.subject(subject) else {
        return Err(Rejection::OutOfRange);
    };
    if !timetable.contains(cell) {
        return Err(Rejection::OutOfRange);
    }

    if !record.is_eligible_for(cell.section) {
        return Err(Rejection::SectionMismatch);
    }

    if !timetable.is_free(cell) {
        return Err(Rejection::CellOccupied);
    }

    if timetable.is_lunch(cell.slot) {
        return Err(Rejection::LunchSlot);
    }

    let double = record.length == SessionLength::Double;
    if double {
        if cell.slot + 1 >= timetable.slots_per_day() {
            return Err(Rejection::RunsPastDayEnd);
        }

        let next = Cell::new(cell.section, cell.day, cell.slot + 1);
        if timetable.is_lunch(next.slot) || !timetable.is_free(next) {
            return Err(Rejection::FollowingSlotUnavailable);
        }
    }

    let faculty = state.faculty();
    for &member in state.staffing(subject) {
        if !faculty.is_available(Some(member), cell.day, cell.slot) {
            return Err(Rejection::FacultyBusy);
        }
        if double && !faculty.is_available(Some(member), cell.day, cell.slot + 1) {
            return Err(Rejection::FacultyBusy);
        }
    }

    if timetable.is_scheduled_on(cell.section, cell.day, subject) {
        return Err(Rejection::AlreadyScheduledToday);
    }

    Ok(())
}

/// Whether `subject` may start at `cell` without breaking any placement rule
pub fn can_place(state: &ScheduleState<'_>, subject: SubjectId, cell: Cell) -> bool {
    check_placement(state, subject, cell).is_ok()
}
