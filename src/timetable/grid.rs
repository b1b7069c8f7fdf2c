//! Per-section weekly grids of subject placements
//!
//! All sections share one `section × day × slot` array so a run owns a single
//! allocation. One slot per day is the lunch break and never holds a subject.

use ndarray::{Array3, ArrayView1, Axis};

use crate::timetable::subject::{SessionLength, SubjectId};

/// Location of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Section index
    pub section: usize,
    /// Day index within the week
    pub day: usize,
    /// Slot index within the day
    pub slot: usize,
}

impl Cell {
    /// Build a cell location
    pub const fn new(section: usize, day: usize, slot: usize) -> Self {
        Self { section, day, slot }
    }
}

/// Weekly grids for every section of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    /// Placements indexed by (`section`, `day`, `slot`)
    cells: Array3<Option<SubjectId>>,
    lunch_slot: usize,
}

impl Timetable {
    /// Create empty grids for `sections` sections of `days × slots_per_day`
    pub fn new(sections: usize, days: usize, slots_per_day: usize, lunch_slot: usize) -> Self {
        Self {
            cells: Array3::from_elem((sections, days, slots_per_day), None),
            lunch_slot,
        }
    }

    /// Number of sections
    pub fn sections(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of days per week
    pub fn days(&self) -> usize {
        self.cells.dim().1
    }

    /// Number of slots per day, lunch included
    pub fn slots_per_day(&self) -> usize {
        self.cells.dim().2
    }

    /// Index of the reserved lunch slot
    pub const fn lunch_slot(&self) -> usize {
        self.lunch_slot
    }

    /// Whether `slot` is the lunch break
    pub const fn is_lunch(&self, slot: usize) -> bool {
        slot == self.lunch_slot
    }

    /// Whether the coordinates address a cell of this timetable
    pub fn contains(&self, cell: Cell) -> bool {
        cell.section < self.sections() && cell.day < self.days() && cell.slot < self.slots_per_day()
    }

    /// Subject at a cell, `None` when empty or out of range
    pub fn get(&self, cell: Cell) -> Option<SubjectId> {
        self.cells
            .get([cell.section, cell.day, cell.slot])
            .copied()
            .flatten()
    }

    /// Whether a cell exists and holds no subject
    pub fn is_free(&self, cell: Cell) -> bool {
        matches!(self.cells.get([cell.section, cell.day, cell.slot]), Some(None))
    }

    /// Write a subject into a cell; out-of-range cells are ignored
    pub fn assign(&mut self, cell: Cell, subject: SubjectId) {
        if let Some(slot) = self.cells.get_mut([cell.section, cell.day, cell.slot]) {
            *slot = Some(subject);
        }
    }

    /// Placements of one section on one day, in slot order
    ///
    /// # Panics
    ///
    /// Panics if `section` or `day` is out of range
    pub fn day_row(&self, section: usize, day: usize) -> ArrayView1<'_, Option<SubjectId>> {
        self.cells
            .index_axis(Axis(0), section)
            .index_axis_move(Axis(0), day)
    }

    /// Whether `subject` already appears anywhere on this section's day
    pub fn is_scheduled_on(&self, section: usize, day: usize, subject: SubjectId) -> bool {
        section < self.sections()
            && day < self.days()
            && self.day_row(section, day).iter().any(|&cell| cell == Some(subject))
    }

    /// Whether the cell continues a session that started in the previous slot
    ///
    /// Only double sessions continue; two single sessions of the same subject
    /// can never sit side by side because a subject is placed at most once a day.
    pub fn is_continuation(&self, cell: Cell, length: SessionLength) -> bool {
        length == SessionLength::Double
            && cell.slot > 0
            && self.get(cell).is_some()
            && self.get(cell) == self.get(Cell::new(cell.section, cell.day, cell.slot - 1))
    }

    /// Sessions of `subject` committed in `section`
    pub fn occurrences(&self, section: usize, subject: SubjectId) -> usize {
        if section >= self.sections() {
            return 0;
        }

        (0..self.days())
            .map(|day| {
                let row = self.day_row(section, day);
                row.iter()
                    .enumerate()
                    .filter(|&(slot, &cell)| {
                        cell == Some(subject)
                            && (slot == 0 || row.get(slot - 1).copied().flatten() != Some(subject))
                    })
                    .count()
            })
            .sum()
    }

    /// Empty non-lunch cells remaining in `section`
    pub fn free_cells(&self, section: usize) -> usize {
        if section >= self.sections() {
            return 0;
        }

        (0..self.days())
            .map(|day| {
                self.day_row(section, day)
                    .iter()
                    .enumerate()
                    .filter(|&(slot, cell)| !self.is_lunch(slot) && cell.is_none())
                    .count()
            })
            .sum()
    }
}
