//! Run context owning every piece of mutable placement state
//!
//! The section grids, the faculty busy grids and the per-section `fulfilled`
//! flags all live here and are handed to each phase in turn. Nothing is
//! global, so independent runs never interact.

use ndarray::Array2;

use crate::algorithm::faculty::{FacultyId, FacultyRegistry};
use crate::io::error::Result;
use crate::timetable::{Cell, Subject, SubjectCatalog, SubjectId, Timetable};

/// Mutable state of one generation run
#[derive(Debug, Clone)]
pub struct ScheduleState<'a> {
    catalog: &'a SubjectCatalog,
    timetable: Timetable,
    faculty: FacultyRegistry,
    /// Interned faculty of each subject, indexed by `SubjectId`
    staffing: Vec<Vec<FacultyId>>,
    /// Occurrence target met, indexed by (`subject`, `section`)
    fulfilled: Array2<bool>,
}

impl<'a> ScheduleState<'a> {
    /// Intern every faculty name of the catalog and wrap the empty grids
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimetableError::FacultyCapacityExceeded`] if the
    /// catalog names more distinct faculty than `faculty` can hold
    pub fn new(
        catalog: &'a SubjectCatalog,
        timetable: Timetable,
        mut faculty: FacultyRegistry,
    ) -> Result<Self> {
        let mut staffing = Vec::with_capacity(catalog.len());
        for (_, subject) in catalog.iter() {
            let mut ids = Vec::with_capacity(subject.faculty.len());
            for name in &subject.faculty {
                if let Some(id) = faculty.resolve(name)? {
                    ids.push(id);
                }
            }
            staffing.push(ids);
        }

        let fulfilled = Array2::from_elem((catalog.len(), timetable.sections()), false);

        Ok(Self {
            catalog,
            timetable,
            faculty,
            staffing,
            fulfilled,
        })
    }

    /// Catalog the run schedules
    pub const fn catalog(&self) -> &'a SubjectCatalog {
        self.catalog
    }

    /// Current section grids
    pub const fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Faculty registry with current busy state
    pub const fn faculty(&self) -> &FacultyRegistry {
        &self.faculty
    }

    /// Subject record by identifier
    pub fn subject(&self, id: SubjectId) -> Option<&'a Subject> {
        self.catalog.get(id)
    }

    /// Interned faculty required by a subject
    pub fn staffing(&self, id: SubjectId) -> &[FacultyId] {
        self.staffing
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the subject met its weekly target in `section`
    pub fn is_fulfilled(&self, id: SubjectId, section: usize) -> bool {
        self.fulfilled
            .get([id.index(), section])
            .copied()
            .unwrap_or(false)
    }

    /// Record that the subject met its weekly target in `section`
    pub fn mark_fulfilled(&mut self, id: SubjectId, section: usize) {
        if let Some(flag) = self.fulfilled.get_mut([id.index(), section]) {
            *flag = true;
        }
    }

    /// Write a session starting at `cell` and mark its faculty busy
    ///
    /// Covers the following slot as well for double sessions. Feasibility is
    /// the caller's responsibility; see [`crate::algorithm::feasibility`].
    pub fn commit(&mut self, id: SubjectId, cell: Cell) {
        let catalog = self.catalog;
        let Some(subject) = catalog.get(id) else {
            return;
        };

        for offset in 0..subject.length.slots() {
            let occupied = Cell::new(cell.section, cell.day, cell.slot + offset);
            self.timetable.assign(occupied, id);

            if let Some(staff) = self.staffing.get(id.index()) {
                for &faculty in staff {
                    self.faculty
                        .mark_busy(Some(faculty), occupied.day, occupied.slot);
                }
            }
        }

        tracing::debug!(
            subject = %subject.name,
            section = cell.section,
            day = cell.day,
            slot = cell.slot,
            "committed placement"
        );
    }

    /// Release the grids, the registry and the fulfilled flags
    pub fn into_parts(self) -> (Timetable, FacultyRegistry, Array2<bool>) {
        (self.timetable, self.faculty, self.fulfilled)
    }
}
