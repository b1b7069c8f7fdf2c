use ndarray::Array2;

use crate::algorithm::backfill::backfill;
use crate::algorithm::faculty::FacultyRegistry;
use crate::algorithm::placement::{PlacementFailure, RandomSelector, place_in_sections};
use crate::algorithm::priority::priority_order;
use crate::algorithm::state::ScheduleState;
use crate::io::configuration::{
    DEFAULT_DAYS, DEFAULT_LUNCH_SLOT, DEFAULT_SECTIONS, DEFAULT_SLOTS_PER_DAY, MAX_FACULTIES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::timetable::{Subject, SubjectCatalog, SubjectId, Timetable};

/// Run parameters describing the timetable shape and the random stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of independent sections
    pub sections: usize,
    /// Days per week
    pub days: usize,
    /// Slots per day, lunch included
    pub slots_per_day: usize,
    /// Slot reserved for lunch
    pub lunch_slot: usize,
    /// Maximum distinct faculty names
    pub faculty_capacity: usize,
    /// Seed of the shuffling stream
    pub seed: u64,
}

impl GenerationConfig {
    /// Default timetable shape with an explicit seed
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            sections: DEFAULT_SECTIONS,
            days: DEFAULT_DAYS,
            slots_per_day: DEFAULT_SLOTS_PER_DAY,
            lunch_slot: DEFAULT_LUNCH_SLOT,
            faculty_capacity: MAX_FACULTIES,
            seed,
        }
    }

    /// Check the shape is usable
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for zero dimensions, a grid whose
    /// cell count overflows `usize`, a lunch slot outside the day, or a zero
    /// faculty capacity
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("sections", self.sections),
            ("days", self.days),
            ("slots_per_day", self.slots_per_day),
            ("faculty_capacity", self.faculty_capacity),
        ];
        for (parameter, value) in positive {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }

        let cells = self
            .sections
            .checked_mul(self.days)
            .and_then(|cells| cells.checked_mul(self.slots_per_day));
        if cells.is_none() {
            return Err(invalid_parameter(
                "sections",
                &self.sections,
                &format!(
                    "a {} × {} × {} grid has too many cells",
                    self.sections, self.days, self.slots_per_day
                ),
            ));
        }

        if self.lunch_slot >= self.slots_per_day {
            return Err(invalid_parameter(
                "lunch_slot",
                &self.lunch_slot,
                &format!("must be below slots_per_day ({})", self.slots_per_day),
            ));
        }

        Ok(())
    }
}

/// Everything a finished run hands to the reporters
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Final section grids
    pub timetable: Timetable,
    /// Interned faculty with their busy state
    pub faculty: FacultyRegistry,
    /// Occurrence target met, indexed by (`subject`, `section`)
    pub fulfilled: Array2<bool>,
    /// Abandoned occurrences in the order they happened
    pub failures: Vec<PlacementFailure>,
    /// Order in which subjects were attempted
    pub priority: Vec<SubjectId>,
    /// Cells filled by the backfill pass
    pub backfilled: usize,
    /// Seed the run used
    pub seed: u64,
}

impl GenerationResult {
    /// Whether the subject met its weekly target in `section`
    pub fn is_fulfilled(&self, subject: SubjectId, section: usize) -> bool {
        self.fulfilled
            .get([subject.index(), section])
            .copied()
            .unwrap_or(false)
    }

    /// Failures recorded for one section
    pub fn failures_in(&self, section: usize) -> impl Iterator<Item = &PlacementFailure> {
        self.failures
            .iter()
            .filter(move |failure| failure.section == section)
    }
}

/// Greedy timetable generator driving one run
///
/// Subjects are attempted in priority order, one subject per [`step`], and a
/// final step runs the backfill pass.
///
/// [`step`]: TimetableGenerator::step
pub struct TimetableGenerator<'a> {
    state: ScheduleState<'a>,
    selector: RandomSelector,
    priority: Vec<SubjectId>,
    /// Next position in `priority`
    cursor: usize,
    failures: Vec<PlacementFailure>,
    backfilled: Option<usize>,
    seed: u64,
}

impl<'a> TimetableGenerator<'a> {
    /// Prepare a run over `catalog`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - A subject is restricted to a section outside the configured range
    /// - The catalog names more faculty than `faculty_capacity`
    pub fn new(catalog: &'a SubjectCatalog, config: GenerationConfig) -> Result<Self> {
        config.validate()?;

        for (_, subject) in catalog.iter() {
            if let Some(section) = subject.section_affinity
                && section >= config.sections
            {
                return Err(invalid_parameter(
                    "section_affinity",
                    &section,
                    &format!(
                        "subject '{}' targets a section outside 0..{}",
                        subject.name, config.sections
                    ),
                ));
            }
        }

        if catalog.len().checked_mul(config.sections).is_none() {
            return Err(invalid_parameter(
                "sections",
                &config.sections,
                &format!("too many sections for {} subjects", catalog.len()),
            ));
        }

        let timetable = Timetable::new(
            config.sections,
            config.days,
            config.slots_per_day,
            config.lunch_slot,
        );
        let faculty =
            FacultyRegistry::new(config.faculty_capacity, config.days, config.slots_per_day);
        let state = ScheduleState::new(catalog, timetable, faculty)?;

        let priority = priority_order(catalog);
        for (rank, &id) in priority.iter().enumerate() {
            if let Some(subject) = catalog.get(id) {
                tracing::debug!(
                    rank = rank + 1,
                    subject = %subject.name,
                    length = subject.length.slots(),
                    occurrences = subject.weekly_occurrences,
                    "placement order"
                );
            }
        }

        tracing::info!(
            subjects = catalog.len(),
            faculty = state.faculty().len(),
            sections = config.sections,
            seed = config.seed,
            "starting timetable generation"
        );

        Ok(Self {
            state,
            selector: RandomSelector::new(config.seed),
            priority,
            cursor: 0,
            failures: Vec::new(),
            backfilled: None,
            seed: config.seed,
        })
    }

    /// Steps a full run takes: one per subject plus the backfill pass
    pub fn total_steps(&self) -> usize {
        self.priority.len() + 1
    }

    /// Steps completed so far
    pub fn completed_steps(&self) -> usize {
        self.cursor + usize::from(self.backfilled.is_some())
    }

    /// Current run state
    pub const fn state(&self) -> &ScheduleState<'a> {
        &self.state
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[PlacementFailure] {
        &self.failures
    }

    /// Priority order of the run
    pub fn priority(&self) -> &[SubjectId] {
        &self.priority
    }

    /// Subject the most recent placement step attempted
    pub fn last_subject(&self) -> Option<&'a Subject> {
        let id = self.priority.get(self.cursor.checked_sub(1)?)?;
        self.state.subject(*id)
    }

    /// Execute the next step of the run
    ///
    /// Returns whether more steps remain.
    pub fn step(&mut self) -> bool {
        if let Some(&subject) = self.priority.get(self.cursor) {
            let failures = place_in_sections(&mut self.state, &mut self.selector, subject);
            self.failures.extend(failures);
            self.cursor += 1;
            return true;
        }

        if self.backfilled.is_none() {
            self.backfilled = Some(backfill(&mut self.state));
        }
        false
    }

    /// Finish any remaining steps and hand over the result
    pub fn generate(mut self) -> GenerationResult {
        while self.step() {}
        self.into_result()
    }

    /// Hand over the result in its current state
    ///
    /// Steps not yet executed are skipped.
    pub fn into_result(self) -> GenerationResult {
        let (timetable, faculty, fulfilled) = self.state.into_parts();

        tracing::info!(
            failures = self.failures.len(),
            backfilled = self.backfilled.unwrap_or(0),
            "timetable generation complete"
        );

        GenerationResult {
            timetable,
            faculty,
            fulfilled,
            failures: self.failures,
            priority: self.priority,
            backfilled: self.backfilled.unwrap_or(0),
            seed: self.seed,
        }
    }
}

/// Generate a complete timetable in one call
///
/// # Errors
///
/// Returns the same errors as [`TimetableGenerator::new`]
pub fn generate(catalog: &SubjectCatalog, config: GenerationConfig) -> Result<GenerationResult> {
    Ok(TimetableGenerator::new(catalog, config)?.generate())
}
