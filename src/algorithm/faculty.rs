use bitvec::prelude::*;
use std::collections::HashMap;
use std::fmt;

use crate::io::error::{Result, TimetableError};

/// Interned faculty member
///
/// Identifiers are dense and assigned in first-seen order, so they double as
/// indices into the busy grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacultyId(usize);

impl FacultyId {
    /// Position in interning order
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Name interning plus one busy bitset per faculty member over the week
///
/// Busy state is shared by all sections: a faculty member teaching section A
/// at Monday slot 2 cannot teach section B at the same time. Cells are
/// marked when a placement commits and never cleared within a run.
#[derive(Clone, Debug)]
pub struct FacultyRegistry {
    ids: HashMap<String, FacultyId>,
    names: Vec<String>,
    busy: Vec<BitVec>,
    capacity: usize,
    days: usize,
    slots_per_day: usize,
}

impl FacultyRegistry {
    /// Create an empty registry for a `days × slots_per_day` week
    pub fn new(capacity: usize, days: usize, slots_per_day: usize) -> Self {
        Self {
            ids: HashMap::new(),
            names: Vec::new(),
            busy: Vec::new(),
            capacity,
            days,
            slots_per_day,
        }
    }

    /// Look up or intern a faculty name
    ///
    /// Blank names mean no faculty is required and resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::FacultyCapacityExceeded`] when `name` is new
    /// and the registry is already full
    pub fn resolve(&mut self, name: &str) -> Result<Option<FacultyId>> {
        if name.trim().is_empty() {
            return Ok(None);
        }

        if let Some(&id) = self.ids.get(name) {
            return Ok(Some(id));
        }

        if self.names.len() >= self.capacity {
            tracing::error!(
                capacity = self.capacity,
                faculty = name,
                "faculty limit reached"
            );
            return Err(TimetableError::FacultyCapacityExceeded {
                capacity: self.capacity,
                name: name.to_string(),
            });
        }

        let id = FacultyId(self.names.len());
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.busy.push(bitvec![0; self.days * self.slots_per_day]);
        Ok(Some(id))
    }

    /// Identifier of an already interned name
    pub fn lookup(&self, name: &str) -> Option<FacultyId> {
        self.ids.get(name).copied()
    }

    /// Test whether a faculty member is free at a cell
    ///
    /// `None` (no faculty required) is always available. Cells outside the
    /// week are never available.
    pub fn is_available(&self, id: Option<FacultyId>, day: usize, slot: usize) -> bool {
        let Some(id) = id else {
            return true;
        };

        let Some(index) = self.cell_index(day, slot) else {
            return false;
        };

        self.busy
            .get(id.index())
            .is_some_and(|bits| bits.get(index).as_deref() == Some(&false))
    }

    /// Mark a faculty member busy at a cell
    pub fn mark_busy(&mut self, id: Option<FacultyId>, day: usize, slot: usize) {
        let Some(id) = id else {
            return;
        };

        if let Some(index) = self.cell_index(day, slot)
            && let Some(bits) = self.busy.get_mut(id.index())
        {
            bits.set(index, true);
        }
    }

    /// Number of busy cells of a faculty member
    pub fn busy_count(&self, id: FacultyId) -> usize {
        self.busy.get(id.index()).map_or(0, |bits| bits.count_ones())
    }

    /// Display name of an interned faculty member
    pub fn name(&self, id: FacultyId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Iterate `(id, name)` pairs in interning order
    pub fn iter(&self) -> impl Iterator<Item = (FacultyId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (FacultyId(index), name.as_str()))
    }

    /// Number of interned faculty members
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no faculty has been interned
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maximum number of distinct faculty names
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    const fn cell_index(&self, day: usize, slot: usize) -> Option<usize> {
        if day < self.days && slot < self.slots_per_day {
            Some(day * self.slots_per_day + slot)
        } else {
            None
        }
    }
}

impl fmt::Display for FacultyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FacultyRegistry({}/{} members: {:?})",
            self.len(),
            self.capacity,
            self.names
        )
    }
}
