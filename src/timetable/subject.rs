//! Subject records and the read-only catalog the placement engine consumes

use std::fmt;

/// Number of consecutive slots one session of a subject occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionLength {
    /// One-hour theory session
    Single,
    /// Two-hour session (labs) spanning two contiguous slots
    Double,
}

impl SessionLength {
    /// Slots covered by one session
    pub const fn slots(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }

    /// Parse a duration in hours, accepting only 1 or 2
    pub const fn from_hours(hours: u32) -> Option<Self> {
        match hours {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            _ => None,
        }
    }
}

impl fmt::Display for SessionLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hour(s)", self.slots())
    }
}

/// Index of a subject in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(pub usize);

impl SubjectId {
    /// Position of the subject in its catalog
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One catalog entry to be placed into every eligible section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Unique display name
    pub name: String,
    /// Slots per session
    pub length: SessionLength,
    /// Faculty required for every session, in catalog order
    pub faculty: Vec<String>,
    /// Sessions required per week in each eligible section
    pub weekly_occurrences: usize,
    /// Restricts the subject to a single section when set
    pub section_affinity: Option<usize>,
}

impl Subject {
    /// Create a subject without faculty or section restriction
    pub fn new(name: impl Into<String>, length: SessionLength, weekly_occurrences: usize) -> Self {
        Self {
            name: name.into(),
            length,
            faculty: Vec::new(),
            weekly_occurrences,
            section_affinity: None,
        }
    }

    /// Attach the faculty list
    #[must_use]
    pub fn with_faculty<I, S>(mut self, faculty: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faculty = faculty.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the subject to one section
    #[must_use]
    pub const fn with_section_affinity(mut self, section: usize) -> Self {
        self.section_affinity = Some(section);
        self
    }

    /// Whether the subject may be placed in `section`
    pub fn is_eligible_for(&self, section: usize) -> bool {
        self.section_affinity.is_none_or(|target| target == section)
    }

    /// Sections out of `section_count` this subject is scheduled into
    pub fn eligible_sections(&self, section_count: usize) -> impl Iterator<Item = usize> + '_ {
        (0..section_count).filter(|&section| self.is_eligible_for(section))
    }
}

/// Weekly sessions a subject gets when the catalog does not say otherwise
///
/// Labs meet once. A handful of activity periods meet once, the second open
/// elective twice, and every other theory subject three times.
pub fn default_weekly_occurrences(name: &str, length: SessionLength) -> usize {
    if length == SessionLength::Double {
        return 1;
    }

    if name.contains("HVPE") || matches!(name, "Sports" | "Library" | "Mentoring") {
        1
    } else if name == "OE-II" {
        2
    } else {
        3
    }
}

/// Ordered, read-only collection of subjects for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    /// Wrap subjects in catalog order
    pub const fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// Subject by identifier
    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(id.index())
    }

    /// Subject by name
    pub fn find(&self, name: &str) -> Option<(SubjectId, &Subject)> {
        self.iter().find(|(_, subject)| subject.name == name)
    }

    /// Iterate `(id, subject)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (SubjectId, &Subject)> {
        self.subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| (SubjectId(index), subject))
    }

    /// All subjects in catalog order
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Number of subjects
    pub const fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the catalog holds no subjects
    pub const fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl FromIterator<Subject> for SubjectCatalog {
    fn from_iter<T: IntoIterator<Item = Subject>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
