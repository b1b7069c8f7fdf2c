//! Subject catalog reader for the delimited `name,duration,faculty;...` format
//!
//! Each line holds a subject name, its duration in hours (1 or 2), an optional
//! `;`-separated faculty list and an optional 1-based section number that
//! restricts the subject to that section. Lines starting with `#` and blank
//! lines are ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::io::configuration::MAX_SUBJECTS;
use crate::io::error::{Result, WithPath, invalid_catalog};
use crate::timetable::subject::default_weekly_occurrences;
use crate::timetable::{SessionLength, Subject, SubjectCatalog};

/// Read a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if a record is
/// malformed
pub fn load_catalog(path: &Path) -> Result<SubjectCatalog> {
    let file = File::open(path).with_path(path, "open catalog")?;
    parse_catalog(file).with_path(path, "read catalog")
}

/// Parse catalog records from any reader
///
/// # Errors
///
/// Returns an error if:
/// - The underlying reader fails
/// - A duration is not 1 or 2
/// - A section number is not a positive integer
/// - A subject name appears twice
pub fn parse_catalog<R: Read>(reader: R) -> Result<SubjectCatalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut subjects = Vec::new();
    let mut seen = HashSet::new();

    for result in rdr.records() {
        let record = result?;
        let line = record
            .position()
            .and_then(|position| usize::try_from(position.line()).ok())
            .unwrap_or(subjects.len() + 1);

        let Some(name) = record.get(0).filter(|name| !name.is_empty()) else {
            continue;
        };

        if subjects.len() >= MAX_SUBJECTS {
            tracing::warn!(
                line,
                limit = MAX_SUBJECTS,
                "subject limit reached, ignoring remaining lines"
            );
            break;
        }

        let Some(duration) = record.get(1).filter(|field| !field.is_empty()) else {
            tracing::warn!(line, subject = name, "missing duration, skipping line");
            continue;
        };

        let length = duration
            .parse::<u32>()
            .ok()
            .and_then(SessionLength::from_hours)
            .ok_or_else(|| {
                invalid_catalog(
                    line,
                    &format!("duration '{duration}' of '{name}' must be 1 or 2"),
                )
            })?;

        let faculty = record.get(2).map(split_faculty).unwrap_or_default();

        let section_affinity = match record.get(3).filter(|field| !field.is_empty()) {
            Some(field) => Some(parse_section(field, line)?),
            None => None,
        };

        if !seen.insert(name.to_string()) {
            return Err(invalid_catalog(
                line,
                &format!("subject '{name}' is listed more than once"),
            ));
        }

        let mut subject = Subject::new(name, length, default_weekly_occurrences(name, length))
            .with_faculty(faculty);
        subject.section_affinity = section_affinity;

        tracing::debug!(
            line,
            subject = %subject.name,
            length = length.slots(),
            occurrences = subject.weekly_occurrences,
            faculty = subject.faculty.len(),
            "read subject"
        );
        subjects.push(subject);
    }

    Ok(SubjectCatalog::new(subjects))
}

/// Split a `;`-separated faculty field, dropping blank entries
pub fn split_faculty(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert a 1-based section number to a section index
fn parse_section(field: &str, line: usize) -> Result<usize> {
    match field.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(invalid_catalog(
            line,
            &format!("section '{field}' must be a positive section number"),
        )),
    }
}
