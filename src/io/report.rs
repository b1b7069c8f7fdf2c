//! Plain-text timetable and faculty workload reports

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use comfy_table::{Table, presets::ASCII_FULL};

use crate::algorithm::executor::GenerationResult;
use crate::io::configuration::{
    CONTINUED_LABEL, DAY_NAMES, FREE_LABEL, LUNCH_LABEL, REPORT_EXTENSION, SECTION_NAMES,
    SLOT_LABELS, TIMETABLE_SUFFIX, WORKLOAD_SUFFIX,
};
use crate::io::error::{Result, WithPath};
use crate::timetable::{Cell, SubjectCatalog};

/// Display name of a day, numbered past the configured labels
pub fn day_label(day: usize) -> String {
    DAY_NAMES
        .get(day)
        .map_or_else(|| format!("Day {}", day + 1), |name| (*name).to_string())
}

/// Display name of a slot, numbered past the configured labels
pub fn slot_label(slot: usize) -> String {
    SLOT_LABELS
        .get(slot)
        .map_or_else(|| format!("Slot {}", slot + 1), |label| (*label).to_string())
}

/// Display name of a section, numbered past the configured labels
pub fn section_label(section: usize) -> String {
    SECTION_NAMES.get(section).map_or_else(
        || format!("Section-{}", section + 1),
        |name| (*name).to_string(),
    )
}

/// Text shown in one timetable cell
pub fn cell_label(result: &GenerationResult, catalog: &SubjectCatalog, cell: Cell) -> String {
    let timetable = &result.timetable;
    if timetable.is_lunch(cell.slot) {
        return LUNCH_LABEL.to_string();
    }

    let Some(subject) = timetable.get(cell).and_then(|id| catalog.get(id)) else {
        return FREE_LABEL.to_string();
    };

    if timetable.is_continuation(cell, subject.length) {
        CONTINUED_LABEL.to_string()
    } else {
        subject.name.clone()
    }
}

/// Render the weekly grid, subject details and failures of one section
pub fn render_section(
    result: &GenerationResult,
    catalog: &SubjectCatalog,
    section: usize,
) -> String {
    let timetable = &result.timetable;
    let mut out = String::new();

    let _ = writeln!(out, "=========== TIMETABLE ===========");
    let _ = writeln!(
        out,
        "Section: {}\t\tSeed: {}\n",
        section_label(section),
        result.seed
    );

    let mut grid = Table::new();
    grid.load_preset(ASCII_FULL);
    let mut header = vec!["DAY/TIME".to_string()];
    header.extend((0..timetable.slots_per_day()).map(slot_label));
    grid.set_header(header);

    for day in 0..timetable.days() {
        let mut row = vec![day_label(day)];
        row.extend(
            (0..timetable.slots_per_day())
                .map(|slot| cell_label(result, catalog, Cell::new(section, day, slot))),
        );
        grid.add_row(row);
    }
    let _ = writeln!(out, "{grid}");

    let _ = writeln!(out, "\n=========== SUBJECT DETAILS ===========\n");
    for (id, subject) in catalog.iter() {
        let faculty = if subject.faculty.is_empty() {
            "None assigned".to_string()
        } else {
            subject.faculty.join(", ")
        };
        let status = if !subject.is_eligible_for(section) {
            "not offered in this section"
        } else if result.is_fulfilled(id, section) {
            "met"
        } else {
            "not met"
        };

        let _ = writeln!(out, "Subject: {}", subject.name);
        let _ = writeln!(out, "Duration: {}", subject.length);
        let _ = writeln!(out, "Weekly Occurrences: {}", subject.weekly_occurrences);
        let _ = writeln!(
            out,
            "Scheduled: {} ({status})",
            timetable.occurrences(section, id)
        );
        let _ = writeln!(out, "Faculty: {faculty}\n");
    }

    let failures: Vec<_> = result.failures_in(section).collect();
    if !failures.is_empty() {
        let _ = writeln!(out, "=========== UNPLACED OCCURRENCES ===========\n");
        for failure in failures {
            let _ = writeln!(out, "{}: occurrence {}", failure.name, failure.occurrence);
        }
    }

    out
}

/// Render every faculty member's sessions across all sections
///
/// The second slot of a double session is not counted again.
pub fn render_workload(result: &GenerationResult, catalog: &SubjectCatalog) -> String {
    let timetable = &result.timetable;
    let mut out = String::new();
    let _ = writeln!(out, "=========== FACULTY WORKLOAD REPORT ===========\n");

    for (_, name) in result.faculty.iter() {
        let mut sessions = Table::new();
        sessions.load_preset(ASCII_FULL);
        sessions.set_header(vec!["Day", "Time", "Section", "Subject"]);
        let mut total = 0;

        for day in 0..timetable.days() {
            for slot in (0..timetable.slots_per_day()).filter(|&slot| !timetable.is_lunch(slot)) {
                for section in 0..timetable.sections() {
                    let cell = Cell::new(section, day, slot);
                    let Some(subject) = timetable.get(cell).and_then(|id| catalog.get(id)) else {
                        continue;
                    };
                    if !subject.faculty.iter().any(|member| member == name)
                        || timetable.is_continuation(cell, subject.length)
                    {
                        continue;
                    }

                    sessions.add_row(vec![
                        day_label(day),
                        slot_label(slot),
                        section_label(section),
                        subject.name.clone(),
                    ]);
                    total += 1;
                }
            }
        }

        let _ = writeln!(out, "Faculty: {name}");
        let _ = writeln!(out, "Schedule:\n{sessions}");
        let _ = writeln!(out, "Total Hours: {total}\n");
    }

    out
}

/// Path of a section's timetable report
pub fn timetable_path(output_dir: &Path, stem: &str, section: usize) -> PathBuf {
    output_dir.join(format!(
        "{stem}_{}{TIMETABLE_SUFFIX}.{REPORT_EXTENSION}",
        section_label(section)
    ))
}

/// Path of the faculty workload report
pub fn workload_path(output_dir: &Path, stem: &str) -> PathBuf {
    output_dir.join(format!("{stem}{WORKLOAD_SUFFIX}.{REPORT_EXTENSION}"))
}

/// Write every section report and the workload report
///
/// Returns the written paths, sections first.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or a report
/// cannot be written
pub fn write_reports(
    result: &GenerationResult,
    catalog: &SubjectCatalog,
    output_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_path(output_dir, "create output directory")?;

    let mut written = Vec::with_capacity(result.timetable.sections() + 1);
    for section in 0..result.timetable.sections() {
        let path = timetable_path(output_dir, stem, section);
        fs::write(&path, render_section(result, catalog, section))
            .with_path(&path, "write timetable")?;
        written.push(path);
    }

    let path = workload_path(output_dir, stem);
    fs::write(&path, render_workload(result, catalog)).with_path(&path, "write workload")?;
    written.push(path);

    Ok(written)
}
