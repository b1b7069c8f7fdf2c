//! Timetable shape defaults, capacity limits and report settings

// Default week layout: six teaching days of seven one-hour slots
/// Number of independently scheduled sections
pub const DEFAULT_SECTIONS: usize = 3;
/// Teaching days per week
pub const DEFAULT_DAYS: usize = 6;
/// Slots per day, lunch included
pub const DEFAULT_SLOTS_PER_DAY: usize = 7;
/// Slot reserved for the lunch break (fourth slot of the day)
pub const DEFAULT_LUNCH_SLOT: usize = 3;

// Safety limits carried over from the catalog format
/// Maximum distinct faculty names per run
pub const MAX_FACULTIES: usize = 100;
/// Maximum subjects read from a catalog
pub const MAX_SUBJECTS: usize = 50;

/// Day labels used in reports
pub const DAY_NAMES: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Slot labels used in reports (9:40 to 4:20 with a lunch break)
pub const SLOT_LABELS: [&str; 7] = [
    "9:40-10:40",
    "10:40-11:40",
    "11:40-12:40",
    "12:40-1:20 (Lunch)",
    "1:20-2:20",
    "2:20-3:20",
    "3:20-4:20",
];

/// Section labels used in reports and output file names
pub const SECTION_NAMES: [&str; 3] = ["IT-A", "IT-B", "IT-C"];

// Report cell labels
/// Label for the lunch slot
pub const LUNCH_LABEL: &str = "LUNCH";
/// Label for an empty cell
pub const FREE_LABEL: &str = "FREE";
/// Label for the second slot of a double session
pub const CONTINUED_LABEL: &str = "(continued)";

// Input and output settings
/// Catalog file extensions picked up from a directory
pub const CATALOG_EXTENSIONS: [&str; 2] = ["txt", "csv"];
/// Suffix of per-section timetable reports
pub const TIMETABLE_SUFFIX: &str = "_timetable";
/// Suffix of the faculty workload report
pub const WORKLOAD_SUFFIX: &str = "_faculty_workload";
/// Extension of generated reports
pub const REPORT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
