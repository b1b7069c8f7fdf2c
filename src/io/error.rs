//! Error types and path context for timetable generation

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all timetable operations
#[derive(Debug)]
pub enum TimetableError {
    /// More distinct faculty names than the registry can intern
    ///
    /// Fatal for the run: no placement is attempted once this is raised.
    FacultyCapacityExceeded {
        /// Registry capacity
        capacity: usize,
        /// First name that did not fit
        name: String,
    },

    /// Run parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog content is malformed
    InvalidCatalog {
        /// 1-based line number of the offending record
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// The catalog reader failed
    CatalogRead {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying reader error
        source: csv::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FacultyCapacityExceeded { capacity, name } => {
                write!(
                    f,
                    "Faculty limit of {capacity} reached while registering '{name}'"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCatalog { line, reason } => {
                write!(f, "Invalid catalog entry on line {line}: {reason}")
            }
            Self::CatalogRead { path, source } => {
                write!(f, "Failed to read catalog '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TimetableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogRead { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for timetable results
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Attaches the file involved to I/O-originated errors
pub trait WithPath<T> {
    /// Record `path` and `operation` on file system and reader errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<TimetableError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            TimetableError::FileSystem { source, .. } => TimetableError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            TimetableError::CatalogRead { source, .. } => TimetableError::CatalogRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<csv::Error> for TimetableError {
    fn from(err: csv::Error) -> Self {
        Self::CatalogRead {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TimetableError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TimetableError {
    TimetableError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error for a 1-based line number
pub fn invalid_catalog(line: usize, reason: &impl ToString) -> TimetableError {
    TimetableError::InvalidCatalog {
        line,
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable target path
pub fn path_error(path: &Path, reason: &str) -> TimetableError {
    TimetableError::InvalidParameter {
        parameter: "path",
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}
