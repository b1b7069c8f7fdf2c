//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::Path;
    use timetabler::TimetableError;
    use timetabler::io::error::{WithPath, invalid_catalog, invalid_parameter, path_error};

    // Tests error source chaining for file system failures
    #[test]
    fn test_error_source_chain() {
        let error = TimetableError::FileSystem {
            path: "/tmp/it.txt".into(),
            operation: "read",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/it.txt"));
        assert!(invalid_catalog(3, &"bad").source().is_none());
    }

    // Tests the capacity error names the limit and the rejected faculty
    #[test]
    fn test_faculty_capacity_message() {
        let error = TimetableError::FacultyCapacityExceeded {
            capacity: 100,
            name: "Dr. Rao".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Faculty limit of 100 reached while registering 'Dr. Rao'"
        );
    }

    // Tests invalid parameter errors contain every field
    #[test]
    fn test_invalid_parameter_message() {
        let message = invalid_parameter("lunch_slot", &9, &"must be below slots_per_day (7)").to_string();

        assert!(message.contains("lunch_slot"));
        assert!(message.contains('9'));
        assert!(message.contains("must be below"));
    }

    // Tests catalog errors report their line
    #[test]
    fn test_invalid_catalog_message() {
        assert_eq!(
            invalid_catalog(4, &"duration '3' of 'Workshop' must be 1 or 2").to_string(),
            "Invalid catalog entry on line 4: duration '3' of 'Workshop' must be 1 or 2"
        );
    }

    // Tests path errors are reported as an invalid path parameter
    #[test]
    fn test_path_error() {
        match path_error(Path::new("notes.md"), "not a catalog") {
            TimetableError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "path");
                assert_eq!(value, "notes.md");
            }
            other => unreachable!("Expected invalid parameter, got {other:?}"),
        }
    }

    // Tests path context is attached to I/O errors and other errors pass through
    #[test]
    fn test_with_path() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk full"));
        match io.with_path(Path::new("out/report.txt"), "write timetable") {
            Err(TimetableError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, Path::new("out/report.txt"));
                assert_eq!(operation, "write timetable");
            }
            other => unreachable!("Expected file system error, got {other:?}"),
        }

        let catalog: timetabler::Result<()> = Err(invalid_catalog(2, &"bad"));
        assert!(matches!(
            catalog.with_path(Path::new("it.txt"), "read catalog"),
            Err(TimetableError::InvalidCatalog { line: 2, .. })
        ));
    }
}
