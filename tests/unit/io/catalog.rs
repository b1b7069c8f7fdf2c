//! Tests for catalog parsing and loading

#[cfg(test)]
mod tests {
    use std::io::Write;
    use timetabler::TimetableError;
    use timetabler::io::catalog::{load_catalog, parse_catalog, split_faculty};
    use timetabler::io::configuration::MAX_SUBJECTS;
    use timetabler::timetable::SessionLength;

    // Tests a typical catalog with comments, blank lines and faculty lists
    #[test]
    fn test_parse_catalog() {
        let input = "\
# name,duration,faculty
Operating Systems,1,Dr. Rao

DBMS Lab,2,Dr. Iyer; Dr. Rao
Sports,1
OE-II,1,,2
";
        let catalog = parse_catalog(input.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 4);

        let (_, os) = catalog.find("Operating Systems").unwrap();
        assert_eq!(os.length, SessionLength::Single);
        assert_eq!(os.weekly_occurrences, 3);
        assert_eq!(os.faculty, vec!["Dr. Rao"]);
        assert_eq!(os.section_affinity, None);

        let (_, lab) = catalog.find("DBMS Lab").unwrap();
        assert_eq!(lab.length, SessionLength::Double);
        assert_eq!(lab.weekly_occurrences, 1);
        assert_eq!(lab.faculty, vec!["Dr. Iyer", "Dr. Rao"]);

        let (_, sports) = catalog.find("Sports").unwrap();
        assert!(sports.faculty.is_empty());
        assert_eq!(sports.weekly_occurrences, 1);

        let (_, elective) = catalog.find("OE-II").unwrap();
        assert_eq!(elective.weekly_occurrences, 2);
        assert_eq!(elective.section_affinity, Some(1));
    }

    // Tests a line without a duration is skipped rather than rejected
    #[test]
    fn test_missing_duration_skipped() {
        let catalog = parse_catalog("Maths\nPhysics,1\n".as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("Physics").is_some());
    }

    // Tests durations other than 1 or 2 hours are rejected with their line
    #[test]
    fn test_invalid_duration() {
        let err = parse_catalog("Maths,1\nWorkshop,3\n".as_bytes()).unwrap_err();
        match err {
            TimetableError::InvalidCatalog { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("Workshop"));
            }
            other => unreachable!("Expected catalog error, got {other:?}"),
        }

        assert!(parse_catalog("Maths,one\n".as_bytes()).is_err());
    }

    // Tests section numbers must be positive
    #[test]
    fn test_invalid_section() {
        assert!(matches!(
            parse_catalog("Elective,1,Dr. Rao,0\n".as_bytes()),
            Err(TimetableError::InvalidCatalog { .. })
        ));
        assert!(matches!(
            parse_catalog("Elective,1,Dr. Rao,A\n".as_bytes()),
            Err(TimetableError::InvalidCatalog { .. })
        ));
    }

    // Tests duplicate subject names are rejected
    #[test]
    fn test_duplicate_subject() {
        assert!(matches!(
            parse_catalog("Maths,1\nMaths,2\n".as_bytes()),
            Err(TimetableError::InvalidCatalog { line: 2, .. })
        ));
    }

    // Tests reading stops at the subject limit
    #[test]
    fn test_subject_limit() {
        let input: String = (0..MAX_SUBJECTS + 5)
            .map(|i| format!("Subject {i},1\n"))
            .collect();

        let catalog = parse_catalog(input.as_bytes()).unwrap();
        assert_eq!(catalog.len(), MAX_SUBJECTS);
    }

    // Tests faculty fields split on semicolons and drop blanks
    #[test]
    fn test_split_faculty() {
        assert_eq!(split_faculty("A; B ;;C"), vec!["A", "B", "C"]);
        assert!(split_faculty("  ").is_empty());
    }

    // Tests loading from disk and the error for a missing file
    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("it.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Networks,1,Dr. Rao").unwrap();
        writeln!(file, "Networks Lab,2,Dr. Rao").unwrap();
        drop(file);

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let missing = dir.path().join("missing.txt");
        match load_catalog(&missing) {
            Err(TimetableError::FileSystem { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected file system error, got {other:?}"),
        }
    }
}
