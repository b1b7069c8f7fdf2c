//! Tests for timetable shape defaults and report labels

#[cfg(test)]
mod tests {
    use timetabler::io::configuration::{
        CATALOG_EXTENSIONS, DAY_NAMES, DEFAULT_DAYS, DEFAULT_LUNCH_SLOT, DEFAULT_SECTIONS,
        DEFAULT_SLOTS_PER_DAY, MAX_FACULTIES, MAX_INDIVIDUAL_PROGRESS_BARS, MAX_SUBJECTS,
        SECTION_NAMES, SLOT_LABELS,
    };

    // Tests the default week layout
    #[test]
    fn test_default_shape() {
        assert_eq!(DEFAULT_SECTIONS, 3);
        assert_eq!(DEFAULT_DAYS, 6);
        assert_eq!(DEFAULT_SLOTS_PER_DAY, 7);
        assert_eq!(DEFAULT_LUNCH_SLOT, 3);
    }

    // Tests label tables cover the default shape
    #[test]
    fn test_labels_match_shape() {
        assert_eq!(DAY_NAMES.len(), DEFAULT_DAYS);
        assert_eq!(SLOT_LABELS.len(), DEFAULT_SLOTS_PER_DAY);
        assert_eq!(SECTION_NAMES.len(), DEFAULT_SECTIONS);
        assert!(
            SLOT_LABELS
                .get(DEFAULT_LUNCH_SLOT)
                .is_some_and(|label| label.contains("Lunch"))
        );
    }

    // Tests capacity limits
    #[test]
    fn test_limits() {
        assert_eq!(MAX_FACULTIES, 100);
        assert_eq!(MAX_SUBJECTS, 50);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests accepted catalog extensions
    #[test]
    fn test_catalog_extensions() {
        assert!(CATALOG_EXTENSIONS.contains(&"txt"));
        assert!(CATALOG_EXTENSIONS.contains(&"csv"));
    }
}
