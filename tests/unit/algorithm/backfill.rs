//! Tests for the backfill sweep

#[cfg(test)]
mod tests {
    use timetabler::algorithm::backfill::{backfill, backfill_candidate};
    use timetabler::algorithm::faculty::FacultyRegistry;
    use timetabler::algorithm::state::ScheduleState;
    use timetabler::timetable::{Cell, SessionLength, Subject, SubjectCatalog, SubjectId, Timetable};

    fn state(catalog: &SubjectCatalog, sections: usize) -> ScheduleState<'_> {
        ScheduleState::new(
            catalog,
            Timetable::new(sections, 6, 7, 3),
            FacultyRegistry::new(100, 6, 7),
        )
        .expect("catalog fits the registry")
    }

    // Tests candidates are single sessions taken in catalog order
    #[test]
    fn test_candidate_catalog_order() {
        let catalog = SubjectCatalog::new(vec![
            Subject::new("Lab", SessionLength::Double, 1),
            Subject::new("A", SessionLength::Single, 3),
            Subject::new("B", SessionLength::Single, 3),
        ]);
        let mut state = state(&catalog, 1);

        assert_eq!(backfill_candidate(&state, Cell::new(0, 0, 0)), Some(SubjectId(1)));

        state.commit(SubjectId(1), Cell::new(0, 0, 0));
        assert_eq!(backfill_candidate(&state, Cell::new(0, 0, 1)), Some(SubjectId(2)));

        state.commit(SubjectId(2), Cell::new(0, 0, 1));
        assert_eq!(backfill_candidate(&state, Cell::new(0, 0, 2)), None);
        assert_eq!(backfill_candidate(&state, Cell::new(0, 0, 3)), None);
    }

    // Tests a lone subject fills at most one cell per day
    #[test]
    fn test_single_subject_one_per_day() {
        let catalog = SubjectCatalog::new(vec![Subject::new("Maths", SessionLength::Single, 3)]);
        let mut state = state(&catalog, 1);

        assert_eq!(backfill(&mut state), 6);
        assert_eq!(state.timetable().occurrences(0, SubjectId(0)), 6);
        assert!(!state.is_fulfilled(SubjectId(0), 0));
        assert_eq!(state.timetable().free_cells(0), 30);
    }

    // Tests two subjects fill two cells per day in every section
    #[test]
    fn test_two_subjects_across_sections() {
        let catalog = SubjectCatalog::new(vec![
            Subject::new("A", SessionLength::Single, 3),
            Subject::new("B", SessionLength::Single, 3),
        ]);
        let mut state = state(&catalog, 2);

        assert_eq!(backfill(&mut state), 24);
        for section in 0..2 {
            assert_eq!(state.timetable().free_cells(section), 24);
            for day in 0..6 {
                assert_eq!(state.timetable().get(Cell::new(section, day, 0)), Some(SubjectId(0)));
                assert_eq!(state.timetable().get(Cell::new(section, day, 1)), Some(SubjectId(1)));
            }
        }
    }

    // Tests double sessions are never used and lunch stays empty
    #[test]
    fn test_doubles_and_lunch_untouched() {
        let labs = SubjectCatalog::new(vec![Subject::new("Lab", SessionLength::Double, 1)]);
        let mut lab_state = state(&labs, 1);
        assert_eq!(backfill(&mut lab_state), 0);

        let singles = SubjectCatalog::new(vec![Subject::new("Maths", SessionLength::Single, 3)]);
        let mut single_state = state(&singles, 1);
        backfill(&mut single_state);
        for day in 0..6 {
            assert_eq!(single_state.timetable().get(Cell::new(0, day, 3)), None);
        }
    }

    // Tests a busy faculty member blocks backfill in other sections
    #[test]
    fn test_respects_faculty() {
        let catalog = SubjectCatalog::new(vec![
            Subject::new("Networks", SessionLength::Single, 3).with_faculty(["Dr. Rao"]),
        ]);
        let mut state = state(&catalog, 2);

        backfill(&mut state);

        for day in 0..6 {
            assert_eq!(state.timetable().get(Cell::new(0, day, 0)), Some(SubjectId(0)));
            assert_eq!(state.timetable().get(Cell::new(1, day, 0)), None);
            assert_eq!(state.timetable().get(Cell::new(1, day, 1)), Some(SubjectId(0)));
        }
    }

    // Tests already occupied cells are left alone
    #[test]
    fn test_skips_occupied_cells() {
        let catalog = SubjectCatalog::new(vec![
            Subject::new("A", SessionLength::Single, 3),
            Subject::new("B", SessionLength::Single, 1),
        ]);
        let mut state = state(&catalog, 1);
        state.commit(SubjectId(1), Cell::new(0, 0, 0));

        assert_eq!(backfill(&mut state), 11);
        assert_eq!(state.timetable().get(Cell::new(0, 0, 0)), Some(SubjectId(1)));
        assert_eq!(state.timetable().get(Cell::new(0, 0, 1)), Some(SubjectId(0)));
    }

    // Tests backfill leaves fulfilled flags as placement set them
    #[test]
    fn test_flags_untouched() {
        let catalog = SubjectCatalog::new(vec![
            Subject::new("A", SessionLength::Single, 2),
            Subject::new("B", SessionLength::Single, 3),
        ]);
        let mut state = state(&catalog, 2);
        state.mark_fulfilled(SubjectId(1), 1);

        assert_eq!(backfill(&mut state), 24);
        assert!(state.timetable().occurrences(0, SubjectId(0)) >= 2);
        assert!(state.timetable().occurrences(0, SubjectId(1)) >= 3);
        assert!(!state.is_fulfilled(SubjectId(0), 0));
        assert!(!state.is_fulfilled(SubjectId(1), 0));
        assert!(!state.is_fulfilled(SubjectId(0), 1));
        assert!(state.is_fulfilled(SubjectId(1), 1));
    }
}
