//! Tests for progress tracking across catalog batches

#[cfg(test)]
mod tests {
    use std::path::Path;
    use timetabler::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use timetabler::io::progress::{ProgressManager, StepUpdate};

    const fn update(completed: usize, subject: Option<&str>, failures: usize) -> StepUpdate<'_> {
        StepUpdate {
            completed,
            subject,
            failures,
        }
    }

    // Tests a catalog's bar follows the subject being placed and its failures
    #[test]
    fn test_single_catalog() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        assert_eq!(pm.catalog_count(), 1);

        pm.start_catalog(0, Path::new("data/cse.txt"), 4);
        let started = pm.catalog(0).expect("catalog was started");
        assert_eq!(started.name, "cse.txt");
        assert_eq!(started.message(), "0/4 starting");

        pm.update_step(0, update(1, Some("DBMS Lab"), 0));
        assert_eq!(pm.catalog(0).map(|c| c.message()).as_deref(), Some("1/4 DBMS Lab"));

        pm.update_step(0, update(3, Some("Seminar"), 2));
        assert_eq!(
            pm.catalog(0).map(|c| c.message()).as_deref(),
            Some("3/4 Seminar (2 unplaced)")
        );

        pm.update_step(0, update(4, Some("Seminar"), 2));
        assert_eq!(
            pm.catalog(0).map(|c| c.message()).as_deref(),
            Some("4/4 backfill (2 unplaced)")
        );

        pm.complete_catalog(0);
        let done = pm.catalog(0).expect("catalog was started");
        assert!(done.done);
        assert_eq!(done.message(), "4/4 done (2 unplaced)");
        pm.finish();
    }

    // Tests a step update without a subject keeps the previous one
    #[test]
    fn test_update_keeps_last_subject() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_catalog(0, Path::new("it.txt"), 5);

        pm.update_step(0, update(1, Some("Networks"), 0));
        pm.update_step(0, update(9, None, 1));

        let progress = pm.catalog(0).expect("catalog was started");
        assert_eq!(progress.subject.as_deref(), Some("Networks"));
        assert_eq!(progress.completed, 5);
        assert_eq!(progress.failures, 1);
    }

    // Tests batch mode totals failures over every catalog
    #[test]
    fn test_batch_mode() {
        let count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        let mut pm = ProgressManager::default();
        pm.initialize(count);

        for index in 0..count {
            pm.start_catalog(index, Path::new(&format!("catalog_{index}.csv")), 4);
            pm.update_step(index, update(2, Some("Maths"), index % 2));
            pm.complete_catalog(index);
        }

        assert_eq!(pm.catalog_count(), count);
        assert_eq!(pm.total_failures(), count / 2);
        pm.finish();
    }

    // Tests updates for unknown catalogs are ignored
    #[test]
    fn test_out_of_order_updates() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.update_step(1, update(3, Some("A"), 1));
        pm.complete_catalog(1);
        assert!(pm.catalog(1).is_none());
        assert_eq!(pm.total_failures(), 0);

        pm.start_catalog(1, Path::new("b.txt"), 3);
        pm.start_catalog(0, Path::new("a.txt"), 3);
        assert_eq!(pm.catalog(1).map(|c| c.completed), Some(0));
        pm.finish();
    }
}
