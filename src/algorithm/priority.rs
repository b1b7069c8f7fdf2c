use std::cmp::Reverse;

use crate::timetable::{SubjectCatalog, SubjectId};

/// Order in which subjects are attempted by the placement engine
///
/// Double sessions go first since they need two contiguous free slots, then
/// subjects with more weekly occurrences. The sort is stable, so equal
/// subjects keep their catalog order and a catalog always yields the same
/// order.
pub fn priority_order(catalog: &SubjectCatalog) -> Vec<SubjectId> {
    let mut order: Vec<SubjectId> = catalog.iter().map(|(id, _)| id).collect();
    order.sort_by_key(|&id| {
        catalog.get(id).map_or((Reverse(0), Reverse(0)), |subject| {
            (
                Reverse(subject.length.slots()),
                Reverse(subject.weekly_occurrences),
            )
        })
    });
    order
}
