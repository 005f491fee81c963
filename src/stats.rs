use crate::model::*;
use std::collections::BTreeMap;

/// Total number of workshops handed out. Higher is better, and a perfect
/// assignment of `n` workshops to everyone scores `n` times the number of
/// students.
pub fn score(a: &Assignments) -> usize {
    a.all_students()
        .into_iter()
        .map(|s| a.workshops_for(s).len())
        .sum()
}

/// Number of students by number of workshops held.
pub fn coverage_histogram(a: &Assignments) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for s in a.all_students() {
        *histogram.entry(a.workshops_for(s).len()).or_insert(0) += 1;
    }
    histogram
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkshopLoad {
    pub workshop: WorkshopId,
    pub attendees: usize,
    pub capacity: Option<usize>,
}

pub fn workshop_loads(a: &Assignments) -> Vec<WorkshopLoad> {
    a.all_workshops()
        .into_iter()
        .map(|w| WorkshopLoad {
            workshop: w,
            attendees: a.count(w),
            capacity: a.workshop(w).capacity(),
        })
        .collect()
}
