use crate::model::Assignments;
use eyre::{Error, bail};
use std::collections::HashSet;
use tracing::warn;

/// Verify that every hard constraint holds on a complete assignment.
pub fn check_constraints(a: &Assignments, target: usize) -> Result<(), Error> {
    for s in a.all_students() {
        let student = a.student(s);
        let held = a.workshops_for(s);
        if held.len() > target {
            bail!(
                "student {} holds {} workshops, more than {target}",
                s.0,
                held.len()
            );
        }
        let mut names = HashSet::new();
        let mut slots = HashSet::new();
        for &w in held {
            let workshop = a.workshop(w);
            if !student.speaks_any(&workshop.languages) {
                bail!("student {} does not speak the language of {workshop}", s.0);
            }
            if student.restricted_origin && !workshop.doable_from_restricted_origin {
                bail!("{workshop} is not reachable from the origin of student {}", s.0);
            }
            if workshop.organizer == student.school {
                bail!("student {} attends {workshop} organized by their own school", s.0);
            }
            if !names.insert(&workshop.name) {
                bail!("student {} attends {} twice", s.0, workshop.name);
            }
            if !slots.insert(workshop.slot) {
                bail!("student {} has two workshops in slot {}", s.0, workshop.slot);
            }
        }
    }
    if let Some(w) = a.all_workshops().into_iter().find(|&w| a.is_over_capacity(w)) {
        bail!(
            "{} has {} participants, more than its capacity of {}",
            a.workshop(w),
            a.count(w),
            a.workshop(w).participants
        );
    }
    Ok(())
}

/// Warn about students who did not get `target` workshops and about
/// workshops nobody attends.
pub fn check_coverage(a: &Assignments, target: usize) {
    let unassigned = a.unassigned_students();
    if !unassigned.is_empty() {
        warn!(
            students = unassigned.len(),
            "Some students did not get any workshop"
        );
    }
    let incomplete = a.incomplete_students(target);
    if !incomplete.is_empty() {
        warn!(
            students = incomplete.len(),
            target, "Some students did not get enough workshops"
        );
    }
    for w in a.filter_workshops(|w| !a.is_open(w)) {
        warn!(workshop = %a.workshop(w), "Workshop has no participant");
    }
}
