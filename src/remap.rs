use crate::model::{Student, StudentId, Workshop, WorkshopId};
use eyre::{Error, bail};
use std::collections::HashSet;

fn ensure_unique<I: IntoIterator<Item = usize>>(ids: I, what: &str) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {what} {id} found");
        }
    }
    Ok(())
}

fn remap_students(students: &mut [Student]) {
    for (idx, student) in students.iter_mut().enumerate() {
        student.id = StudentId(idx);
    }
}

fn remap_workshops(workshops: &mut [Workshop]) {
    for (idx, workshop) in workshops.iter_mut().enumerate() {
        workshop.id = WorkshopId(idx);
    }
}

/// Renumber students and workshops from 0 without gaps, keeping their
/// order. Identifiers must be unique on entry.
pub fn remap(students: &mut [Student], workshops: &mut [Workshop]) -> Result<(), Error> {
    ensure_unique(students.iter().map(|s| s.id.0), "student_id")?;
    ensure_unique(workshops.iter().map(|w| w.id.0), "workshop_id")?;
    remap_students(students);
    remap_workshops(workshops);
    Ok(())
}
