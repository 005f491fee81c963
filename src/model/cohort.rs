use super::{Student, StudentId, Workshop, WorkshopId};

/// Students and workshops of a run, indexed by their dense identifiers.
/// Never modified once built, and shared by every trial.
#[derive(Debug)]
pub struct Cohort {
    pub students: Vec<Student>,
    pub workshops: Vec<Workshop>,
}

impl Cohort {
    pub fn new(students: Vec<Student>, workshops: Vec<Workshop>) -> Cohort {
        debug_assert!(students.iter().enumerate().all(|(i, s)| s.id.0 == i));
        debug_assert!(workshops.iter().enumerate().all(|(i, w)| w.id.0 == i));
        Cohort {
            students,
            workshops,
        }
    }

    pub fn student(&self, StudentId(student): StudentId) -> &Student {
        &self.students[student]
    }

    pub fn workshop(&self, WorkshopId(workshop): WorkshopId) -> &Workshop {
        &self.workshops[workshop]
    }

    pub fn all_students(&self) -> Vec<StudentId> {
        (0..self.students.len()).map(StudentId).collect()
    }

    pub fn all_workshops(&self) -> Vec<WorkshopId> {
        (0..self.workshops.len()).map(WorkshopId).collect()
    }

    /// Distinct slots, in ascending order.
    pub fn slots(&self) -> Vec<i64> {
        let mut slots = self.workshops.iter().map(|w| w.slot).collect::<Vec<_>>();
        slots.sort_unstable();
        slots.dedup();
        slots
    }
}
