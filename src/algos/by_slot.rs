use super::Algo;
use super::allocate_round;
use crate::model::*;
use eyre::{Error, ensure};
use tracing::debug;

/// Run one round per slot in ascending slot order, only considering the
/// workshops of that slot. Students stop receiving workshops once they hold
/// `target` of them.
pub struct BySlot<'a, 'c> {
    assignments: &'a mut Assignments<'c>,
    students: Vec<StudentId>,
    workshops: Vec<WorkshopId>,
    target: usize,
}

impl<'a, 'c> BySlot<'a, 'c> {
    pub fn new(
        assignments: &'a mut Assignments<'c>,
        students: Vec<StudentId>,
        workshops: Vec<WorkshopId>,
        target: usize,
    ) -> BySlot<'a, 'c> {
        BySlot {
            assignments,
            students,
            workshops,
            target,
        }
    }
}

impl Algo for BySlot<'_, '_> {
    fn assign(&mut self) -> Result<(), Error> {
        ensure!(self.target > 0, "at least one round is required");
        for slot in self.assignments.cohort().slots() {
            let candidates = self
                .workshops
                .iter()
                .copied()
                .filter(|&w| self.assignments.workshop(w).slot == slot)
                .collect::<Vec<_>>();
            let assigned =
                allocate_round(self.assignments, &self.students, &candidates, self.target);
            debug!(slot, candidates = candidates.len(), assigned, "Slot complete");
        }
        Ok(())
    }
}
