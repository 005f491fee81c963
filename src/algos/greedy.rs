use super::Algo;
use super::eligibility::candidates_for;
use crate::model::*;
use eyre::{Error, ensure};
use tracing::{debug, trace};

/// Give at most one more workshop to every student holding fewer than
/// `target` workshops, visiting students in the given order. Candidates
/// are taken from `workshops`, whose order breaks ranking ties.
///
/// Return the number of workshops handed out.
pub fn allocate_round(
    a: &mut Assignments<'_>,
    students: &[StudentId],
    workshops: &[WorkshopId],
    target: usize,
) -> usize {
    let mut assigned = 0;
    for &student in students {
        if a.workshops_for(student).len() >= target {
            continue;
        }
        if let Some(&workshop) = candidates_for(a, student, workshops).first() {
            a.assign_to(student, workshop);
            assigned += 1;
        } else {
            trace!(
                student = student.0,
                held = a.workshops_for(student).len(),
                "No eligible workshop left for student in this round",
            );
        }
    }
    assigned
}

/// Run as many rounds as the number of workshops wanted for every
/// student, all workshops being candidates in every round.
pub struct Greedy<'a, 'c> {
    assignments: &'a mut Assignments<'c>,
    students: Vec<StudentId>,
    workshops: Vec<WorkshopId>,
    rounds: usize,
}

impl<'a, 'c> Greedy<'a, 'c> {
    pub fn new(
        assignments: &'a mut Assignments<'c>,
        students: Vec<StudentId>,
        workshops: Vec<WorkshopId>,
        rounds: usize,
    ) -> Greedy<'a, 'c> {
        Greedy {
            assignments,
            students,
            workshops,
            rounds,
        }
    }
}

impl Algo for Greedy<'_, '_> {
    fn assign(&mut self) -> Result<(), Error> {
        ensure!(self.rounds > 0, "at least one round is required");
        for round in 1..=self.rounds {
            let assigned =
                allocate_round(self.assignments, &self.students, &self.workshops, self.rounds);
            debug!(round, assigned, "Round complete");
        }
        Ok(())
    }
}
