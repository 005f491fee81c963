use super::*;

/// Per-trial assignment state. The cohort is shared, everything else is
/// owned, so that a fresh value starts with every workshop count at zero.
#[derive(Clone, Debug)]
pub struct Assignments<'c> {
    cohort: &'c Cohort,
    assigned: Vec<Vec<WorkshopId>>,
    attendees: Vec<Vec<StudentId>>,
}

impl<'c> Assignments<'c> {
    pub fn new(cohort: &'c Cohort) -> Assignments<'c> {
        Assignments {
            cohort,
            assigned: vec![Vec::new(); cohort.students.len()],
            attendees: vec![Vec::new(); cohort.workshops.len()],
        }
    }

    pub fn cohort(&self) -> &'c Cohort {
        self.cohort
    }

    pub fn student(&self, student: StudentId) -> &'c Student {
        self.cohort.student(student)
    }

    pub fn workshop(&self, workshop: WorkshopId) -> &'c Workshop {
        self.cohort.workshop(workshop)
    }

    pub fn all_students(&self) -> Vec<StudentId> {
        self.cohort.all_students()
    }

    pub fn all_workshops(&self) -> Vec<WorkshopId> {
        self.filter_workshops(|_| true)
    }

    pub fn filter_workshops<F>(&self, condition: F) -> Vec<WorkshopId>
    where
        F: Fn(WorkshopId) -> bool,
    {
        (0..self.cohort.workshops.len())
            .map(WorkshopId)
            .filter(|&w| condition(w))
            .collect()
    }

    /// Workshops held by a student, in assignment order.
    pub fn workshops_for(&self, StudentId(student): StudentId) -> &[WorkshopId] {
        &self.assigned[student]
    }

    pub fn students_for(&self, WorkshopId(workshop): WorkshopId) -> &[StudentId] {
        &self.attendees[workshop]
    }

    /// Number of students currently attending a workshop.
    pub fn count(&self, workshop: WorkshopId) -> usize {
        self.students_for(workshop).len()
    }

    pub fn holds(&self, student: StudentId, workshop: WorkshopId) -> bool {
        self.workshops_for(student).contains(&workshop)
    }

    pub fn assign_to(&mut self, student: StudentId, workshop: WorkshopId) {
        assert!(
            !self.holds(student, workshop),
            "workshop is already assigned to this student"
        );
        self.assigned[student.0].push(workshop);
        self.attendees[workshop.0].push(student);
    }

    /// Whether a workshop can accept one more student. Always true for a
    /// variable-size workshop.
    pub fn has_room(&self, workshop: WorkshopId) -> bool {
        self.workshop(workshop)
            .capacity()
            .is_none_or(|c| self.count(workshop) < c)
    }

    pub fn is_over_capacity(&self, workshop: WorkshopId) -> bool {
        self.workshop(workshop)
            .capacity()
            .is_some_and(|c| self.count(workshop) > c)
    }

    pub fn is_open(&self, workshop: WorkshopId) -> bool {
        !self.students_for(workshop).is_empty()
    }

    pub fn unassigned_students(&self) -> Vec<StudentId> {
        self.assigned
            .iter()
            .enumerate()
            .filter_map(|(id, workshops)| workshops.is_empty().then_some(StudentId(id)))
            .collect()
    }

    /// Students holding fewer than `target` workshops.
    pub fn incomplete_students(&self, target: usize) -> Vec<StudentId> {
        self.all_students()
            .into_iter()
            .filter(|&s| self.workshops_for(s).len() < target)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn test_counts() {
        let cohort = cohort(
            vec![student("en", false, "X"), student("en", false, "Y")],
            vec![
                workshop("A", "en", "Z", 1, 1),
                workshop("B", "en", "Z", 2, 0),
            ],
        );
        let mut a = Assignments::new(&cohort);
        assert_eq!(a.unassigned_students().len(), 2);
        assert!(a.has_room(WorkshopId(0)));
        a.assign_to(StudentId(0), WorkshopId(0));
        a.assign_to(StudentId(0), WorkshopId(1));
        a.assign_to(StudentId(1), WorkshopId(1));
        assert_eq!(a.count(WorkshopId(0)), 1);
        assert_eq!(a.count(WorkshopId(1)), 2);
        assert!(!a.has_room(WorkshopId(0)));
        assert!(a.has_room(WorkshopId(1)));
        assert!(!a.is_over_capacity(WorkshopId(0)));
        assert_eq!(
            a.workshops_for(StudentId(0)),
            &[WorkshopId(0), WorkshopId(1)]
        );
        assert_eq!(a.students_for(WorkshopId(1)), &[StudentId(0), StudentId(1)]);
        assert!(a.unassigned_students().is_empty());
        assert_eq!(a.incomplete_students(2), vec![StudentId(1)]);
    }

    #[test]
    fn test_fresh_state_per_trial() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![workshop("A", "en", "Z", 1, 1)],
        );
        let mut a = Assignments::new(&cohort);
        a.assign_to(StudentId(0), WorkshopId(0));
        let b = Assignments::new(&cohort);
        assert_eq!(a.count(WorkshopId(0)), 1);
        assert_eq!(b.count(WorkshopId(0)), 0);
    }

    #[test]
    #[should_panic(expected = "already assigned")]
    fn test_assign_twice() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![workshop("A", "en", "Z", 1, 0)],
        );
        let mut a = Assignments::new(&cohort);
        a.assign_to(StudentId(0), WorkshopId(0));
        a.assign_to(StudentId(0), WorkshopId(0));
    }
}
