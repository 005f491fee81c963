use crate::model::{Assignments, StudentId, WorkshopId};

/// A hard constraint telling whether a student may be given a workshop
/// in the current state of the assignments.
pub type Constraint = fn(&Assignments<'_>, StudentId, WorkshopId) -> bool;

/// Constraints checked by [`eligible_workshops`], cheapest first.
pub const CONSTRAINTS: [Constraint; 5] = [
    speaks_language,
    reachable_from_origin,
    not_organized_by_own_school,
    not_taken_under_same_name,
    slot_is_free,
];

/// The student and the workshop share at least one language.
pub fn speaks_language(a: &Assignments<'_>, student: StudentId, workshop: WorkshopId) -> bool {
    a.student(student).speaks_any(&a.workshop(workshop).languages)
}

/// Students with a restricted origin can only attend workshops reachable from it.
pub fn reachable_from_origin(
    a: &Assignments<'_>,
    student: StudentId,
    workshop: WorkshopId,
) -> bool {
    !a.student(student).restricted_origin || a.workshop(workshop).doable_from_restricted_origin
}

pub fn not_organized_by_own_school(
    a: &Assignments<'_>,
    student: StudentId,
    workshop: WorkshopId,
) -> bool {
    a.workshop(workshop).organizer != a.student(student).school
}

/// The student does not already hold a workshop with the same name, in
/// whatever slot.
pub fn not_taken_under_same_name(
    a: &Assignments<'_>,
    student: StudentId,
    workshop: WorkshopId,
) -> bool {
    let name = &a.workshop(workshop).name;
    a.workshops_for(student)
        .iter()
        .all(|&held| a.workshop(held).name != *name)
}

pub fn slot_is_free(a: &Assignments<'_>, student: StudentId, workshop: WorkshopId) -> bool {
    let slot = a.workshop(workshop).slot;
    a.workshops_for(student)
        .iter()
        .all(|&held| a.workshop(held).slot != slot)
}

/// Workshops from `candidates` the student is still allowed to attend,
/// in the order of `candidates`.
pub fn eligible_workshops(
    a: &Assignments<'_>,
    student: StudentId,
    candidates: &[WorkshopId],
) -> Vec<WorkshopId> {
    candidates
        .iter()
        .copied()
        .filter(|&w| CONSTRAINTS.iter().all(|allowed| allowed(a, student, w)))
        .collect()
}

/// Order eligible workshops for a greedy pick: fixed-size workshops with
/// room left come first, then variable-size ones, each group by ascending
/// number of attendees. Full workshops are dropped. Sorting is stable, so
/// ties keep the order of `eligible`.
pub fn rank_by_priority(a: &Assignments<'_>, eligible: Vec<WorkshopId>) -> Vec<WorkshopId> {
    let (mut fixed, mut variable): (Vec<_>, Vec<_>) = eligible
        .into_iter()
        .partition(|&w| !a.workshop(w).is_variable());
    fixed.retain(|&w| a.has_room(w));
    fixed.sort_by_key(|&w| a.count(w));
    variable.sort_by_key(|&w| a.count(w));
    fixed.extend(variable);
    fixed
}

/// Ranked workshops a student may be given next.
pub fn candidates_for(
    a: &Assignments<'_>,
    student: StudentId,
    candidates: &[WorkshopId],
) -> Vec<WorkshopId> {
    rank_by_priority(a, eligible_workshops(a, student, candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::*;

    const S: StudentId = StudentId(0);

    #[test]
    fn test_language() {
        let cohort = cohort(
            vec![student("en,it", false, "X")],
            vec![
                workshop("A", "fr", "Z", 1, 0),
                workshop("B", "it,de", "Z", 1, 0),
            ],
        );
        let a = Assignments::new(&cohort);
        assert!(!speaks_language(&a, S, WorkshopId(0)));
        assert!(speaks_language(&a, S, WorkshopId(1)));
    }

    #[test]
    fn test_origin() {
        let cohort = cohort(
            vec![student("en", true, "X"), student("en", false, "X")],
            vec![
                workshop("A", "en", "Z", 1, 0),
                reachable(workshop("B", "en", "Z", 1, 0)),
            ],
        );
        let a = Assignments::new(&cohort);
        assert!(!reachable_from_origin(&a, S, WorkshopId(0)));
        assert!(reachable_from_origin(&a, S, WorkshopId(1)));
        assert!(reachable_from_origin(&a, StudentId(1), WorkshopId(0)));
        assert!(reachable_from_origin(&a, StudentId(1), WorkshopId(1)));
    }

    #[test]
    fn test_organizer() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![
                workshop("A", "en", "X", 1, 0),
                workshop("B", "en", "Y", 1, 0),
            ],
        );
        let a = Assignments::new(&cohort);
        assert!(!not_organized_by_own_school(&a, S, WorkshopId(0)));
        assert!(not_organized_by_own_school(&a, S, WorkshopId(1)));
    }

    #[test]
    fn test_same_name_in_other_slot() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![
                workshop("A", "en", "Z", 1, 0),
                workshop("A", "en", "Z", 2, 0),
                workshop("B", "en", "Z", 3, 0),
            ],
        );
        let mut a = Assignments::new(&cohort);
        a.assign_to(S, WorkshopId(0));
        assert!(!not_taken_under_same_name(&a, S, WorkshopId(1)));
        assert!(not_taken_under_same_name(&a, S, WorkshopId(2)));
        assert_eq!(
            eligible_workshops(&a, S, &a.all_workshops()),
            vec![WorkshopId(2)]
        );
    }

    #[test]
    fn test_same_slot() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![
                workshop("A", "en", "Z", 1, 0),
                workshop("B", "en", "Z", 1, 0),
                workshop("C", "en", "Z", 2, 0),
            ],
        );
        let mut a = Assignments::new(&cohort);
        assert!(slot_is_free(&a, S, WorkshopId(1)));
        a.assign_to(S, WorkshopId(0));
        assert!(!slot_is_free(&a, S, WorkshopId(1)));
        assert_eq!(
            eligible_workshops(&a, S, &a.all_workshops()),
            vec![WorkshopId(2)]
        );
    }

    #[test]
    fn test_no_eligible_workshop() {
        let cohort = cohort(
            vec![student("ja", false, "X")],
            vec![
                workshop("A", "en", "Z", 1, 0),
                workshop("B", "fr", "Z", 2, 4),
            ],
        );
        let a = Assignments::new(&cohort);
        assert!(candidates_for(&a, S, &a.all_workshops()).is_empty());
    }

    #[test]
    fn test_eligible_keeps_candidate_order() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![
                workshop("A", "en", "Z", 1, 0),
                workshop("B", "en", "Z", 2, 0),
                workshop("C", "en", "X", 3, 0),
            ],
        );
        let a = Assignments::new(&cohort);
        let order = [WorkshopId(2), WorkshopId(1), WorkshopId(0)];
        assert_eq!(
            eligible_workshops(&a, S, &order),
            vec![WorkshopId(1), WorkshopId(0)]
        );
    }

    #[test]
    fn test_ranking() {
        let cohort = cohort(
            vec![
                student("en", false, "X"),
                student("en", false, "X"),
                student("en", false, "X"),
            ],
            vec![
                workshop("Var busy", "en", "Z", 1, 0),
                workshop("Var idle", "en", "Z", 2, 0),
                workshop("Fix full", "en", "Z", 3, 1),
                workshop("Fix busy", "en", "Z", 4, 5),
                workshop("Fix idle", "en", "Z", 5, 5),
            ],
        );
        let mut a = Assignments::new(&cohort);
        a.assign_to(StudentId(1), WorkshopId(0));
        a.assign_to(StudentId(2), WorkshopId(0));
        a.assign_to(StudentId(1), WorkshopId(2));
        a.assign_to(StudentId(1), WorkshopId(3));
        assert_eq!(
            rank_by_priority(&a, a.all_workshops()),
            vec![WorkshopId(4), WorkshopId(3), WorkshopId(1), WorkshopId(0)]
        );
    }

    #[test]
    fn test_ranking_ties_are_stable() {
        let cohort = cohort(
            vec![student("en", false, "X")],
            vec![
                workshop("A", "en", "Z", 1, 0),
                workshop("B", "en", "Z", 2, 3),
                workshop("C", "en", "Z", 3, 0),
                workshop("D", "en", "Z", 4, 3),
            ],
        );
        let a = Assignments::new(&cohort);
        let order = vec![WorkshopId(2), WorkshopId(3), WorkshopId(0), WorkshopId(1)];
        assert_eq!(
            rank_by_priority(&a, order),
            vec![WorkshopId(3), WorkshopId(1), WorkshopId(2), WorkshopId(0)]
        );
    }

    #[test]
    fn test_variable_never_full() {
        let cohort = cohort(
            (0..50).map(|_| student("en", false, "X")).collect(),
            vec![workshop("A", "en", "Z", 1, 0)],
        );
        let mut a = Assignments::new(&cohort);
        for s in a.all_students() {
            a.assign_to(s, WorkshopId(0));
        }
        assert!(a.has_room(WorkshopId(0)));
        assert_eq!(rank_by_priority(&a, vec![WorkshopId(0)]), vec![WorkshopId(0)]);
    }
}
