pub use self::assignments::Assignments;
pub use self::cohort::Cohort;
pub use self::student::{Student, StudentId};
pub use self::workshop::{Workshop, WorkshopId};

mod assignments;
mod cohort;
mod student;
mod workshop;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn languages(langs: &str) -> std::collections::BTreeSet<String> {
        langs
            .split(',')
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn student(langs: &str, restricted_origin: bool, school: &str) -> Student {
        Student {
            id: StudentId(0),
            languages: languages(langs),
            restricted_origin,
            school: school.into(),
        }
    }

    pub fn workshop(
        name: &str,
        langs: &str,
        organizer: &str,
        slot: i64,
        participants: usize,
    ) -> Workshop {
        Workshop {
            id: WorkshopId(0),
            name: name.into(),
            languages: languages(langs),
            doable_from_restricted_origin: false,
            organizer: organizer.into(),
            slot,
            participants,
        }
    }

    pub fn reachable(w: Workshop) -> Workshop {
        Workshop {
            doable_from_restricted_origin: true,
            ..w
        }
    }

    /// Build a cohort, numbering students and workshops in order.
    pub fn cohort(mut students: Vec<Student>, mut workshops: Vec<Workshop>) -> Cohort {
        for (i, s) in students.iter_mut().enumerate() {
            s.id = StudentId(i);
        }
        for (i, w) in workshops.iter_mut().enumerate() {
            w.id = WorkshopId(i);
        }
        Cohort::new(students, workshops)
    }
}
