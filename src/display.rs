use crate::model::{Assignments, Student};
use crate::stats;

pub fn display_details(a: &Assignments, original_students: &[Student]) {
    let mut workshops = a.filter_workshops(|w| a.is_open(w));
    workshops.sort_by_key(|&w| (a.workshop(w).name.clone(), a.workshop(w).slot));
    for w in workshops {
        let mut students = a
            .students_for(w)
            .iter()
            .map(|s| original_students[s.0].id.0)
            .collect::<Vec<_>>();
        students.sort_unstable();
        println!("{}:", a.workshop(w));
        for s in students {
            println!("  - student {s}");
        }
        println!();
    }
}

pub fn display_stats(a: &Assignments, target: usize) {
    println!(
        "Score: {} (best possible {})",
        stats::score(a),
        target * a.cohort().students.len()
    );
    println!("There are:");
    for (workshops, students) in stats::coverage_histogram(a) {
        println!("  - {students} students map to {workshops} workshops");
    }
}

pub fn display_loads(a: &Assignments) {
    let mut loads = stats::workshop_loads(a);
    loads.sort_by_key(|l| a.workshop(l.workshop).slot);
    println!("Participants per workshop:");
    for load in loads {
        let target = load
            .capacity
            .map_or_else(|| "variable".to_owned(), |c| c.to_string());
        println!(
            "  - {}: {} (target {target})",
            a.workshop(load.workshop),
            load.attendees,
        );
    }
}

pub fn display_empty(a: &Assignments) {
    let mut workshops = a.filter_workshops(|w| !a.is_open(w));
    workshops.sort_by_key(|&w| a.workshop(w).name.clone());
    if !workshops.is_empty() {
        println!("Empty workshops:");
        for w in workshops {
            println!("  - {}", a.workshop(w));
        }
    }
}
