use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WorkshopId(pub usize);

#[derive(Clone, Debug)]
pub struct Workshop {
    pub id: WorkshopId,
    pub name: String,
    pub languages: BTreeSet<String>,
    pub doable_from_restricted_origin: bool,
    pub organizer: String,
    pub slot: i64,
    /// Maximum number of participants, 0 meaning unlimited.
    pub participants: usize,
}

impl Workshop {
    /// Capacity of a fixed-size workshop, `None` for a variable-size one.
    pub fn capacity(&self) -> Option<usize> {
        (self.participants > 0).then_some(self.participants)
    }

    pub fn is_variable(&self) -> bool {
        self.participants == 0
    }
}

impl fmt::Display for Workshop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (slot {})", self.name, self.slot)
    }
}

#[test]
fn test_capacity() {
    let w = Workshop {
        id: WorkshopId(0),
        name: "dummy".into(),
        languages: BTreeSet::new(),
        doable_from_restricted_origin: false,
        organizer: "X".into(),
        slot: 1,
        participants: 0,
    };
    assert!(w.is_variable());
    assert_eq!(w.capacity(), None);
    let w = Workshop {
        participants: 12,
        ..w
    };
    assert!(!w.is_variable());
    assert_eq!(w.capacity(), Some(12));
    assert_eq!(w.to_string(), "dummy (slot 1)");
}
