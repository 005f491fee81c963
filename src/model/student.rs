use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub languages: BTreeSet<String>,
    pub restricted_origin: bool,
    pub school: String,
}

impl Student {
    pub fn speaks_any(&self, languages: &BTreeSet<String>) -> bool {
        !self.languages.is_disjoint(languages)
    }
}
