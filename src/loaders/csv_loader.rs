use crate::model::{Student, StudentId, Workshop, WorkshopId};
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct StudentRecord {
    student_id: usize,
    languages: String,
    from_lampedusa: String,
    school: String,
}

#[derive(Debug, Deserialize)]
struct WorkshopRecord {
    workshop_id: usize,
    name: String,
    languages: String,
    doable_from_lampedusa: String,
    organizer: String,
    slot: i64,
    participants: Option<usize>,
}

/// One output row: a student identifier and the identifiers of the
/// workshops assigned to them, in assignment order.
pub type MappingRow = (usize, Vec<usize>);

pub struct CsvLoader {
    students: PathBuf,
    workshops: PathBuf,
    mapping: PathBuf,
}

fn parse_languages(languages: &str) -> BTreeSet<String> {
    languages
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Boolean-like cells are true when they read `true`, in any case.
fn parse_flag(flag: &str) -> bool {
    flag.trim().eq_ignore_ascii_case("true")
}

fn reader<R: io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))
}

pub fn read_students<R: io::Read>(input: R) -> Result<Vec<Student>, Error> {
    reader(input)
        .deserialize()
        .map(|record| -> Result<Student, Error> {
            let record: StudentRecord = record?;
            Ok(Student {
                id: StudentId(record.student_id),
                languages: parse_languages(&record.languages),
                restricted_origin: parse_flag(&record.from_lampedusa),
                school: record.school,
            })
        })
        .collect()
}

pub fn read_workshops<R: io::Read>(input: R) -> Result<Vec<Workshop>, Error> {
    reader(input)
        .deserialize()
        .map(|record| -> Result<Workshop, Error> {
            let record: WorkshopRecord = record?;
            Ok(Workshop {
                id: WorkshopId(record.workshop_id),
                name: record.name,
                languages: parse_languages(&record.languages),
                doable_from_restricted_origin: parse_flag(&record.doable_from_lampedusa),
                organizer: record.organizer,
                slot: record.slot,
                participants: record.participants.unwrap_or(0),
            })
        })
        .collect()
}

/// Write one row per student. There are as many workshop columns as the
/// largest number of workshops held by a student, and shorter rows are
/// padded with empty cells.
pub fn write_mapping<W: io::Write>(output: W, rows: &[MappingRow]) -> Result<(), Error> {
    let columns = rows.iter().map(|(_, w)| w.len()).max().unwrap_or(0);
    let mut writer = csv::Writer::from_writer(output);
    let header = std::iter::once("student_id".to_owned())
        .chain((1..=columns).map(|i| format!("workshop_id_{i}")))
        .collect::<Vec<_>>();
    writer.write_record(&header)?;
    for (student, workshops) in rows {
        let record = std::iter::once(student.to_string())
            .chain(workshops.iter().map(ToString::to_string))
            .chain(std::iter::repeat_n(String::new(), columns - workshops.len()))
            .collect::<Vec<_>>();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

impl CsvLoader {
    pub fn new(students: &Path, workshops: &Path, mapping: &Path) -> CsvLoader {
        CsvLoader {
            students: students.to_owned(),
            workshops: workshops.to_owned(),
            mapping: mapping.to_owned(),
        }
    }

    pub fn load(&self) -> Result<(Vec<Student>, Vec<Workshop>), Error> {
        let students = read_students(open(&self.students)?).wrap_err_with(|| {
            format!("cannot load students from {}", self.students.display())
        })?;
        let workshops = read_workshops(open(&self.workshops)?).wrap_err_with(|| {
            format!("cannot load workshops from {}", self.workshops.display())
        })?;
        info!(
            students = students.len(),
            workshops = workshops.len(),
            "Loaded cohort"
        );
        Ok((students, workshops))
    }

    pub fn save_mapping(&self, rows: &[MappingRow]) -> Result<(), Error> {
        let file = File::create(&self.mapping)
            .wrap_err_with(|| format!("cannot create {}", self.mapping.display()))?;
        write_mapping(file, rows)
            .wrap_err_with(|| format!("cannot save mapping to {}", self.mapping.display()))?;
        debug!(path = %self.mapping.display(), rows = rows.len(), "Mapping saved");
        Ok(())
    }
}
