use crate::config::{AlgorithmKind, Config};
use crate::loaders::CsvLoader;
use crate::model::Cohort;
use clap::{ArgAction, Parser};
use eyre::Error;
use std::path::PathBuf;
use tracing::Level;

mod algos;
mod checks;
mod config;
mod display;
mod loaders;
mod model;
mod remap;
mod stats;
mod trials;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of wsolver.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Do not write the mapping file
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Set verbosity level (repeat for more)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    /// Path of the students table
    #[arg(long, value_name = "FILE")]
    students: Option<PathBuf>,
    /// Path of the workshops table
    #[arg(long, value_name = "FILE")]
    workshops: Option<PathBuf>,
    /// Path where the mapping is written
    #[arg(long, value_name = "FILE")]
    mapping: Option<PathBuf>,
    /// Number of shuffled trials
    #[arg(long)]
    runs: Option<usize>,
    /// Number of workshops wanted for every student
    #[arg(long)]
    rounds: Option<usize>,
    /// Seed of the first trial
    #[arg(long)]
    seed: Option<u64>,
    /// Assignment algorithm
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmKind>,
    /// Display the participants of every workshop
    #[arg(long)]
    details: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(students) = &self.students {
            config.input.students.clone_from(students);
        }
        if let Some(workshops) = &self.workshops {
            config.input.workshops.clone_from(workshops);
        }
        if let Some(mapping) = &self.mapping {
            config.output.mapping.clone_from(mapping);
        }
        if let Some(runs) = self.runs {
            config.solver.runs = runs;
        }
        if let Some(rounds) = self.rounds {
            config.solver.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.solver.seed = seed;
        }
        if let Some(algorithm) = self.algorithm {
            config.solver.algorithm = algorithm;
        }
    }
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let mut config = Config::load_or_default(args.config.as_deref())?;
    args.apply_to(&mut config);
    let loader = CsvLoader::new(
        &config.input.students,
        &config.input.workshops,
        &config.output.mapping,
    );
    let (original_students, original_workshops) = loader.load()?;
    let (mut students, mut workshops) = (original_students.clone(), original_workshops.clone());
    // Work with normalized values (students and workshops starting at 0 and without gaps)
    remap::remap(&mut students, &mut workshops)?;
    let cohort = Cohort::new(students, workshops);
    let best = trials::best_trial(&cohort, &config.solver)?;
    let assignments = &best.assignments;
    checks::check_constraints(assignments, config.solver.rounds)?;
    if !args.dry_run {
        let rows = assignments
            .all_students()
            .into_iter()
            .map(|s| {
                (
                    original_students[s.0].id.0,
                    assignments
                        .workshops_for(s)
                        .iter()
                        .map(|w| original_workshops[w.0].id.0)
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();
        loader.save_mapping(&rows)?;
    }
    if args.details {
        display::display_details(assignments, &original_students);
    }
    display::display_stats(assignments, config.solver.rounds);
    display::display_loads(assignments);
    display::display_empty(assignments);
    checks::check_coverage(assignments, config.solver.rounds);
    Ok(())
}
