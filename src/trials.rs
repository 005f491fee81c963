use crate::algos::{Algo, BySlot, Greedy};
use crate::config::{AlgorithmKind, SolverConfig};
use crate::model::{Assignments, Cohort};
use crate::stats;
use eyre::{Error, ensure};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

#[derive(Clone, Debug)]
pub struct Trial<'c> {
    /// Seed the trial was shuffled with, `None` for the empty baseline.
    pub seed: Option<u64>,
    pub score: usize,
    pub assignments: Assignments<'c>,
}

impl<'c> Trial<'c> {
    fn baseline(cohort: &'c Cohort) -> Trial<'c> {
        Trial {
            seed: None,
            score: 0,
            assignments: Assignments::new(cohort),
        }
    }
}

/// Shuffle students and workshops with `seed`, then assign workshops
/// starting from an empty state. The same seed always gives the same
/// result on the same cohort.
#[instrument(skip(cohort, solver))]
pub fn run_trial<'c>(
    cohort: &'c Cohort,
    solver: &SolverConfig,
    seed: u64,
) -> Result<Trial<'c>, Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut students = cohort.all_students();
    students.shuffle(&mut rng);
    let mut workshops = cohort.all_workshops();
    workshops.shuffle(&mut rng);
    let mut assignments = Assignments::new(cohort);
    {
        let mut algo: Box<dyn Algo + '_> = match solver.algorithm {
            AlgorithmKind::Greedy => Box::new(Greedy::new(
                &mut assignments,
                students,
                workshops,
                solver.rounds,
            )),
            AlgorithmKind::BySlot => Box::new(BySlot::new(
                &mut assignments,
                students,
                workshops,
                solver.rounds,
            )),
        };
        algo.assign()?;
    }
    let score = stats::score(&assignments);
    debug!(score, "Trial complete");
    Ok(Trial {
        seed: Some(seed),
        score,
        assignments,
    })
}

/// Run `solver.runs` trials with consecutive seeds and keep the first one
/// with the highest score. If no trial scores above zero, the result is
/// the empty assignment.
#[instrument(skip_all, fields(runs = solver.runs, algorithm = ?solver.algorithm))]
pub fn best_trial<'c>(cohort: &'c Cohort, solver: &SolverConfig) -> Result<Trial<'c>, Error> {
    ensure!(solver.rounds > 0, "the number of rounds must be positive");
    let mut best = Trial::baseline(cohort);
    for run in 0..solver.runs as u64 {
        let trial = run_trial(cohort, solver, solver.seed.wrapping_add(run))?;
        if trial.score > best.score {
            info!(
                seed = trial.seed,
                score = trial.score,
                previous = best.score,
                "Found better trial"
            );
            best = trial;
        } else {
            debug!(
                seed = trial.seed,
                score = trial.score,
                best = best.score,
                "Discarding trial"
            );
        }
    }
    Ok(best)
}
