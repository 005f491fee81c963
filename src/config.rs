use clap::ValueEnum;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "wsolver.toml";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// All workshops are candidates in every round
    #[default]
    Greedy,
    /// One round per slot, with only the workshops of that slot
    BySlot,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub solver: SolverConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub students: PathBuf,
    pub workshops: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            students: PathBuf::from("data/students.csv"),
            workshops: PathBuf::from("data/workshops.csv"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub mapping: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            mapping: PathBuf::from("data/mapping.csv"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub algorithm: AlgorithmKind,
    /// Number of workshops wanted for every student.
    pub rounds: usize,
    /// Number of shuffled trials, the best one being kept.
    pub runs: usize,
    /// Seed of the first trial, the following ones using the next seeds.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            algorithm: AlgorithmKind::Greedy,
            rounds: 3,
            runs: 10,
            seed: 0,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Load the given configuration file, or the default one if it exists.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config, Error> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}
