use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use jobfile_jobs::{Job, JobRef};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use key::Key;

mod key;

/// The default name of the config file.
pub const CONFIG_FILENAME: &str = "bacon.toml";

/// The job file shipped with this repository.
pub const DEFAULT_CONFIG: &str = include_str!("../../bacon.toml");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("couldn't load config file at '{}': {}", .0.display(), .1)]
    MissingConfig(PathBuf, std::io::Error),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {}", format_problems(.0))]
    Invalid(Vec<Problem>),
    #[error("no job named '{0}'")]
    UnknownJob(String),
    #[error("no job bound to key '{0}'")]
    UnboundKey(Key),
}

/// A broken invariant in an otherwise well-formed config file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("default job '{0}' is not declared in [jobs]")]
    MissingDefaultJob(String),
    #[error("keybinding '{key}' refers to undeclared job '{job}'")]
    DanglingKeybinding { key: Key, job: String },
    #[error("job '{0}' has an empty command")]
    EmptyCommand(String),
    #[error("job name '{0}' may only contain letters, digits, '-' and '_'")]
    InvalidJobName(String),
}

fn format_problems(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A job as it is declared in the config file. The name is its table key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// The program to run followed by its arguments.
    pub command: Vec<String>,
    /// Whether the job's output is only meaningful with stdout attached.
    #[serde(default)]
    pub need_stdout: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_warnings: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_failures: bool,
    /// Extra paths to watch when this job is active.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watch: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl JobSpec {
    fn to_job(&self, name: &str) -> Job {
        Job {
            name: name.to_string(),
            command: self.command.clone(),
            need_stdout: self.need_stdout,
            allow_warnings: self.allow_warnings,
            allow_failures: self.allow_failures,
            watch: self.watch.clone(),
            envs: self.env.clone(),
        }
    }
}

/// The jobs and keybindings consumed by the background checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The job that runs when no other job has been selected.
    #[serde(default = "default_default_job")]
    pub default_job: String,
    #[serde(default)]
    pub jobs: BTreeMap<String, JobSpec>,
    #[serde(default)]
    pub keybindings: BTreeMap<Key, JobRef>,
}

impl Config {
    /// Read and validate the job file at `path`.
    fn load_inner(path: impl AsRef<Path>) -> Result<Self, Error> {
        let full_path = std::path::absolute(path).map_err(Error::IO)?;
        debug!(path:% = full_path.display(); "loading config file");
        let contents = std::fs::read_to_string(&full_path)
            .map_err(|err| Error::MissingConfig(full_path, err))?;
        Self::parse(&contents)
    }

    /// Where the job file lives: the `-f` override, or `bacon.toml` in the
    /// working directory.
    fn get_path(maybe_override: Option<&PathBuf>) -> Result<PathBuf, Error> {
        if let Some(ref relpath) = maybe_override {
            std::path::absolute(relpath).map_err(Error::IO)
        } else {
            std::env::current_dir()
                .map_err(Error::IO)
                .map(|p| p.join(CONFIG_FILENAME))
        }
    }

    /// Load the job file, failing on any unresolved job reference.
    pub fn load(path_override: Option<&PathBuf>) -> Result<Self, Error> {
        let path = Self::get_path(path_override)?;
        Self::load_inner(path)
    }

    /// Parse and validate the contents of a config file.
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(contents).map_err(Error::Parse)?;
        debug!(
            jobs = config.jobs.len(),
            keybindings = config.keybindings.len();
            "parsed config file"
        );
        config.validate()?;
        Ok(config)
    }

    /// The config file shipped with this repository.
    pub fn shipped() -> Result<Self, Error> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Returns every broken invariant in this config.
    ///
    /// Problems are reported in a stable order: the default job first, then
    /// the jobs and keybindings sorted by name.
    pub fn problems(&self) -> Vec<Problem> {
        let mut problems = Vec::new();
        if !self.jobs.contains_key(&self.default_job) {
            problems.push(Problem::MissingDefaultJob(self.default_job.clone()));
        }
        for (name, spec) in self.jobs.iter() {
            if !jobfile_parser::is_valid_job_name(name) {
                problems.push(Problem::InvalidJobName(name.clone()));
            }
            if spec.command.is_empty() {
                problems.push(Problem::EmptyCommand(name.clone()));
            }
        }
        for (key, job_ref) in self.keybindings.iter() {
            if !self.jobs.contains_key(job_ref.name()) {
                problems.push(Problem::DanglingKeybinding {
                    key: *key,
                    job: job_ref.name().to_string(),
                });
            }
        }
        problems
    }

    /// Check the invariants of this config.
    pub fn validate(&self) -> Result<(), Error> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }
        for problem in problems.iter() {
            warn!("{problem}");
        }
        Err(Error::Invalid(problems))
    }

    /// Resolve a job by name.
    pub fn job(&self, name: &str) -> Result<Job, Error> {
        self.jobs
            .get(name)
            .map(|spec| spec.to_job(name))
            .ok_or_else(|| Error::UnknownJob(name.to_string()))
    }

    /// Resolve the default job.
    pub fn default_job(&self) -> Result<Job, Error> {
        self.job(&self.default_job)
    }

    /// Returns the job reference bound to a key.
    pub fn binding(&self, key: Key) -> Result<&JobRef, Error> {
        self.keybindings.get(&key).ok_or(Error::UnboundKey(key))
    }

    /// Resolve the job bound to a key.
    pub fn job_for_key(&self, key: Key) -> Result<Job, Error> {
        let job_ref = self.binding(key)?;
        self.job(job_ref.name())
    }

    /// Serialize this config back to TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string(self).map_err(Error::Serialize)
    }
}

fn default_default_job() -> String {
    "check".to_string()
}
