use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A job resolved from a job file, ready to be handed to whatever runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    /// The program followed by its arguments.
    pub command: Vec<String>,
    pub need_stdout: bool,
    pub allow_warnings: bool,
    pub allow_failures: bool,
    pub watch: Vec<String>,
    pub envs: BTreeMap<String, String>,
}

impl Job {
    /// Returns the program this job invokes, if the command isn't empty.
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Returns the arguments passed to the program.
    pub fn arguments(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    /// Returns the command as a single space-separated line.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// A reference to a job by name, written as `job:<name>` in a job file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobRef {
    name: String,
}

impl JobRef {
    /// Returns the name of the referenced job.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for JobRef {
    type Err = jobfile_parser::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = jobfile_parser::parse_job_ref(s)?;
        Ok(JobRef {
            name: name.to_string(),
        })
    }
}

impl TryFrom<String> for JobRef {
    type Error = jobfile_parser::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JobRef> for String {
    fn from(job_ref: JobRef) -> Self {
        job_ref.to_string()
    }
}

impl fmt::Display for JobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", jobfile_parser::JOB_REF_PREFIX, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(command: &[&str]) -> Job {
        Job {
            name: "check".to_string(),
            command: command.iter().map(|s| s.to_string()).collect(),
            need_stdout: false,
            allow_warnings: false,
            allow_failures: false,
            watch: vec![],
            envs: BTreeMap::new(),
        }
    }

    #[test]
    fn splits_program_and_arguments() {
        let job = job(&["cargo", "check", "--color", "always"]);
        assert_eq!(job.program(), Some("cargo"));
        assert_eq!(job.arguments(), ["check", "--color", "always"]);
        assert_eq!(job.command_line(), "cargo check --color always");
    }

    #[test]
    fn empty_command_has_no_program() {
        let job = job(&[]);
        assert_eq!(job.program(), None);
        assert!(job.arguments().is_empty());
    }

    #[test]
    fn parses_and_displays_job_ref() {
        let job_ref: JobRef = "job:clippy-all".parse().unwrap();
        assert_eq!(job_ref.name(), "clippy-all");
        assert_eq!(job_ref.to_string(), "job:clippy-all");
    }

    #[test]
    fn rejects_bare_job_name() {
        assert!("clippy-all".parse::<JobRef>().is_err());
    }

    #[derive(Debug, Deserialize, Serialize)]
    struct Binding {
        target: JobRef,
    }

    #[test]
    fn deserializes_job_ref_from_string() {
        let binding: Binding = toml::from_str(r#"target = "job:test""#).unwrap();
        assert_eq!(binding.target.name(), "test");
        let out = toml::to_string(&binding).unwrap();
        assert_eq!(out.trim(), r#"target = "job:test""#);
    }

    #[test]
    fn deserialize_reports_malformed_job_ref() {
        let err = toml::from_str::<Binding>(r#"target = "test""#).unwrap_err();
        assert!(err.to_string().contains("invalid job reference 'test'"));
    }
}
