//! Parsers for the short string grammars that appear inside a job file.
use winnow::{
    Result,
    combinator::preceded,
    prelude::*,
    stream::AsChar,
    token::{any, take_while},
};

/// The prefix of a job reference e.g. `job:check`.
pub const JOB_REF_PREFIX: &str = "job:";

/// Errors parsing the string fields of a job file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid job reference '{input}', expected 'job:<name>'")]
    JobRef { input: String },
    #[error("invalid key '{input}', expected a single printable character")]
    Key { input: String },
}

/// A job name made of letters, digits, `-` and `_`.
pub fn job_name<'a>(input: &mut &'a str) -> Result<&'a str> {
    take_while(1.., (AsChar::is_alphanum, '-', '_')).parse_next(input)
}

/// A reference to a job by name e.g. `job:clippy-all`.
pub fn job_ref<'a>(input: &mut &'a str) -> Result<&'a str> {
    preceded(JOB_REF_PREFIX, job_name).parse_next(input)
}

/// Whether a character can be bound to a job.
pub fn is_key_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

/// A single keystroke.
pub fn key(input: &mut &str) -> Result<char> {
    any.verify(|c: &char| is_key_char(*c)).parse_next(input)
}

/// Parse a complete job reference, returning the name of the referenced job.
pub fn parse_job_ref(input: &str) -> std::result::Result<&str, Error> {
    job_ref.parse(input).map_err(|_| Error::JobRef {
        input: input.to_string(),
    })
}

/// Parse a complete keybinding key.
pub fn parse_key(input: &str) -> std::result::Result<char, Error> {
    key.parse(input).map_err(|_| Error::Key {
        input: input.to_string(),
    })
}

/// Returns whether the whole input is a valid job name.
pub fn is_valid_job_name(input: &str) -> bool {
    job_name.parse(input).is_ok()
}
