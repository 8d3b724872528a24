use std::path::PathBuf;

use anyhow::Error;
use clap::Args;
use jobfile_config::{Config, Key};
use log::debug;

use super::{load_config, show};

#[derive(Debug, Clone, Args)]
pub struct KeyArgs {
    /// The keystroke to resolve.
    pub key: Key,
}

/// Render the binding for a key followed by the job it refers to.
fn render(config: &Config, key: Key) -> Result<String, Error> {
    let job_ref = config.binding(key)?;
    let job = config.job(job_ref.name())?;
    Ok(format!("{key} -> {job_ref}\n{}", show::render(&job)))
}

/// Show the job bound to a key.
pub fn key(config_file: Option<&PathBuf>, args: &KeyArgs) -> Result<(), Error> {
    let config = load_config(config_file)?;
    debug!(key:% = args.key; "resolving keybinding");
    println!("{}", render(&config, args.key)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn resolves_shipped_strict_clippy_binding() {
        let config = Config::shipped().unwrap();
        let key: Key = "s".parse().unwrap();
        let expected = expect![[r#"
            s -> job:clippy-strict
            job: clippy-strict
            command: cargo clippy --all-targets --color always -- -W clippy::unwrap_used -W clippy::expect_used
            need_stdout: false
            allow_warnings: false
            allow_failures: false"#]];
        expected.assert_eq(&render(&config, key).unwrap());
    }

    #[test]
    fn dangling_binding_names_the_missing_job() {
        let config: Config = toml::from_str(indoc::indoc! {r#"
            [jobs.check]
            command = ["cargo", "check"]

            [keybindings]
            x = "job:clippy"
        "#})
        .unwrap();
        let key: Key = "x".parse().unwrap();
        let err = render(&config, key).unwrap_err();
        assert_eq!(err.to_string(), "no job named 'clippy'");
    }

    #[test]
    fn unbound_key_is_an_error() {
        let config = Config::shipped().unwrap();
        let key: Key = "z".parse().unwrap();
        let err = render(&config, key).unwrap_err();
        assert_eq!(err.to_string(), "no job bound to key 'z'");
    }
}
