use std::path::PathBuf;

use anyhow::Error;
use clap::Args;
use jobfile_jobs::Job;

use super::load_config;

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// The name of the job to show.
    pub job: String,
}

/// Render a job's command and flags.
pub(crate) fn render(job: &Job) -> String {
    let mut lines = vec![
        format!("job: {}", job.name),
        format!("command: {}", job.command_line()),
        format!("need_stdout: {}", job.need_stdout),
        format!("allow_warnings: {}", job.allow_warnings),
        format!("allow_failures: {}", job.allow_failures),
    ];
    if !job.watch.is_empty() {
        lines.push(format!("watch: {}", job.watch.join(", ")));
    }
    for (name, value) in job.envs.iter() {
        lines.push(format!("env: {name}={value}"));
    }
    lines.join("\n")
}

/// Show the definition of a single job.
pub fn show(config_file: Option<&PathBuf>, args: &ShowArgs) -> Result<(), Error> {
    let config = load_config(config_file)?;
    let job = config.job(&args.job)?;
    println!("{}", render(&job));
    Ok(())
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use jobfile_config::Config;

    use super::*;

    #[test]
    fn shows_shipped_run_job() {
        let config = Config::shipped().unwrap();
        let job = config.job("run").unwrap();
        let expected = expect![[r#"
            job: run
            command: cargo run --color always
            need_stdout: true
            allow_warnings: true
            allow_failures: false"#]];
        expected.assert_eq(&render(&job));
    }

    #[test]
    fn shows_watch_and_env() {
        let input = indoc::indoc! {r#"
            [jobs.check]
            command = ["cargo", "check"]
            watch = ["benches", "fixtures"]
            env = { CARGO_TERM_COLOR = "always" }
        "#};
        let config = Config::parse(input).unwrap();
        let job = config.job("check").unwrap();
        let expected = expect![[r#"
            job: check
            command: cargo check
            need_stdout: false
            allow_warnings: false
            allow_failures: false
            watch: benches, fixtures
            env: CARGO_TERM_COLOR=always"#]];
        expected.assert_eq(&render(&job));
    }
}
