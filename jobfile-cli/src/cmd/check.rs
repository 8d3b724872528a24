use std::path::PathBuf;

use anyhow::Error;
use jobfile_config::Config;

use super::load_config;

/// Summarize a valid config in one line.
fn summary(config: &Config) -> String {
    format!(
        "ok: {} jobs, {} keybindings, default job '{}'",
        config.jobs.len(),
        config.keybindings.len(),
        config.default_job
    )
}

/// Check that the config file parses and that its references resolve.
pub fn check(config_file: Option<&PathBuf>) -> Result<(), Error> {
    let config = load_config(config_file)?;
    println!("{}", summary(&config));
    Ok(())
}
