use std::path::PathBuf;

use anyhow::Error;
use jobfile_config::Config;

use super::load_config;

/// Render one line per job followed by the keybindings.
///
/// The default job is marked with a `*`.
fn render(config: &Config) -> String {
    let width = config.jobs.keys().map(|name| name.len()).max().unwrap_or(0);
    let mut lines = Vec::new();
    for (name, spec) in config.jobs.iter() {
        let marker = if *name == config.default_job { '*' } else { ' ' };
        lines.push(format!("{marker} {name:<width$}  {}", spec.command.join(" ")));
    }
    if !config.keybindings.is_empty() {
        lines.push(String::new());
        for (key, job_ref) in config.keybindings.iter() {
            lines.push(format!("{key} -> {job_ref}"));
        }
    }
    lines.join("\n")
}

/// List the jobs and keybindings in the config file.
pub fn list(config_file: Option<&PathBuf>) -> Result<(), Error> {
    let config = load_config(config_file)?;
    println!("{}", render(&config));
    Ok(())
}
