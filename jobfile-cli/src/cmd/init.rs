use std::path::{Path, PathBuf};

use anyhow::{Context, Error, bail};
use clap::Args;
use jobfile_config::{CONFIG_FILENAME, DEFAULT_CONFIG};
use log::debug;

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
    /// The directory to write 'bacon.toml' into (default is '$PWD').
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Resolve where `init` writes.
///
/// `DIR` and `-f` are mutually exclusive: `DIR` names a directory that
/// receives a `bacon.toml`, `-f` names the file itself.
fn target_path(config_file: Option<&PathBuf>, dir: Option<&PathBuf>) -> Result<PathBuf, Error> {
    match (config_file, dir) {
        (Some(_), Some(_)) => bail!("pass either a directory or --config-file, not both"),
        (Some(path), None) => Ok(path.clone()),
        (None, Some(dir)) => Ok(dir.join(CONFIG_FILENAME)),
        (None, None) => Ok(std::env::current_dir()
            .context("failed to read current directory")?
            .join(CONFIG_FILENAME)),
    }
}

/// Write the default config file to `path`.
fn write_config(path: &Path, force: bool) -> Result<(), Error> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        );
    }
    debug!(path:% = path.display(), force = force; "writing default config file");
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write '{}'", path.display()))
}

/// Write the shipped job file into a directory or to the config file path.
pub fn init(config_file: Option<&PathBuf>, args: &InitArgs) -> Result<(), Error> {
    let path = target_path(config_file, args.dir.as_ref())?;
    write_config(&path, args.force)?;
    println!("wrote {}", path.display());
    Ok(())
}
