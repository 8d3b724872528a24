use std::path::PathBuf;

use anyhow::{Context, Error};
use check::check;
use clap::{Parser, Subcommand};
use init::{InitArgs, init};
use jobfile_config::Config;
use key::{KeyArgs, key};
use list::list;
use show::{ShowArgs, show};

pub mod check;
pub mod init;
pub mod key;
pub mod list;
pub mod show;

#[derive(Debug, Clone, Parser)]
#[command(about = "Inspect the jobs and keybindings of a bacon.toml file")]
pub struct Cli {
    /// The path to the config file (default is '$PWD/bacon.toml').
    #[arg(
        short = 'f',
        long = "config-file",
        value_name = "PATH",
        required = false,
        global = true
    )]
    pub config_file: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Cmd {
    #[command(about = "Check that the config file is valid")]
    Check,
    #[command(about = "List the jobs and keybindings")]
    List,
    #[command(about = "Show the definition of a job")]
    Show(ShowArgs),
    #[command(about = "Show the job bound to a key")]
    Key(KeyArgs),
    #[command(about = "Write the default config file")]
    Init(InitArgs),
}

/// Load and validate the config file.
fn load_config(config_file: Option<&PathBuf>) -> Result<Config, Error> {
    Config::load(config_file).context("failed to load config file")
}

pub fn handle_args(args: &Cli) -> Result<(), Error> {
    let config_file = args.config_file.as_ref();
    match args.cmd {
        Cmd::Check => {
            check(config_file)?;
        }
        Cmd::List => {
            list(config_file)?;
        }
        Cmd::Show(ref show_args) => {
            show(config_file, show_args)?;
        }
        Cmd::Key(ref key_args) => {
            key(config_file, key_args)?;
        }
        Cmd::Init(ref init_args) => {
            init(config_file, init_args)?;
        }
    }
    Ok(())
}
