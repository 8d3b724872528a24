use anyhow::Error;
use clap::Parser;
use cmd::{Cli, handle_args};
use env_logger::Env;

mod cmd;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    handle_args(&args)?;
    Ok(())
}
