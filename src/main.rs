use anyhow::Error;
use clap::Parser;

use identikon_adapters::init::initialize_app;

mod cli;
use cli::{Cli, SubCommand};

fn main() -> Result<(), Error> {
    let opts: Cli = Cli::parse();
    let config = initialize_app(opts.log_level)?;

    match opts.subcmd {
        SubCommand::Generate(cmd) => cmd.execute(&config)?,
        SubCommand::Describe(cmd) => cmd.execute()?,
    };
    Ok(())
}
