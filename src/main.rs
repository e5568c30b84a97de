mod cli;
mod config;
mod convert;
mod day_cmd;
mod invite_cmd;
mod logging;
mod month_cmd;
mod render;
mod year_cmd;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let year = convert::resolve_year(&config, cli.year);
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Month(args) => month_cmd::run(&config, year, args, &mut out),
        Command::Year(args) => year_cmd::run(&config, year, args, &mut out),
        Command::Day(args) => day_cmd::run(&config, year, args, &mut out),
        Command::Invite(args) => invite_cmd::run(&config, year, args, &mut out),
    }
}
