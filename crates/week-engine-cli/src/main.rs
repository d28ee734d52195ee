mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Output;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let template = match &cli.command {
        Command::Format(args) => args.template.clone(),
        _ => None,
    };
    let options = config::resolve(cli.config.as_deref(), cli.first_day, template)?;
    let out = Output { json: cli.json };

    match cli.command {
        Command::Key(args) => commands::key(args, &options, out),
        Command::Lookup(args) => commands::lookup(args, &options, out),
        Command::Align(args) => commands::align(args, &options, out),
        Command::Format(args) => commands::format(args, &options, out),
        Command::FirstWeek(args) => commands::first_week(args, &options, out),
        Command::Weeks(args) => commands::weeks(args, &options, out),
        Command::CrossYear(args) => commands::cross_year(args, &options, out),
    }
}
