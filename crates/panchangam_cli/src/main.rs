mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use panchangam_config::PanchangamConfig;

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
    let config = match &cli.config {
        Some(path) => PanchangamConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PanchangamConfig::discover().context("failed to load config")?,
    };

    match cli.command {
        Command::Show(args) => commands::show(args, &config),
        Command::Zones(args) => commands::zones(args),
        Command::NewMoon(args) => commands::new_moon(args, &config),
    }
}
