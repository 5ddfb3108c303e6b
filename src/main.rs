mod cli;
mod config;
mod logging;
mod output;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use solar_daylight::{compute_sun_times, summarize, HourFormat};
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::config::RunConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let config = base.merge(cli.overrides());
    let params = config.to_params().context("invalid run parameters")?;
    info!(
        title = config.title(),
        year = params.year(),
        latitude = params.latitude,
        longitude = params.longitude,
        "computing sun times"
    );

    let records = compute_sun_times(&params).context("computing sun times")?;
    let hour_format = if cli.twenty_four_hour {
        HourFormat::TwentyFour
    } else {
        HourFormat::Twelve
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            for record in &records {
                writeln!(out, "{}", output::render_line(config.title(), record, hour_format))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
    }

    if cli.summary {
        if let Some(summary) = summarize(&records) {
            for line in output::render_summary(&summary, hour_format) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
