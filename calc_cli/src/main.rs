//! # Tally CLI Application
//!
//! Terminal front end for the calculator.
//!
//! - `calc_cli --keys "5+3="` evaluates a key script and prints the display
//! - `echo "6*7=" | calc_cli` evaluates one script per input line
//! - `calc_cli` on a terminal opens the interactive keypad (Ratatui)

mod batch;
mod tui;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Tally four-function calculator")]
struct Cli {
    /// Key script to evaluate, e.g. "3.14*2=" (C clear, E clear entry, < backspace)
    #[arg(short, long)]
    keys: Option<String>,

    /// Print results as JSON (for scripts and LLM/API use)
    #[arg(long)]
    json: bool,

    /// Print the display after every key
    #[arg(long)]
    trace: bool,

    /// Log filter, overrides RUST_LOG (e.g. "debug", "calc_core=trace")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = cli.keys.is_none() && io::stdin().is_terminal();
    // Log lines on stderr would tear the TUI, so it stays quiet unless asked
    init_tracing(cli.log_level.as_deref(), if interactive { "off" } else { "warn" });

    if let Some(script) = &cli.keys {
        let report = batch::evaluate(script)?;
        print_report(&report, &cli)?;
        return Ok(());
    }

    if interactive {
        return tui::run();
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let report = batch::evaluate(&line).with_context(|| format!("script '{}'", line.trim()))?;
        print_report(&report, &cli)?;
    }
    Ok(())
}

fn init_tracing(filter_arg: Option<&str>, default_filter: &str) {
    let filter = match filter_arg {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_report(report: &batch::BatchReport, cli: &Cli) -> Result<()> {
    let mut out = io::stdout().lock();

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    if cli.trace {
        for step in &report.steps {
            writeln!(out, "{:>3}  {}", step.input.label(), step.display)?;
        }
        writeln!(out, "{}", "-".repeat(24))?;
    }
    writeln!(out, "{}", report.display)?;
    Ok(())
}
