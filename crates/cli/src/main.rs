//! NAV projection CLI
//!
//! Summaries and conservative forward projections of a portfolio

mod demo;
mod loader;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nav_projection_core::PortfolioTracker;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navproj", version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display currency code, overriding the portfolio file
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize and project the built-in sample portfolio
    Demo {
        /// Projection date (YYYY-MM-DD)
        #[arg(short, long, default_value = demo::DEMO_PROJECTION_DATE)]
        date: String,
    },
    /// Summarize every investment of a portfolio file
    Summary {
        /// Path to the portfolio JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Project a portfolio file to a future date
    Project {
        /// Path to the portfolio JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Projection date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli);
    if let Err(e) = &result {
        log::error!("navproj failed: {e:#}");
    }
    result
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Demo { date } => {
            let mut tracker = demo::demo_portfolio().context("Failed to build demo portfolio")?;
            apply_currency(&mut tracker, cli);
            print_summary(&tracker, cli.json)?;
            print_projection(&tracker, date, cli.json)
        }
        Commands::Summary { file } => {
            let mut tracker = loader::load_portfolio(file)?;
            apply_currency(&mut tracker, cli);
            print_summary(&tracker, cli.json)
        }
        Commands::Project { file, date } => {
            let mut tracker = loader::load_portfolio(file)?;
            apply_currency(&mut tracker, cli);
            print_projection(&tracker, date, cli.json)
        }
    }
}

fn apply_currency(tracker: &mut PortfolioTracker, cli: &Cli) {
    if let Some(currency) = &cli.currency {
        tracker.set_currency(currency.as_str());
    }
}

fn print_summary(tracker: &PortfolioTracker, json: bool) -> Result<()> {
    let summaries = tracker.get_summary();
    if json {
        print_json(&summaries)
    } else {
        let text = report::render_summary(&summaries, &tracker.settings().currency)
            .context("Failed to render summary")?;
        print!("{text}");
        Ok(())
    }
}

fn print_projection(tracker: &PortfolioTracker, date: &str, json: bool) -> Result<()> {
    let projection = tracker
        .get_projection_report(date)
        .with_context(|| format!("Failed to project portfolio to {date}"))?;
    if json {
        print_json(&projection)
    } else {
        let text = report::render_projection(&projection, &tracker.settings().currency)
            .context("Failed to render projection")?;
        print!("{text}");
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
