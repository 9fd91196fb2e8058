//! Load a portfolio description from JSON into a `PortfolioTracker`

use anyhow::{Context, Result};
use nav_projection_core::models::settings::Settings;
use nav_projection_core::PortfolioTracker;
use serde::Deserialize;
use std::path::Path;

/// Raw file layout. Dates stay as text so the tracker validates them.
#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    investments: Vec<InvestmentEntry>,
}

#[derive(Debug, Deserialize)]
struct InvestmentEntry {
    name: String,
    amount_invested: f64,
    reference_rate: f64,
    investment_date: String,
    #[serde(default)]
    navs: Vec<NavEntry>,
}

#[derive(Debug, Deserialize)]
struct NavEntry {
    date: String,
    value: f64,
}

/// Load a portfolio from a JSON file.
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<PortfolioTracker> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read portfolio file: {}", path.display()))?;
    load_portfolio_from_str(&content)
        .with_context(|| format!("Failed to load portfolio file: {}", path.display()))
}

/// Load a portfolio from JSON text. Every investment and NAV goes through
/// the tracker, so the first invalid entry aborts loading.
pub fn load_portfolio_from_str(content: &str) -> Result<PortfolioTracker> {
    let file: PortfolioFile = serde_json::from_str(content).context("Invalid portfolio JSON")?;

    let mut tracker = PortfolioTracker::with_settings(Settings::default());
    if let Some(currency) = file.currency {
        tracker.set_currency(currency);
    }

    for entry in file.investments {
        tracker
            .add_investment(
                &entry.name,
                entry.amount_invested,
                entry.reference_rate,
                &entry.investment_date,
            )
            .with_context(|| format!("Invalid investment '{}'", entry.name))?;

        for nav in entry.navs {
            tracker
                .add_nav(&entry.name, &nav.date, nav.value)
                .with_context(|| format!("Invalid NAV for '{}' on {}", entry.name, nav.date))?;
        }
    }

    log::debug!("Loaded {} investments", tracker.portfolio().len());
    Ok(tracker)
}
