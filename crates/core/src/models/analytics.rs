use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::nav::NavRecord;

/// Where the rate used for a projection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// The configured reference rate (lower, or realized rate unavailable)
    Reference,
    /// The realized rate computed from the NAV history
    Realized,
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateSource::Reference => write!(f, "reference"),
            RateSource::Realized => write!(f, "realized"),
        }
    }
}

/// The annual rate (percent) actually applied when projecting an investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveRate {
    pub rate: f64,
    pub source: RateSource,
}

/// Projected value of every investment at one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Date the values were projected to
    pub as_of: NaiveDate,

    /// Projected value per investment name
    pub values: HashMap<String, f64>,

    /// Sum of all projected values
    pub total: f64,
}

/// Descriptive state of a single investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub name: String,
    pub amount_invested: f64,
    pub reference_rate: f64,
    pub investment_date: NaiveDate,

    /// Number of NAV observations recorded
    pub nav_count: usize,

    /// Latest observation, if any
    pub latest_nav: Option<NavRecord>,

    /// Realized annual rate in percent; `None` when it cannot be derived
    pub performance_rate: Option<f64>,
}

/// A portfolio valuation put against what was invested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub valuation: PortfolioValuation,

    /// Sum of the amounts invested
    pub total_invested: f64,

    /// Projected total minus total invested
    pub gain_loss: f64,

    /// `gain_loss / total_invested * 100`; `None` for an empty portfolio
    pub gain_loss_pct: Option<f64>,
}
