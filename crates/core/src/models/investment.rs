use chrono::NaiveDate;
use serde::Serialize;

use super::nav::{NavHistory, NavRecord};
use crate::errors::CoreError;

/// Lowest accepted reference rate: a total loss.
pub const MIN_REFERENCE_RATE: f64 = -100.0;

/// A single investment tracked in the portfolio.
///
/// Identity fields are fixed at creation. The NAV history is the only
/// mutable state and is reachable only through [`Investment::add_nav`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    name: String,
    amount_invested: f64,
    /// Annual reference rate in percent (e.g. `8.0` for 8%).
    reference_rate: f64,
    investment_date: NaiveDate,
    nav_history: NavHistory,
}

impl Investment {
    /// Create an investment with an empty history.
    ///
    /// Fails with `InvalidAmount` unless `amount_invested > 0`, and with
    /// `InvalidRate` for a non-finite rate or one below -100%.
    pub fn new(
        name: impl Into<String>,
        amount_invested: f64,
        reference_rate: f64,
        investment_date: NaiveDate,
    ) -> Result<Self, CoreError> {
        if !(amount_invested > 0.0 && amount_invested.is_finite()) {
            return Err(CoreError::InvalidAmount(amount_invested));
        }
        if !reference_rate.is_finite() || reference_rate < MIN_REFERENCE_RATE {
            return Err(CoreError::InvalidRate(reference_rate));
        }
        Ok(Self {
            name: name.into(),
            amount_invested,
            reference_rate,
            investment_date,
            nav_history: NavHistory::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount_invested(&self) -> f64 {
        self.amount_invested
    }

    pub fn reference_rate(&self) -> f64 {
        self.reference_rate
    }

    pub fn investment_date(&self) -> NaiveDate {
        self.investment_date
    }

    pub fn nav_history(&self) -> &NavHistory {
        &self.nav_history
    }

    /// Record a NAV observation, keeping the history sorted by date.
    pub fn add_nav(&mut self, date: NaiveDate, value: f64) -> Result<(), CoreError> {
        self.nav_history.append(date, value)
    }

    /// Latest known NAV, or `EmptyHistory` when nothing was recorded yet.
    pub fn latest_nav(&self) -> Result<&NavRecord, CoreError> {
        self.nav_history
            .latest()
            .ok_or_else(|| CoreError::EmptyHistory(self.name.clone()))
    }
}
