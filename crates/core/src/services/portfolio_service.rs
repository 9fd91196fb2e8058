use chrono::NaiveDate;
use log::{debug, info};

use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::nav::NavRecord;
use crate::models::portfolio::Portfolio;

/// Manages the investments of a portfolio and their NAV histories.
///
/// Pure business logic — no I/O. Every failed call leaves the portfolio untouched.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add a new investment to the portfolio.
    /// Names are unique; an existing investment is never replaced.
    pub fn add_investment(
        &self,
        portfolio: &mut Portfolio,
        investment: Investment,
    ) -> Result<(), CoreError> {
        if portfolio.contains(investment.name()) {
            return Err(CoreError::DuplicateInvestment(investment.name().to_string()));
        }
        info!(
            "Added investment {} ({} invested, reference rate {}%)",
            investment.name(),
            investment.amount_invested(),
            investment.reference_rate()
        );
        portfolio.insert(investment);
        Ok(())
    }

    /// Record a NAV observation for an existing investment.
    pub fn add_nav(
        &self,
        portfolio: &mut Portfolio,
        name: &str,
        date: NaiveDate,
        value: f64,
    ) -> Result<(), CoreError> {
        let investment = portfolio
            .get_mut(name)
            .ok_or_else(|| CoreError::UnknownInvestment(name.to_string()))?;
        investment.add_nav(date, value)?;
        debug!(
            "Recorded NAV {value} on {date} for {name} ({} records)",
            investment.nav_history().len()
        );
        Ok(())
    }

    /// Look up an investment by name.
    pub fn get_investment<'a>(
        &self,
        portfolio: &'a Portfolio,
        name: &str,
    ) -> Result<&'a Investment, CoreError> {
        portfolio
            .get(name)
            .ok_or_else(|| CoreError::UnknownInvestment(name.to_string()))
    }

    /// Latest NAV of a named investment.
    pub fn get_latest_nav(&self, portfolio: &Portfolio, name: &str) -> Result<NavRecord, CoreError> {
        self.get_investment(portfolio, name)?.latest_nav().copied()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
