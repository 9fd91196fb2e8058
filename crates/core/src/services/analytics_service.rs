use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::analytics::{InvestmentSummary, ProjectionReport};
use crate::models::investment::Investment;
use crate::models::portfolio::Portfolio;
use crate::services::performance_service::PerformanceService;
use crate::services::valuation_service::ValuationService;

/// Computes portfolio analytics: per-investment summaries and gain/loss
/// of a projection against the amounts invested.
pub struct AnalyticsService {
    performance_service: PerformanceService,
    valuation_service: ValuationService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            performance_service: PerformanceService::new(),
            valuation_service: ValuationService::new(),
        }
    }

    /// Summarize a single investment. Missing data shows up as `None`
    /// rather than as an error.
    pub fn summarize_investment(&self, investment: &Investment) -> InvestmentSummary {
        InvestmentSummary {
            name: investment.name().to_string(),
            amount_invested: investment.amount_invested(),
            reference_rate: investment.reference_rate(),
            investment_date: investment.investment_date(),
            nav_count: investment.nav_history().len(),
            latest_nav: investment.nav_history().latest().copied(),
            performance_rate: self
                .performance_service
                .calculate_rate(investment.nav_history())
                .ok(),
        }
    }

    /// Summaries of every investment, ordered by name.
    pub fn get_portfolio_summary(&self, portfolio: &Portfolio) -> Vec<InvestmentSummary> {
        portfolio
            .sorted_investments()
            .into_iter()
            .map(|investment| self.summarize_investment(investment))
            .collect()
    }

    /// Value the portfolio at `date` and compare it with what was invested.
    pub fn get_projection_report(
        &self,
        portfolio: &Portfolio,
        date: NaiveDate,
    ) -> Result<ProjectionReport, CoreError> {
        let valuation = self.valuation_service.value_at(portfolio, date)?;
        let total_invested = portfolio.total_invested();
        let gain_loss = valuation.total - total_invested;
        let gain_loss_pct = (total_invested > 0.0).then(|| gain_loss / total_invested * 100.0);

        Ok(ProjectionReport {
            valuation,
            total_invested,
            gain_loss,
            gain_loss_pct,
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
