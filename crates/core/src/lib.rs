pub mod dates;
pub mod errors;
pub mod models;
pub mod services;

use models::{
    analytics::{EffectiveRate, InvestmentSummary, PortfolioValuation, ProjectionReport},
    investment::Investment,
    nav::NavRecord,
    portfolio::Portfolio,
    settings::Settings,
};
use services::{
    analytics_service::AnalyticsService, performance_service::PerformanceService,
    portfolio_service::PortfolioService, projection_service::ProjectionService,
    valuation_service::ValuationService,
};

use dates::parse_date;
use errors::CoreError;

/// Main entry point for the NAV projection core library.
/// Holds the portfolio state and all services needed to operate on it.
///
/// Dates cross this boundary as `YYYY-MM-DD` text and are rejected with
/// `CoreError::InvalidDate` when they do not parse.
#[must_use]
pub struct PortfolioTracker {
    portfolio: Portfolio,
    portfolio_service: PortfolioService,
    performance_service: PerformanceService,
    projection_service: ProjectionService,
    valuation_service: ValuationService,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("investments", &self.portfolio.len())
            .field("settings", &self.portfolio.settings)
            .finish()
    }
}

impl Default for PortfolioTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioTracker {
    /// Create a tracker with an empty portfolio and default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a tracker with an empty portfolio and the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            portfolio: Portfolio::with_settings(settings),
            portfolio_service: PortfolioService::new(),
            performance_service: PerformanceService::new(),
            projection_service: ProjectionService::new(),
            valuation_service: ValuationService::new(),
            analytics_service: AnalyticsService::new(),
        }
    }

    // ── Investments & NAV history ───────────────────────────────────

    /// Add an investment with an empty NAV history.
    /// `reference_rate` is an annual percentage (e.g. `8.0` for 8%).
    pub fn add_investment(
        &mut self,
        name: &str,
        amount: f64,
        reference_rate: f64,
        investment_date: &str,
    ) -> Result<(), CoreError> {
        let date = parse_date(investment_date)?;
        let investment = Investment::new(name, amount, reference_rate, date)?;
        self.portfolio_service
            .add_investment(&mut self.portfolio, investment)
    }

    /// Record a NAV observation for an existing investment.
    pub fn add_nav(&mut self, investment_name: &str, date: &str, value: f64) -> Result<(), CoreError> {
        let date = parse_date(date)?;
        self.portfolio_service
            .add_nav(&mut self.portfolio, investment_name, date, value)
    }

    /// Latest recorded NAV of an investment.
    pub fn get_latest_nav(&self, investment_name: &str) -> Result<NavRecord, CoreError> {
        self.portfolio_service
            .get_latest_nav(&self.portfolio, investment_name)
    }

    /// Look up an investment by name.
    pub fn get_investment(&self, investment_name: &str) -> Result<&Investment, CoreError> {
        self.portfolio_service
            .get_investment(&self.portfolio, investment_name)
    }

    /// Investment names in ascending order.
    #[must_use]
    pub fn investment_names(&self) -> Vec<&str> {
        self.portfolio.names()
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    // ── Rates & projections ─────────────────────────────────────────

    /// Realized annual rate (percent) from the first and last NAV.
    pub fn calculate_performance_rate(&self, investment_name: &str) -> Result<f64, CoreError> {
        let investment = self.get_investment(investment_name)?;
        self.performance_service
            .calculate_rate(investment.nav_history())
    }

    /// Rate the projection of an investment would use, and its source.
    pub fn get_effective_rate(&self, investment_name: &str) -> Result<EffectiveRate, CoreError> {
        let investment = self.get_investment(investment_name)?;
        Ok(self.projection_service.effective_rate(investment))
    }

    /// Projected value of one investment at `date`.
    pub fn project_nav(&self, investment_name: &str, date: &str) -> Result<f64, CoreError> {
        let investment = self.get_investment(investment_name)?;
        let date = parse_date(date)?;
        self.projection_service.project(investment, date)
    }

    /// Projected value of every investment at `date` and their sum.
    pub fn get_portfolio_value(&self, date: &str) -> Result<PortfolioValuation, CoreError> {
        let date = parse_date(date)?;
        self.valuation_service.value_at(&self.portfolio, date)
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Per-investment summary, ordered by name.
    #[must_use]
    pub fn get_summary(&self) -> Vec<InvestmentSummary> {
        self.analytics_service
            .get_portfolio_summary(&self.portfolio)
    }

    /// Portfolio valuation at `date` with invested total and gain/loss.
    pub fn get_projection_report(&self, date: &str) -> Result<ProjectionReport, CoreError> {
        let date = parse_date(date)?;
        self.analytics_service
            .get_projection_report(&self.portfolio, date)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.portfolio.settings
    }

    /// Change the display currency. Values are never converted.
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.portfolio.settings.currency = currency.into().to_uppercase();
    }
}
