use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::analytics::PortfolioValuation;
use crate::models::portfolio::Portfolio;
use crate::services::projection_service::ProjectionService;

/// Values a whole portfolio at a date by projecting every investment.
pub struct ValuationService {
    projection_service: ProjectionService,
}

impl ValuationService {
    pub fn new() -> Self {
        Self {
            projection_service: ProjectionService::new(),
        }
    }

    /// Project every investment to `date` and sum the results.
    ///
    /// All-or-nothing: the first investment that cannot be projected aborts
    /// the valuation with its error wrapped in `CoreError::Projection`.
    /// Investments are visited by name so the reported failure is stable.
    pub fn value_at(
        &self,
        portfolio: &Portfolio,
        date: NaiveDate,
    ) -> Result<PortfolioValuation, CoreError> {
        let mut values = HashMap::with_capacity(portfolio.len());
        let mut total = 0.0;

        for investment in portfolio.sorted_investments() {
            let value = self
                .projection_service
                .project(investment, date)
                .map_err(|e| {
                    warn!("Valuation at {date} aborted on {}: {e}", investment.name());
                    e.for_investment(investment.name())
                })?;
            total += value;
            values.insert(investment.name().to_string(), value);
        }

        debug!(
            "Valued {} investments at {date}: total {total:.2}",
            values.len()
        );

        Ok(PortfolioValuation {
            as_of: date,
            values,
            total,
        })
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
