use chrono::NaiveDate;
use log::debug;

use crate::dates::years_between;
use crate::errors::CoreError;
use crate::models::analytics::{EffectiveRate, RateSource};
use crate::models::investment::Investment;
use crate::services::performance_service::{PerformanceService, MIN_RATE_RECORDS};

/// Projects the value of an investment to a future date.
///
/// Growth compounds annually at the lower of the investment's reference rate
/// and its realized rate, so estimates err on the pessimistic side.
/// Read-only: projecting never touches the investment.
pub struct ProjectionService {
    performance_service: PerformanceService,
}

impl ProjectionService {
    pub fn new() -> Self {
        Self {
            performance_service: PerformanceService::new(),
        }
    }

    /// Pick the rate used for projection.
    ///
    /// - fewer than two NAVs → reference rate
    /// - realized rate not computable → reference rate
    /// - otherwise → `min(reference, realized)`
    pub fn effective_rate(&self, investment: &Investment) -> EffectiveRate {
        let reference = EffectiveRate {
            rate: investment.reference_rate(),
            source: RateSource::Reference,
        };

        if investment.nav_history().len() < MIN_RATE_RECORDS {
            return reference;
        }

        match self.performance_service.calculate_rate(investment.nav_history()) {
            Ok(realized) if realized < reference.rate => EffectiveRate {
                rate: realized,
                source: RateSource::Realized,
            },
            Ok(_) => reference,
            Err(e) => {
                debug!(
                    "Realized rate unavailable for {} ({e}), using reference rate",
                    investment.name()
                );
                reference
            }
        }
    }

    /// Projected value at `target`:
    /// `latest_value * (1 + effective_rate / 100) ^ years`.
    ///
    /// Fails with `EmptyHistory` when there is no NAV and with
    /// `PastTargetDate` when `target` precedes the latest NAV. A target equal
    /// to the latest NAV date returns that NAV unchanged.
    pub fn project(&self, investment: &Investment, target: NaiveDate) -> Result<f64, CoreError> {
        let latest = investment.latest_nav()?;
        let effective = self.effective_rate(investment);

        let years = years_between(latest.date, target);
        if years < 0.0 {
            return Err(CoreError::PastTargetDate {
                target,
                latest: latest.date,
            });
        }

        let projected = latest.value * (1.0 + effective.rate / 100.0).powf(years);
        debug!(
            "Projected {} to {target}: {} -> {projected:.2} at {:.4}% ({}) over {years:.4} years",
            investment.name(),
            latest.value,
            effective.rate,
            effective.source
        );
        Ok(projected)
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
