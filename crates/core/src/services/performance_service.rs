use crate::dates::years_between;
use crate::errors::CoreError;
use crate::models::nav::NavHistory;

/// Minimum number of observations needed to derive a realized rate.
pub const MIN_RATE_RECORDS: usize = 2;

/// Derives realized performance from a NAV history.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// Annualized compound growth rate, in percent, between the first and the
    /// last observation:
    ///
    /// ```text
    /// rate = ((last / first) ^ (1 / years) - 1) * 100
    /// years = days(last - first) / 365.25
    /// ```
    pub fn calculate_rate(&self, history: &NavHistory) -> Result<f64, CoreError> {
        let (first, last) = match (history.first(), history.latest()) {
            (Some(first), Some(last)) if history.len() >= MIN_RATE_RECORDS => (first, last),
            _ => {
                return Err(CoreError::InsufficientData {
                    required: MIN_RATE_RECORDS,
                    found: history.len(),
                })
            }
        };

        let years = years_between(first.date, last.date);
        if years <= 0.0 {
            return Err(CoreError::NonPositiveInterval {
                from: first.date,
                to: last.date,
            });
        }

        let growth = last.value / first.value;
        Ok((growth.powf(1.0 / years) - 1.0) * 100.0)
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}
