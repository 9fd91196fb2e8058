use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type for the entire nav-projection-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Invested amount must be positive, got {0}")]
    InvalidAmount(f64),

    #[error("NAV value must be positive, got {0}")]
    InvalidValue(f64),

    #[error("Reference rate must be a finite percentage of at least -100, got {0}")]
    InvalidRate(f64),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    // ── Portfolio lookups ───────────────────────────────────────────
    #[error("Investment not found: {0}")]
    UnknownInvestment(String),

    #[error("Investment already exists: {0}")]
    DuplicateInvestment(String),

    // ── History / rate calculation ──────────────────────────────────
    #[error("No NAV recorded for {0}")]
    EmptyHistory(String),

    #[error("At least {required} NAV records are needed, found {found}")]
    InsufficientData { required: usize, found: usize },

    #[error("Time interval from {from} to {to} must be positive")]
    NonPositiveInterval { from: NaiveDate, to: NaiveDate },

    // ── Projection ──────────────────────────────────────────────────
    #[error("Projection date {target} is before the latest NAV date {latest}")]
    PastTargetDate { target: NaiveDate, latest: NaiveDate },

    #[error("Projection failed for {name}: {source}")]
    Projection {
        name: String,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Annotate an error with the name of the investment it came from.
    pub fn for_investment(self, name: impl Into<String>) -> Self {
        CoreError::Projection {
            name: name.into(),
            source: Box::new(self),
        }
    }
}
