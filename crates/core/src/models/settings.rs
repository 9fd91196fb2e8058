use serde::{Deserialize, Serialize};

/// User-configurable settings, carried with the portfolio.
/// Used for display only; no calculation depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code in which report values are rendered (e.g., "EUR", "USD").
    /// No conversion is ever applied.
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
        }
    }
}
