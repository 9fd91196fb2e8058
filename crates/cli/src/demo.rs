//! Built-in sample portfolio

use nav_projection_core::errors::CoreError;
use nav_projection_core::PortfolioTracker;

/// Default projection date for the demo portfolio.
pub const DEMO_PROJECTION_DATE: &str = "2027-01-15";

/// (name, amount invested, reference rate %, NAVs)
const DEMO_INVESTMENTS: &[(&str, f64, f64, &[(&str, f64)])] = &[
    (
        "Tech Equity",
        5000.0,
        8.0,
        &[("2024-01-01", 5000.0), ("2024-07-01", 5300.0), ("2026-01-15", 6200.0)],
    ),
    (
        "Corporate Bond",
        3000.0,
        4.5,
        &[("2024-01-01", 3000.0), ("2024-07-01", 3067.0), ("2026-01-15", 3235.0)],
    ),
    (
        "Real Estate Fund",
        4000.0,
        6.0,
        &[("2024-01-01", 4000.0), ("2024-07-01", 4150.0), ("2026-01-15", 4650.0)],
    ),
];

/// Three investments made on 2024-01-01 with three NAVs each.
pub fn demo_portfolio() -> Result<PortfolioTracker, CoreError> {
    let mut tracker = PortfolioTracker::new();
    for (name, amount, rate, navs) in DEMO_INVESTMENTS {
        tracker.add_investment(name, *amount, *rate, "2024-01-01")?;
        for (date, value) in navs.iter() {
            tracker.add_nav(name, date, *value)?;
        }
    }
    Ok(tracker)
}
