//! Plain-text rendering of summaries and projections

use nav_projection_core::models::analytics::{InvestmentSummary, ProjectionReport};
use std::fmt::{self, Write};

/// Render the per-investment summary block.
pub fn render_summary(
    summaries: &[InvestmentSummary],
    currency: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "=== PORTFOLIO SUMMARY ===\n")?;

    if summaries.is_empty() {
        writeln!(out, "No investments")?;
        return Ok(out);
    }

    for s in summaries {
        writeln!(out, "Investment: {}", s.name)?;
        writeln!(out, "  Amount invested: {:.2} {currency}", s.amount_invested)?;
        writeln!(out, "  Reference rate: {:.2}%", s.reference_rate)?;
        writeln!(out, "  Investment date: {}", s.investment_date)?;

        match &s.latest_nav {
            Some(nav) => {
                writeln!(
                    out,
                    "  Latest NAV: {:.2} {currency} (date: {})",
                    nav.value, nav.date
                )?;
                if let Some(rate) = s.performance_rate {
                    writeln!(out, "  Annual performance rate: {rate:.2}%")?;
                }
            }
            None => writeln!(out, "  No NAV recorded")?,
        }
        writeln!(out)?;
    }
    Ok(out)
}

/// Render projected values, total, invested amount and gain/loss.
pub fn render_projection(
    report: &ProjectionReport,
    currency: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let valuation = &report.valuation;
    writeln!(out, "=== PROJECTION AT {} ===\n", valuation.as_of)?;

    let mut names: Vec<&String> = valuation.values.keys().collect();
    names.sort();
    for name in names {
        writeln!(out, "{name}: {:.2} {currency}", valuation.values[name])?;
    }

    writeln!(out, "\nTotal portfolio value: {:.2} {currency}", valuation.total)?;
    writeln!(out, "Total invested: {:.2} {currency}", report.total_invested)?;
    match report.gain_loss_pct {
        Some(pct) => writeln!(
            out,
            "Gain/Loss: {:.2} {currency} ({pct:.2}%)",
            report.gain_loss
        )?,
        None => writeln!(out, "Gain/Loss: {:.2} {currency}", report.gain_loss)?,
    }
    Ok(out)
}
