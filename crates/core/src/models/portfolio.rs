use serde::Serialize;
use std::collections::HashMap;

use super::investment::Investment;
use super::settings::Settings;

/// The main data container: every investment keyed by its unique name.
///
/// Investments are only ever added. The portfolio owns them exclusively;
/// services borrow it explicitly instead of reaching for shared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Portfolio {
    /// Investments keyed by name; only `PortfolioService` inserts.
    investments: HashMap<String, Investment>,

    /// Display settings
    pub settings: Settings,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            investments: HashMap::new(),
            settings,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Investment> {
        self.investments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.investments.contains_key(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Investment> {
        self.investments.get_mut(name)
    }

    /// Insert under the investment's own name. Callers check uniqueness first.
    pub(crate) fn insert(&mut self, investment: Investment) {
        self.investments
            .insert(investment.name().to_string(), investment);
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    /// Investment names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.investments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Investments ordered by name, for deterministic traversal.
    pub fn sorted_investments(&self) -> Vec<&Investment> {
        let mut investments: Vec<&Investment> = self.investments.values().collect();
        investments.sort_by(|a, b| a.name().cmp(b.name()));
        investments
    }

    /// Sum of the amounts invested across all investments.
    pub fn total_invested(&self) -> f64 {
        self.investments.values().map(Investment::amount_invested).sum()
    }
}
