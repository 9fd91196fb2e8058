use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A single observed valuation (date → NAV).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavRecord {
    pub date: NaiveDate,
    pub value: f64,
}

impl NavRecord {
    /// Create a record, rejecting non-positive (or NaN/infinite) values.
    pub fn new(date: NaiveDate, value: f64) -> Result<Self, CoreError> {
        if !(value > 0.0 && value.is_finite()) {
            return Err(CoreError::InvalidValue(value));
        }
        Ok(Self { date, value })
    }
}

/// NAV observations of one investment, always sorted ascending by date.
///
/// Records sharing a date keep their insertion order, so the most recently
/// added one is considered the latest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NavHistory {
    records: Vec<NavRecord>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert an observation at its sorted position.
    /// Uses binary search (O(log n)) to find the slot after any equal dates.
    pub fn append(&mut self, date: NaiveDate, value: f64) -> Result<(), CoreError> {
        let record = NavRecord::new(date, value)?;
        let pos = self.records.partition_point(|r| r.date <= date);
        self.records.insert(pos, record);
        Ok(())
    }

    /// Record with the greatest date, if any.
    pub fn latest(&self) -> Option<&NavRecord> {
        self.records.last()
    }

    /// Record with the smallest date, if any.
    pub fn first(&self) -> Option<&NavRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NavRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavRecord> {
        self.records.iter()
    }
}
