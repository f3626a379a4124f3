//! Coverage period handling
//!
//! A policy covers incidents on every calendar day from its start date to its
//! end date, both inclusive. Dates are naive: the brokerage books all cover in
//! a single jurisdiction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: end {end} must be after start {start}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// The dates a policy provides cover for
///
/// Invariant: `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoveragePeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl CoveragePeriod {
    /// Creates a new coverage period
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end <= start {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a period running `days` days after `start`
    pub fn for_days(start: NaiveDate, days: u64) -> Result<Self, TemporalError> {
        let end = start
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        Self::new(start, end)
    }

    /// First covered day
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last covered day
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls within the period, both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days between start and end
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
