//! Hawl (lunar year) tracking
//!
//! Wealth must be held for one full lunar year (~354 days) before it
//! becomes zakatable. The engine itself consumes plain per-category
//! booleans; this tracker is the supported way for callers to derive them
//! from acquisition dates.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of the lunar year in days
pub const LUNAR_YEAR_DAYS: i64 = 354;

/// Derives a hawl verdict from an acquisition date and a calculation date
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HawlTracker {
    /// When the asset was acquired or first reached nisab
    pub acquisition_date: Option<NaiveDate>,
    /// The date the verdict is taken for
    pub calculation_date: NaiveDate,
}

impl HawlTracker {
    /// Create a tracker for a specific calculation date
    pub fn new(calculation_date: NaiveDate) -> Self {
        Self {
            acquisition_date: None,
            calculation_date,
        }
    }

    /// Set the acquisition date
    pub fn acquired_on(mut self, date: NaiveDate) -> Self {
        self.acquisition_date = Some(date);
        self
    }

    /// Whether a full lunar year has elapsed. Without an acquisition date
    /// there is no completed hawl.
    pub fn is_satisfied(&self) -> bool {
        match self.acquisition_date {
            Some(start) => self.days_elapsed(start) >= LUNAR_YEAR_DAYS,
            None => false,
        }
    }

    /// Days between acquisition and calculation
    pub fn days_elapsed(&self, start: NaiveDate) -> i64 {
        (self.calculation_date - start).num_days()
    }

    /// Fraction of the hawl completed, zero without an acquisition date.
    /// Can exceed one once the year has passed.
    pub fn completion(&self) -> Decimal {
        match self.acquisition_date {
            Some(start) => {
                let days = self.days_elapsed(start);
                if days <= 0 {
                    Decimal::ZERO
                } else {
                    Decimal::from(days) / Decimal::from(LUNAR_YEAR_DAYS)
                }
            }
            None => Decimal::ZERO,
        }
    }
}

impl Default for HawlTracker {
    fn default() -> Self {
        Self {
            acquisition_date: None,
            calculation_date: Utc::now().date_naive(),
        }
    }
}
