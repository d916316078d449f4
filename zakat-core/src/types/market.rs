//! Market data snapshots
//!
//! Metal spot prices and the currency rate table are supplied by external
//! collaborators and consumed as point-in-time snapshots. Staleness is the
//! caller's concern; the engine only checks usability (positive factors,
//! positive prices) and degrades explicitly when a snapshot cannot answer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ZakatError, ZakatResult};
use crate::types::{CurrencyCode, Metal};

// ============================================================
// Metal prices
// ============================================================

/// Spot prices for gold and silver, per gram, in `currency`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetalPrices {
    /// Gold price per gram
    pub gold: Decimal,
    /// Silver price per gram
    pub silver: Decimal,
    /// Currency the prices are quoted in
    pub currency: CurrencyCode,
    /// Snapshot timestamp
    pub last_updated: DateTime<Utc>,
    /// Feed the snapshot came from
    pub source: String,
}

impl MetalPrices {
    /// Create a snapshot stamped with the current time
    pub fn new(gold: Decimal, silver: Decimal, currency: CurrencyCode) -> Self {
        Self {
            gold,
            silver,
            currency,
            last_updated: Utc::now(),
            source: "unknown".to_string(),
        }
    }

    /// Set the feed source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Per-gram price for a metal
    ///
    /// A missing feed shows up as a zero or negative price; that is an
    /// unavailable price, not a free metal.
    pub fn price_per_gram(&self, metal: Metal) -> ZakatResult<Decimal> {
        let price = match metal {
            Metal::Gold => self.gold,
            Metal::Silver => self.silver,
        };
        if price <= Decimal::ZERO {
            return Err(ZakatError::PriceUnavailable { metal });
        }
        Ok(price)
    }

    /// Whether the snapshot carries a usable price for `metal`
    pub fn is_usable(&self, metal: Metal) -> bool {
        self.price_per_gram(metal).is_ok()
    }
}

// ============================================================
// Rate table
// ============================================================

/// Currency rate table relative to a single base (pivot) currency.
///
/// `rates[base] == 1` and every other entry is the multiplicative factor to
/// convert one unit of the base currency into that currency. The table may
/// be partial; conversions involving an absent currency fail explicitly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base (pivot) currency
    pub base_currency: CurrencyCode,
    /// Factor per currency code, keyed lowercase
    pub rates: HashMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Create a table with only the base self-rate
    pub fn new(base_currency: CurrencyCode) -> Self {
        let mut rates = HashMap::new();
        rates.insert(base_currency.clone(), Decimal::ONE);
        Self {
            base_currency,
            rates,
        }
    }

    /// Insert a rate factor for a currency
    pub fn insert(&mut self, code: CurrencyCode, factor: Decimal) -> ZakatResult<()> {
        if factor <= Decimal::ZERO {
            return Err(ZakatError::InvalidRate {
                currency: code.as_str().to_string(),
                rate: factor,
            });
        }
        if code == self.base_currency && factor != Decimal::ONE {
            return Err(ZakatError::InvalidRate {
                currency: code.as_str().to_string(),
                rate: factor,
            });
        }
        self.rates.insert(code, factor);
        Ok(())
    }

    /// Builder-style insert
    pub fn with_rate(mut self, code: CurrencyCode, factor: Decimal) -> ZakatResult<Self> {
        self.insert(code, factor)?;
        Ok(self)
    }

    /// Look up the factor for a currency
    pub fn rate(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Whether the table has an entry for a currency
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Verify the table invariants: base self-rate is one, all factors
    /// strictly positive
    pub fn validate(&self) -> bool {
        self.rate(&self.base_currency) == Some(Decimal::ONE)
            && self.rates.values().all(|factor| *factor > Decimal::ZERO)
    }
}
