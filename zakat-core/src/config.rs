//! Engine policy configuration
//!
//! The rules that are policy rather than fact, namely how the gold and
//! silver thresholds combine and the scholar weighting emphasis, live here
//! so they can be corrected without touching the engine.

use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Metal, ScholarWeights};

/// How per-metal thresholds combine into one eligibility verdict
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NisabBasis {
    /// Precious metals qualify on their own gram weight; the monetary pool
    /// is compared against the configured metal's threshold. Either
    /// condition qualifies the whole pool.
    #[default]
    EitherThreshold,
    /// The whole hawl-qualified pool is compared against the lower of the
    /// gold and silver thresholds, the more inclusive classical rule.
    LowerOfTwo,
}

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZakatConfig {
    /// Currency all breakdowns and thresholds are expressed in
    pub display_currency: CurrencyCode,
    /// Threshold combination rule
    pub nisab_basis: NisabBasis,
    /// Metal the monetary pool is measured against under
    /// [`NisabBasis::EitherThreshold`]
    pub monetary_threshold_metal: Metal,
    /// Scholar weighting table used by scholar-mode distribution
    pub scholar_weights: ScholarWeights,
}

impl ZakatConfig {
    pub fn new(display_currency: CurrencyCode) -> Self {
        Self {
            display_currency,
            nisab_basis: NisabBasis::default(),
            monetary_threshold_metal: Metal::Gold,
            scholar_weights: ScholarWeights::default(),
        }
    }

    /// Set the threshold combination rule
    pub fn with_nisab_basis(mut self, basis: NisabBasis) -> Self {
        self.nisab_basis = basis;
        self
    }

    /// Set the monetary threshold metal
    pub fn with_monetary_threshold_metal(mut self, metal: Metal) -> Self {
        self.monetary_threshold_metal = metal;
        self
    }

    /// Set the scholar weighting table
    pub fn with_scholar_weights(mut self, weights: ScholarWeights) -> Self {
        self.scholar_weights = weights;
        self
    }
}

impl Default for ZakatConfig {
    fn default() -> Self {
        Self::new(CurrencyCode::new("usd"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZakatConfig::default();
        assert_eq!(config.display_currency.as_str(), "usd");
        assert_eq!(config.nisab_basis, NisabBasis::EitherThreshold);
        assert_eq!(config.monetary_threshold_metal, Metal::Gold);
        assert!(config.scholar_weights.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ZakatConfig::new(CurrencyCode::new("EUR"))
            .with_nisab_basis(NisabBasis::LowerOfTwo)
            .with_monetary_threshold_metal(Metal::Silver);
        assert_eq!(config.display_currency.as_str(), "eur");
        assert_eq!(config.nisab_basis, NisabBasis::LowerOfTwo);
        assert_eq!(config.monetary_threshold_metal, Metal::Silver);
    }
}
