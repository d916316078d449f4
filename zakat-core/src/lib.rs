//! Zakat Calculation & Distribution Engine
//!
//! Computes zakat obligations across heterogeneous asset classes, converts
//! values across currencies through a single pivot currency, decides
//! eligibility against precious-metal-denominated thresholds, and allocates
//! the computed amount across the eight fixed recipient categories.
//!
//! # Engine Invariants
//!
//! | Invariant | Core Requirement |
//! |-----------|------------------|
//! | **Breakdown Order** | `zakatable <= total` for every category, always |
//! | **No Accidental Eligibility** | an unavailable threshold degrades to zero with `meets_nisab = false`, never "eligible" |
//! | **Percentage Closure** | the eight allocation percentages sum to 100 after every mutation |
//! | **Amount Derivation** | every allocation amount is re-derived from its percentage; amounts never drift |
//! | **Pure Assessment** | an assessment is a function of its input and market snapshots alone |
//!
//! # Architecture
//!
//! ```text
//! raw inputs + price/rate snapshots
//!        │
//!        ▼
//!  CategoryAggregator ──► ZakatEngine (hawl + nisab) ──► DistributionAllocator
//!        │                     │
//!        └── CurrencyConverter / NisabEvaluator ◄───────┘
//! ```
//!
//! The presentation layer, price-feed HTTP proxies, report rendering and
//! persistence are external collaborators: the engine consumes snapshots
//! ([`MetalPrices`], [`RateTable`], [`AssetInputs`]) and produces value
//! objects ([`ZakatAssessment`], the [`DistributionAllocator`] state).

pub mod aggregation;
pub mod config;
pub mod currency;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod hawl;
pub mod nisab;
pub mod types;

// Re-export error types
pub use error::{ZakatError, ZakatResult};

// Re-export all types
pub use types::*;

// Re-export components
pub use config::{NisabBasis, ZakatConfig};
pub use currency::CurrencyConverter;
pub use distribution::DistributionAllocator;
pub use engine::{zakat_rate, ZakatEngine};
pub use hawl::{HawlTracker, LUNAR_YEAR_DAYS};
pub use nisab::{nisab_grams, NisabEvaluator, GOLD_NISAB_GRAMS, SILVER_NISAB_GRAMS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_fixed_constants() {
        assert_eq!(GOLD_NISAB_GRAMS, 85);
        assert_eq!(SILVER_NISAB_GRAMS, 595);
        assert_eq!(zakat_rate(), Decimal::new(25, 3));
    }

    #[test]
    fn test_assessment_feeds_allocator() {
        // End to end: cash-only input through the engine into the
        // allocator, with the allocation amounts closing over the due.
        let mut inputs = AssetInputs::default();
        inputs.cash.checking_account = Decimal::new(50_000, 0);
        inputs.cash.hawl_met = true;

        let prices = MetalPrices::new(
            Decimal::new(9398, 2),
            Decimal::new(110, 2),
            CurrencyCode::new("usd"),
        );
        let table = RateTable::new(CurrencyCode::new("usd"));

        let engine = ZakatEngine::new(ZakatConfig::default());
        let assessment = engine.assess(&inputs, &prices, &table);
        assert_eq!(assessment.zakat_due, Decimal::new(1250, 0));

        let mut allocator = DistributionAllocator::new(assessment.zakat_due);
        allocator.set_percentage(AsnafCategory::ThePoor, Decimal::new(40, 0));

        assert!(allocator.verify_percentage_sum());
        assert!(allocator.verify_amount_sum());
        assert_eq!(
            allocator.entry(AsnafCategory::ThePoor).amount,
            Decimal::new(500, 0)
        );
    }
}
