//! Nisab Evaluator
//!
//! Turns a metal-weight threshold (gold 85 g, silver 595 g) into a value in
//! the display currency. When the metal price is already quoted in the
//! display currency the threshold is a direct multiplication; otherwise the
//! per-gram price is converted first and the status records the reduced
//! confidence. An unusable price or missing rate degrades to a zero
//! threshold that can never read as "eligible".

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::currency::CurrencyConverter;
use crate::types::{CurrencyCode, Metal, MetalPrices, NisabStatus, RateTable};

/// Gold nisab weight in grams
pub const GOLD_NISAB_GRAMS: u32 = 85;

/// Silver nisab weight in grams
pub const SILVER_NISAB_GRAMS: u32 = 595;

/// Threshold weight for a metal
pub fn nisab_grams(metal: Metal) -> Decimal {
    match metal {
        Metal::Gold => Decimal::from(GOLD_NISAB_GRAMS),
        Metal::Silver => Decimal::from(SILVER_NISAB_GRAMS),
    }
}

/// Nisab evaluator
#[derive(Clone, Copy, Debug, Default)]
pub struct NisabEvaluator {
    converter: CurrencyConverter,
}

impl NisabEvaluator {
    /// Create new evaluator
    pub fn new() -> Self {
        Self {
            converter: CurrencyConverter::new(),
        }
    }

    /// Establish the threshold for one metal in the display currency.
    ///
    /// The returned status carries the threshold only; the verdict for a
    /// specific wealth pool is taken with [`NisabStatus::assessed_against`].
    pub fn evaluate(
        &self,
        metal: Metal,
        prices: &MetalPrices,
        table: &RateTable,
        display_currency: &CurrencyCode,
    ) -> NisabStatus {
        let price_per_gram = match prices.price_per_gram(metal) {
            Ok(price) => price,
            Err(err) => {
                warn!(%metal, %err, "nisab threshold degraded: no usable price");
                return NisabStatus::unavailable(metal);
            }
        };

        let weight = nisab_grams(metal);

        if prices.currency == *display_currency {
            let threshold = price_per_gram * weight;
            debug!(%metal, %threshold, "nisab threshold established from native price");
            return NisabStatus::direct(metal, threshold);
        }

        match self
            .converter
            .convert(price_per_gram, &prices.currency, display_currency, table)
        {
            Ok(converted) => {
                let threshold = converted * weight;
                debug!(%metal, %threshold, "nisab threshold established via conversion");
                NisabStatus::converted(metal, threshold)
            }
            Err(err) => {
                warn!(%metal, %err, "nisab threshold degraded: conversion unavailable");
                NisabStatus::unavailable(metal)
            }
        }
    }

    /// Establish the lower of the gold and silver thresholds, skipping any
    /// that could not be established. Conventionally this lands on silver.
    pub fn evaluate_lower(
        &self,
        prices: &MetalPrices,
        table: &RateTable,
        display_currency: &CurrencyCode,
    ) -> NisabStatus {
        let gold = self.evaluate(Metal::Gold, prices, table, display_currency);
        let silver = self.evaluate(Metal::Silver, prices, table, display_currency);

        match (gold.is_usable(), silver.is_usable()) {
            (true, true) => {
                if silver.threshold_value <= gold.threshold_value {
                    silver
                } else {
                    gold
                }
            }
            (true, false) => gold,
            (false, true) => silver,
            (false, false) => NisabStatus::unavailable(Metal::Silver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_prices() -> MetalPrices {
        MetalPrices::new(
            Decimal::new(9398, 2), // 93.98 per gram
            Decimal::new(110, 2),  // 1.10 per gram
            CurrencyCode::new("usd"),
        )
    }

    fn create_test_table() -> RateTable {
        let mut table = RateTable::new(CurrencyCode::new("usd"));
        table
            .insert(CurrencyCode::new("eur"), Decimal::new(92, 2))
            .unwrap();
        table
    }

    #[test]
    fn test_direct_gold_threshold() {
        let evaluator = NisabEvaluator::new();
        let status = evaluator.evaluate(
            Metal::Gold,
            &create_test_prices(),
            &create_test_table(),
            &CurrencyCode::new("usd"),
        );

        // 93.98 * 85 = 7988.30
        assert_eq!(status.threshold_value, Decimal::new(798_830, 2));
        assert!(status.is_direct_price);
        assert!(status.is_usable());
        assert!(!status.meets_nisab);
    }

    #[test]
    fn test_direct_silver_threshold() {
        let evaluator = NisabEvaluator::new();
        let status = evaluator.evaluate(
            Metal::Silver,
            &create_test_prices(),
            &create_test_table(),
            &CurrencyCode::new("usd"),
        );

        // 1.10 * 595 = 654.50
        assert_eq!(status.threshold_value, Decimal::new(65_450, 2));
        assert!(status.is_direct_price);
    }

    #[test]
    fn test_converted_threshold_flags_confidence() {
        let evaluator = NisabEvaluator::new();
        let status = evaluator.evaluate(
            Metal::Gold,
            &create_test_prices(),
            &create_test_table(),
            &CurrencyCode::new("eur"),
        );

        // 93.98 * 0.92 * 85
        let expected = Decimal::new(9398, 2) * Decimal::new(92, 2) * Decimal::from(85u32);
        assert_eq!(status.threshold_value, expected);
        assert!(!status.is_direct_price);
        assert!(status.is_usable());
    }

    #[test]
    fn test_missing_rate_degrades_to_zero() {
        let evaluator = NisabEvaluator::new();
        let status = evaluator.evaluate(
            Metal::Gold,
            &create_test_prices(),
            &create_test_table(),
            &CurrencyCode::new("jpy"),
        );

        assert_eq!(status.threshold_value, Decimal::ZERO);
        assert!(!status.meets_nisab);
        assert!(!status.is_direct_price);
        assert!(!status.is_usable());
    }

    #[test]
    fn test_unusable_price_degrades_to_zero() {
        let evaluator = NisabEvaluator::new();
        let prices = MetalPrices::new(Decimal::ZERO, Decimal::new(110, 2), CurrencyCode::new("usd"));
        let status = evaluator.evaluate(
            Metal::Gold,
            &prices,
            &create_test_table(),
            &CurrencyCode::new("usd"),
        );

        assert!(!status.is_usable());
        assert!(!status.meets_nisab);
    }

    #[test]
    fn test_lower_of_two_picks_silver() {
        let evaluator = NisabEvaluator::new();
        let status = evaluator.evaluate_lower(
            &create_test_prices(),
            &create_test_table(),
            &CurrencyCode::new("usd"),
        );

        assert_eq!(status.threshold_type, Metal::Silver);
        assert_eq!(status.threshold_value, Decimal::new(65_450, 2));
    }

    #[test]
    fn test_lower_of_two_skips_unusable_metal() {
        let evaluator = NisabEvaluator::new();
        let prices = MetalPrices::new(
            Decimal::new(9398, 2),
            Decimal::ZERO, // silver feed missing
            CurrencyCode::new("usd"),
        );
        let status = evaluator.evaluate_lower(
            &prices,
            &create_test_table(),
            &CurrencyCode::new("usd"),
        );

        assert_eq!(status.threshold_type, Metal::Gold);
        assert!(status.is_usable());
    }

    #[test]
    fn test_lower_of_two_with_nothing_usable() {
        let evaluator = NisabEvaluator::new();
        let prices = MetalPrices::new(Decimal::ZERO, Decimal::ZERO, CurrencyCode::new("usd"));
        let status = evaluator.evaluate_lower(
            &prices,
            &create_test_table(),
            &CurrencyCode::new("usd"),
        );

        assert!(!status.is_usable());
        assert!(!status.meets_nisab);
    }
}
