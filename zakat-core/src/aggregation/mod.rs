//! Category Aggregator
//!
//! One pure function per asset category, each producing a
//! [`CategoryBreakdown`] with `zakatable <= total`. Aggregation tolerates
//! missing and zero-valued input: an empty category yields a zero
//! breakdown, never an error.
//!
//! Sub-field zakatability rules:
//! - cash, crypto: fully zakatable
//! - precious metals: regular use exempt; occasional use and investment
//!   zakatable; individual nisab verdict taken on grams
//! - stocks: active trading and dividends in full, passive holdings at the
//!   underlying-assets ratio
//! - retirement: accessible funds only
//! - real estate: rental income and property held for sale only
//! - receivables: good debts only

mod holdings;
mod metals;
mod monetary;

pub use holdings::{
    aggregate_crypto, aggregate_real_estate, aggregate_retirement, aggregate_stocks,
    passive_stock_ratio,
};
pub use metals::aggregate_precious_metals;
pub use monetary::{aggregate_cash, aggregate_receivables};

use crate::types::{AssetInputs, BreakdownSet, CurrencyCode, MetalPrices, RateTable};

/// Aggregate every category of a (sanitized copy of the) input set.
///
/// Metal valuation needs the price snapshot and, when the snapshot is
/// quoted in another currency, the rate table; all other categories are
/// already expressed in the display currency.
pub fn aggregate(
    inputs: &AssetInputs,
    prices: &MetalPrices,
    table: &RateTable,
    display_currency: &CurrencyCode,
) -> BreakdownSet {
    let inputs = inputs.sanitized();

    BreakdownSet {
        cash: aggregate_cash(&inputs.cash),
        precious_metals: aggregate_precious_metals(
            &inputs.precious_metals,
            prices,
            table,
            display_currency,
        ),
        stocks: aggregate_stocks(&inputs.stocks),
        retirement: aggregate_retirement(&inputs.retirement),
        real_estate: aggregate_real_estate(&inputs.real_estate),
        crypto: aggregate_crypto(&inputs.crypto),
        receivables: aggregate_receivables(&inputs.receivables),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_prices() -> MetalPrices {
        MetalPrices::new(
            Decimal::new(9398, 2),
            Decimal::new(110, 2),
            CurrencyCode::new("usd"),
        )
    }

    #[test]
    fn test_empty_inputs_yield_zero_breakdowns() {
        let set = aggregate(
            &AssetInputs::default(),
            &create_test_prices(),
            &RateTable::new(CurrencyCode::new("usd")),
            &CurrencyCode::new("usd"),
        );

        assert_eq!(set.total_assets(), Decimal::ZERO);
        assert_eq!(set.raw_zakatable(), Decimal::ZERO);
        assert!(set.verify_invariants());
    }

    #[test]
    fn test_aggregate_sanitizes_before_valuing() {
        let mut inputs = AssetInputs::default();
        inputs.cash.checking_account = Decimal::new(500, 0);
        inputs.cash.savings_account = Decimal::new(-300, 0);

        let set = aggregate(
            &inputs,
            &create_test_prices(),
            &RateTable::new(CurrencyCode::new("usd")),
            &CurrencyCode::new("usd"),
        );

        // The negative field is clamped, not subtracted.
        assert_eq!(set.cash.total, Decimal::new(500, 0));
        assert!(set.verify_invariants());
    }

    #[test]
    fn test_all_categories_uphold_invariant() {
        let mut inputs = AssetInputs::default();
        inputs.cash.cash_on_hand = Decimal::new(1000, 0);
        inputs.precious_metals.gold_regular_grams = Decimal::new(30, 0);
        inputs.precious_metals.gold_investment_grams = Decimal::new(10, 0);
        inputs.stocks.passive_holdings_value = Decimal::new(9000, 0);
        inputs.retirement.locked_value = Decimal::new(40_000, 0);
        inputs.real_estate.primary_residence_value = Decimal::new(250_000, 0);
        inputs.crypto.spot_value = Decimal::new(700, 0);
        inputs.receivables.doubtful_debts_value = Decimal::new(120, 0);

        let set = aggregate(
            &inputs,
            &create_test_prices(),
            &RateTable::new(CurrencyCode::new("usd")),
            &CurrencyCode::new("usd"),
        );

        assert!(set.verify_invariants());
        for (_, breakdown) in set.iter() {
            assert!(breakdown.zakatable <= breakdown.total);
        }
    }
}
