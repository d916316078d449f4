//! Precious-metal rules
//!
//! Valuation is weight times the per-gram price in the display currency.
//! The individual nisab verdict is taken on the zakatable *grams* against
//! the fixed weight thresholds, so it survives a degraded price feed.

use rust_decimal::Decimal;
use tracing::warn;

use crate::currency::CurrencyConverter;
use crate::nisab::nisab_grams;
use crate::types::{
    CategoryBreakdown, CurrencyCode, Metal, MetalPrices, PreciousMetalsInput, RateTable,
};

/// Aggregate gold and silver holdings.
///
/// Regular-use jewelry counts toward the total but is exempt from zakat;
/// occasional-use and investment holdings are zakatable.
pub fn aggregate_precious_metals(
    input: &PreciousMetalsInput,
    prices: &MetalPrices,
    table: &RateTable,
    display_currency: &CurrencyCode,
) -> CategoryBreakdown {
    let gold_price = display_price(Metal::Gold, prices, table, display_currency);
    let silver_price = display_price(Metal::Silver, prices, table, display_currency);

    let total =
        input.total_gold_grams() * gold_price + input.total_silver_grams() * silver_price;
    let zakatable = input.zakatable_gold_grams() * gold_price
        + input.zakatable_silver_grams() * silver_price;

    let meets = input.zakatable_gold_grams() >= nisab_grams(Metal::Gold)
        || input.zakatable_silver_grams() >= nisab_grams(Metal::Silver);

    CategoryBreakdown::new(total, zakatable).with_nisab_verdict(meets)
}

/// Per-gram price in the display currency, or zero when the feed or the
/// conversion is unavailable. A zero price values the holding at zero; it
/// never fails the whole aggregation.
fn display_price(
    metal: Metal,
    prices: &MetalPrices,
    table: &RateTable,
    display_currency: &CurrencyCode,
) -> Decimal {
    let price = match prices.price_per_gram(metal) {
        Ok(price) => price,
        Err(err) => {
            warn!(%metal, %err, "metal valuation degraded to zero");
            return Decimal::ZERO;
        }
    };

    if prices.currency == *display_currency {
        return price;
    }

    match CurrencyConverter::new().convert(price, &prices.currency, display_currency, table) {
        Ok(converted) => converted,
        Err(err) => {
            warn!(%metal, %err, "metal valuation degraded to zero");
            Decimal::ZERO
        }
    }
}
