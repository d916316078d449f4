//! Stocks, retirement, real-estate and crypto rules

use rust_decimal::Decimal;

use crate::types::{
    CategoryBreakdown, CryptoInput, RealEstateInput, RetirementInput, StocksInput,
};

/// Zakatable share of a passive long-term equity holding, approximating the
/// underlying company's liquid (cash + receivables) assets.
pub fn passive_stock_ratio() -> Decimal {
    Decimal::new(30, 2) // 0.30
}

/// Active positions and dividends in full; passive holdings at the
/// underlying-assets ratio.
pub fn aggregate_stocks(input: &StocksInput) -> CategoryBreakdown {
    let zakatable = input.active_trading_value
        + input.dividends_value
        + input.passive_holdings_value * passive_stock_ratio();
    CategoryBreakdown::new(input.total(), zakatable)
}

/// Accessible (vested) funds only; locked funds carry no zakat until they
/// become withdrawable.
pub fn aggregate_retirement(input: &RetirementInput) -> CategoryBreakdown {
    CategoryBreakdown::new(input.total(), input.accessible_value)
}

/// Rental income and property held for sale; the primary residence is
/// exempt.
pub fn aggregate_real_estate(input: &RealEstateInput) -> CategoryBreakdown {
    let zakatable = input.rental_income_value + input.for_sale_value;
    CategoryBreakdown::new(input.total(), zakatable)
}

/// Crypto is treated as trade goods: fully zakatable, staked or not.
pub fn aggregate_crypto(input: &CryptoInput) -> CategoryBreakdown {
    let total = input.total();
    CategoryBreakdown::new(total, total)
}
