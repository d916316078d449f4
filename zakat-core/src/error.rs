//! Zakat Error Codes Registry
//!
//! Error code format: ZAKAT-{module}-{sequence}
//! - ZAKAT-RATE: Currency conversion errors
//! - ZAKAT-PRICE: Metal price errors
//! - ZAKAT-DIST: Distribution errors
//!
//! Most failure conditions in this engine are recoverable by contract and
//! are encoded as result fields instead of errors: malformed numeric input
//! is coerced to zero at the data-model boundary, an unavailable nisab
//! threshold degrades to a zero-threshold/not-eligible status, and a
//! zero-remainder renormalization falls back to an equal split. The
//! variants below cover the places where a caller must decide policy.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Metal;

/// Zakat Result type
pub type ZakatResult<T> = Result<T, ZakatError>;

/// Zakat Error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZakatError {
    // ============================================================
    // Rate Errors (ZAKAT-RATE-*)
    // ============================================================
    /// [ZAKAT-RATE-001] Required currency absent from the rate table
    #[error("[ZAKAT-RATE-001] No exchange rate for currency {currency}")]
    RateUnavailable { currency: String },

    /// [ZAKAT-RATE-002] Rate factor must be strictly positive
    #[error("[ZAKAT-RATE-002] Invalid rate {rate} for currency {currency}: factors must be strictly positive")]
    InvalidRate { currency: String, rate: Decimal },

    // ============================================================
    // Price Errors (ZAKAT-PRICE-*)
    // ============================================================
    /// [ZAKAT-PRICE-001] Metal price missing or non-positive
    #[error("[ZAKAT-PRICE-001] Price for {metal} is unavailable or non-positive")]
    PriceUnavailable { metal: Metal },

    // ============================================================
    // Distribution Errors (ZAKAT-DIST-*)
    // ============================================================
    /// [ZAKAT-DIST-001] Weight table must sum to 100
    #[error("[ZAKAT-DIST-001] Distribution weight table sums to {sum}, expected 100")]
    InvalidWeights { sum: Decimal },
}
