//! Basic engine types
//!
//! Naming conventions:
//! - `_grams` suffix: metal weights
//! - `_value` suffix: monetary amounts in the display currency
//! - currency codes are canonical lowercase, compared case-insensitively

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================
// Currency code (newtype pattern, canonical lowercase)
// ============================================================

/// ISO-style currency code, stored lowercase.
///
/// All case handling happens here, at the data-model boundary; lookups and
/// comparisons elsewhere never deal with mixed case.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_lowercase())
    }

    /// Canonical lowercase form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurrencyCode({})", self.0)
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_ascii_uppercase())
    }
}

// ============================================================
// Metals
// ============================================================

/// Nisab threshold metal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    pub fn name(&self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
        }
    }
}

impl std::fmt::Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================
// Asset categories
// ============================================================

/// The supported zakatable asset categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Cash,
    PreciousMetals,
    Stocks,
    Retirement,
    RealEstate,
    Crypto,
    Receivables,
}

impl AssetCategory {
    /// All categories, in display order
    pub const ALL: [AssetCategory; 7] = [
        AssetCategory::Cash,
        AssetCategory::PreciousMetals,
        AssetCategory::Stocks,
        AssetCategory::Retirement,
        AssetCategory::RealEstate,
        AssetCategory::Crypto,
        AssetCategory::Receivables,
    ];

    /// Stable category identifier used in output contracts
    pub fn id(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "cash",
            AssetCategory::PreciousMetals => "precious_metals",
            AssetCategory::Stocks => "stocks",
            AssetCategory::Retirement => "retirement",
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::Crypto => "crypto",
            AssetCategory::Receivables => "receivables",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================
// Raw amount coercion
// ============================================================

/// Coerce a raw numeric field from the input boundary into a usable amount.
///
/// Non-finite and negative values become zero; they are recovered here and
/// never reach the aggregators.
pub fn amount_from_raw(raw: f64) -> Decimal {
    if !raw.is_finite() {
        return Decimal::ZERO;
    }
    let value = Decimal::from_f64(raw).unwrap_or(Decimal::ZERO);
    clamp_non_negative(value)
}

/// Clamp a typed amount to the non-negative range.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}
