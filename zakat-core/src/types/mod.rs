//! Engine data model
//!
//! - `common`: currency codes, metals, categories, raw-amount coercion
//! - `market`: metal price and rate table snapshots
//! - `assets`: per-category raw input field sets
//! - `breakdown`: aggregation and assessment results
//! - `distribution`: recipient categories and weighting policy

mod assets;
mod breakdown;
mod common;
mod distribution;
mod market;

pub use assets::{
    AssetInputs, CashInput, CryptoInput, PreciousMetalsInput, RealEstateInput, ReceivablesInput,
    RetirementInput, StocksInput,
};
pub use breakdown::{BreakdownSet, CategoryBreakdown, NisabStatus, ZakatAssessment};
pub use common::{amount_from_raw, clamp_non_negative, AssetCategory, CurrencyCode, Metal};
pub use distribution::{
    AsnafCategory, DistributionEntry, DistributionMode, ScholarWeights,
};
pub use market::{MetalPrices, RateTable};
