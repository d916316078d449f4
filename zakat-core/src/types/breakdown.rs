//! Assessment result types
//!
//! Breakdowns are produced fresh on every aggregation call and never
//! mutated in place; an assessment is a pure function of the inputs it was
//! computed from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AssetCategory, Metal};

// ============================================================
// Per-category breakdown
// ============================================================

/// Total vs. zakatable value for one asset category
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Full value of the category
    pub total: Decimal,
    /// Portion subject to zakat, never more than `total`
    pub zakatable: Decimal,
    /// Whether the category crosses nisab on its own terms; only set for
    /// categories that carry an individual threshold rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meets_nisab_individually: Option<bool>,
}

impl CategoryBreakdown {
    pub fn new(total: Decimal, zakatable: Decimal) -> Self {
        Self {
            total,
            zakatable,
            meets_nisab_individually: None,
        }
    }

    /// Breakdown for an empty category
    pub fn zero() -> Self {
        Self::default()
    }

    /// Attach an individual nisab verdict
    pub fn with_nisab_verdict(mut self, meets: bool) -> Self {
        self.meets_nisab_individually = Some(meets);
        self
    }

    /// `0 <= zakatable <= total`
    pub fn verify_invariant(&self) -> bool {
        self.zakatable >= Decimal::ZERO && self.zakatable <= self.total
    }
}

/// Breakdowns for every supported category
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSet {
    pub cash: CategoryBreakdown,
    pub precious_metals: CategoryBreakdown,
    pub stocks: CategoryBreakdown,
    pub retirement: CategoryBreakdown,
    pub real_estate: CategoryBreakdown,
    pub crypto: CategoryBreakdown,
    pub receivables: CategoryBreakdown,
}

impl BreakdownSet {
    /// Breakdown for a category
    pub fn get(&self, category: AssetCategory) -> &CategoryBreakdown {
        match category {
            AssetCategory::Cash => &self.cash,
            AssetCategory::PreciousMetals => &self.precious_metals,
            AssetCategory::Stocks => &self.stocks,
            AssetCategory::Retirement => &self.retirement,
            AssetCategory::RealEstate => &self.real_estate,
            AssetCategory::Crypto => &self.crypto,
            AssetCategory::Receivables => &self.receivables,
        }
    }

    /// Iterate categories with their breakdowns, in display order
    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, &CategoryBreakdown)> {
        AssetCategory::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }

    /// Sum of all category totals
    pub fn total_assets(&self) -> Decimal {
        self.iter().map(|(_, breakdown)| breakdown.total).sum()
    }

    /// Sum of all zakatable values, before hawl filtering
    pub fn raw_zakatable(&self) -> Decimal {
        self.iter().map(|(_, breakdown)| breakdown.zakatable).sum()
    }

    /// Every category upholds `zakatable <= total`
    pub fn verify_invariants(&self) -> bool {
        self.iter().all(|(_, breakdown)| breakdown.verify_invariant())
    }
}

// ============================================================
// Nisab status
// ============================================================

/// An established (or degraded) nisab threshold in the display currency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NisabStatus {
    /// Metal the threshold is denominated in
    pub threshold_type: Metal,
    /// Threshold value in the display currency; zero when it could not be
    /// established
    pub threshold_value: Decimal,
    /// Verdict for the wealth pool the engine compared against the
    /// threshold
    pub meets_nisab: bool,
    /// False whenever a currency conversion was involved, so callers can
    /// flag reduced numeric confidence
    pub is_direct_price: bool,
}

impl NisabStatus {
    /// Threshold established from a native-currency price
    pub fn direct(threshold_type: Metal, threshold_value: Decimal) -> Self {
        Self {
            threshold_type,
            threshold_value,
            meets_nisab: false,
            is_direct_price: true,
        }
    }

    /// Threshold established through a currency conversion
    pub fn converted(threshold_type: Metal, threshold_value: Decimal) -> Self {
        Self {
            threshold_type,
            threshold_value,
            meets_nisab: false,
            is_direct_price: false,
        }
    }

    /// Threshold that could not be established. A missing threshold must
    /// never read as "eligible".
    pub fn unavailable(threshold_type: Metal) -> Self {
        Self {
            threshold_type,
            threshold_value: Decimal::ZERO,
            meets_nisab: false,
            is_direct_price: false,
        }
    }

    /// Whether the threshold was actually established
    pub fn is_usable(&self) -> bool {
        self.threshold_value > Decimal::ZERO
    }

    /// Record the verdict for a wealth value against this threshold
    pub fn assessed_against(mut self, value: Decimal) -> Self {
        self.meets_nisab = self.is_usable() && value >= self.threshold_value;
        self
    }
}

// ============================================================
// Assessment output
// ============================================================

/// The combined output contract handed to display/report collaborators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZakatAssessment {
    /// Sum of all category totals
    pub total_assets: Decimal,
    /// Hawl-qualified zakatable pool the due amount was computed from
    pub zakatable_amount: Decimal,
    /// Amount due, zero when not eligible
    pub zakat_due: Decimal,
    /// Overall eligibility verdict
    pub is_eligible: bool,
    /// Threshold the verdict was taken against
    pub nisab: NisabStatus,
    /// Per-category breakdowns
    pub breakdown: BreakdownSet,
}

impl ZakatAssessment {
    /// Category invariants hold and the headline figures agree with the
    /// breakdown they were derived from
    pub fn verify_breakdown_sums(&self) -> bool {
        self.breakdown.verify_invariants()
            && (self.breakdown.total_assets() - self.total_assets).abs() < Decimal::new(1, 6)
            && self.zakatable_amount <= self.breakdown.raw_zakatable()
    }
}
