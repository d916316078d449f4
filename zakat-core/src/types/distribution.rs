//! Distribution types
//!
//! The eight fixed recipient categories (asnaf), the per-category
//! allocation entry, and the scholar weighting policy table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ZakatError, ZakatResult};

// ============================================================
// Recipient categories
// ============================================================

/// The eight Qur'anic recipient categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsnafCategory {
    ThePoor,
    TheNeedy,
    Administrators,
    HeartsReconciled,
    Captives,
    Debtors,
    CauseOfAllah,
    Wayfarers,
}

impl AsnafCategory {
    /// All eight categories, in canonical order
    pub const ALL: [AsnafCategory; 8] = [
        AsnafCategory::ThePoor,
        AsnafCategory::TheNeedy,
        AsnafCategory::Administrators,
        AsnafCategory::HeartsReconciled,
        AsnafCategory::Captives,
        AsnafCategory::Debtors,
        AsnafCategory::CauseOfAllah,
        AsnafCategory::Wayfarers,
    ];

    /// Stable identifier used in output contracts
    pub fn id(&self) -> &'static str {
        match self {
            AsnafCategory::ThePoor => "the_poor",
            AsnafCategory::TheNeedy => "the_needy",
            AsnafCategory::Administrators => "zakat_administrators",
            AsnafCategory::HeartsReconciled => "reconciliation_of_hearts",
            AsnafCategory::Captives => "freeing_captives",
            AsnafCategory::Debtors => "debtors",
            AsnafCategory::CauseOfAllah => "cause_of_allah",
            AsnafCategory::Wayfarers => "wayfarers",
        }
    }

    /// Traditional Arabic name
    pub fn arabic(&self) -> &'static str {
        match self {
            AsnafCategory::ThePoor => "al-fuqara",
            AsnafCategory::TheNeedy => "al-masakin",
            AsnafCategory::Administrators => "al-amilin",
            AsnafCategory::HeartsReconciled => "muallafatul-qulub",
            AsnafCategory::Captives => "ar-riqab",
            AsnafCategory::Debtors => "al-gharimin",
            AsnafCategory::CauseOfAllah => "fi-sabilillah",
            AsnafCategory::Wayfarers => "ibnus-sabil",
        }
    }

    /// Look up a category by its stable identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

impl std::fmt::Display for AsnafCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================
// Allocation entries
// ============================================================

/// Distribution mode the allocator is currently in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    #[default]
    Equal,
    Scholar,
    Custom,
}

/// One recipient category's slice of the distribution plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Recipient category
    pub category: AsnafCategory,
    /// Share of the total, 0..=100
    pub percentage: Decimal,
    /// `percentage / 100 * total_due`, re-derived on every change
    pub amount: Decimal,
}

impl DistributionEntry {
    pub fn new(category: AsnafCategory, percentage: Decimal) -> Self {
        Self {
            category,
            percentage,
            amount: Decimal::ZERO,
        }
    }
}

// ============================================================
// Scholar weighting policy table
// ============================================================

/// Scholar-recommended weighting per recipient category.
///
/// A policy table rather than a constant: callers may supply their own
/// emphasis, and the table is validated to sum to 100 before use. The
/// default emphasizes the poor and the needy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScholarWeights {
    pub the_poor: Decimal,
    pub the_needy: Decimal,
    pub administrators: Decimal,
    pub hearts_reconciled: Decimal,
    pub captives: Decimal,
    pub debtors: Decimal,
    pub cause_of_allah: Decimal,
    pub wayfarers: Decimal,
}

impl ScholarWeights {
    /// Weight for a specific category
    pub fn weight_for(&self, category: AsnafCategory) -> Decimal {
        match category {
            AsnafCategory::ThePoor => self.the_poor,
            AsnafCategory::TheNeedy => self.the_needy,
            AsnafCategory::Administrators => self.administrators,
            AsnafCategory::HeartsReconciled => self.hearts_reconciled,
            AsnafCategory::Captives => self.captives,
            AsnafCategory::Debtors => self.debtors,
            AsnafCategory::CauseOfAllah => self.cause_of_allah,
            AsnafCategory::Wayfarers => self.wayfarers,
        }
    }

    /// Sum over all eight categories
    pub fn sum(&self) -> Decimal {
        AsnafCategory::ALL
            .iter()
            .map(|category| self.weight_for(*category))
            .sum()
    }

    /// Weights must be non-negative and sum to exactly 100
    pub fn validate(&self) -> ZakatResult<()> {
        let negative = AsnafCategory::ALL
            .iter()
            .any(|category| self.weight_for(*category) < Decimal::ZERO);
        let sum = self.sum();
        if negative || sum != Decimal::ONE_HUNDRED {
            return Err(ZakatError::InvalidWeights { sum });
        }
        Ok(())
    }
}

impl Default for ScholarWeights {
    fn default() -> Self {
        Self {
            the_poor: Decimal::new(30, 0),
            the_needy: Decimal::new(25, 0),
            administrators: Decimal::new(5, 0),
            hearts_reconciled: Decimal::new(5, 0),
            captives: Decimal::new(5, 0),
            debtors: Decimal::new(10, 0),
            cause_of_allah: Decimal::new(15, 0),
            wayfarers: Decimal::new(5, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_categories_with_stable_ids() {
        assert_eq!(AsnafCategory::ALL.len(), 8);
        assert_eq!(AsnafCategory::ThePoor.id(), "the_poor");
        assert_eq!(AsnafCategory::from_id("debtors"), Some(AsnafCategory::Debtors));
        assert_eq!(AsnafCategory::from_id("nonexistent"), None);
    }

    #[test]
    fn test_arabic_names_present() {
        for category in AsnafCategory::ALL {
            assert!(!category.arabic().is_empty());
        }
    }

    #[test]
    fn test_default_weights_validate() {
        let weights = ScholarWeights::default();
        assert_eq!(weights.sum(), Decimal::ONE_HUNDRED);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_weights_reject_bad_sum() {
        let mut weights = ScholarWeights::default();
        weights.the_poor = Decimal::new(31, 0);
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, ZakatError::InvalidWeights { .. }));
    }

    #[test]
    fn test_weights_reject_negative_entries() {
        let mut weights = ScholarWeights::default();
        weights.the_poor = Decimal::new(35, 0);
        weights.wayfarers = Decimal::ZERO;
        weights.captives = Decimal::new(-5, 0);
        weights.debtors = Decimal::new(20, 0);
        // Sum may still be 100; negatives are rejected on their own.
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, ZakatError::InvalidWeights { .. }));
    }

    #[test]
    fn test_mode_serializes_snake_case() {
        let json = serde_json::to_string(&DistributionMode::Scholar).unwrap();
        assert_eq!(json, "\"scholar\"");
    }
}
