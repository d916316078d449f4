//! Distribution Allocator
//!
//! Splits the computed zakat due across the eight fixed recipient
//! categories. Three modes: equal, scholar-weighted, and custom. A custom
//! edit clamps the touched percentage and proportionally renormalizes the
//! other seven so the sum stays exactly 100, preserving their relative
//! proportions; when the other seven are all zero the remainder is split
//! equally among them instead.
//!
//! Every mutation computes all eight entries before publishing any of
//! them, so a partially-applied renormalization is never observable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ZakatResult;
use crate::types::{
    clamp_non_negative, AsnafCategory, DistributionEntry, DistributionMode, ScholarWeights,
};

/// Decimal places allocation amounts are reported at
const AMOUNT_SCALE: u32 = 2;

/// Equal share per category, 12.5 %
fn equal_share() -> Decimal {
    Decimal::new(125, 1)
}

/// Distribution allocator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionAllocator {
    /// The eight entries, in canonical category order
    entries: Vec<DistributionEntry>,
    /// Mode of the last wholesale operation
    mode: DistributionMode,
    /// The due amount the entry amounts derive from
    total_due: Decimal,
}

impl DistributionAllocator {
    /// Create an allocator over a due amount, initialized to equal shares
    pub fn new(total_due: Decimal) -> Self {
        let entries = AsnafCategory::ALL
            .iter()
            .map(|category| DistributionEntry::new(*category, equal_share()))
            .collect();
        let mut allocator = Self {
            entries,
            mode: DistributionMode::Equal,
            total_due: clamp_non_negative(total_due),
        };
        allocator.recompute_amounts();
        allocator
    }

    /// All eight entries, in canonical order
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Entry for one category
    pub fn entry(&self, category: AsnafCategory) -> &DistributionEntry {
        // entries always hold all eight categories in canonical order
        &self.entries[self
            .entries
            .iter()
            .position(|entry| entry.category == category)
            .unwrap_or(0)]
    }

    /// Current distribution mode
    pub fn mode(&self) -> DistributionMode {
        self.mode
    }

    /// The due amount currently being distributed
    pub fn total_due(&self) -> Decimal {
        self.total_due
    }

    /// Reset all eight entries to 12.5 %
    pub fn distribute_equally(&mut self) {
        for entry in &mut self.entries {
            entry.percentage = equal_share();
        }
        self.mode = DistributionMode::Equal;
        self.recompute_amounts();
    }

    /// Apply a scholar weighting table. The table is validated first; an
    /// invalid table leaves the allocator untouched.
    pub fn distribute_by_scholar(&mut self, weights: &ScholarWeights) -> ZakatResult<()> {
        weights.validate()?;
        for entry in &mut self.entries {
            entry.percentage = weights.weight_for(entry.category);
        }
        self.mode = DistributionMode::Scholar;
        self.recompute_amounts();
        Ok(())
    }

    /// Set one category's percentage and renormalize the other seven.
    ///
    /// The new percentage is clamped to [0, 100]. The untouched entries are
    /// scaled by `(100 - new) / (sum of the others)` so their relative
    /// proportions survive; the last of them absorbs the rounding remainder
    /// so the total is exactly 100.
    pub fn set_percentage(&mut self, category: AsnafCategory, percentage: Decimal) {
        let Some(target) = self
            .entries
            .iter()
            .position(|entry| entry.category == category)
        else {
            return;
        };

        let clamped = percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        let remainder = Decimal::ONE_HUNDRED - clamped;

        let mut next = self.entries.clone();
        next[target].percentage = clamped;

        let other_indices: Vec<usize> =
            (0..next.len()).filter(|index| *index != target).collect();
        let others_sum: Decimal = other_indices
            .iter()
            .map(|index| self.entries[*index].percentage)
            .sum();

        if others_sum.is_zero() {
            // Nothing to scale; split the remainder equally instead of
            // dividing by zero.
            debug!(%category, "renormalization fell back to equal split");
            let share = remainder / Decimal::from(other_indices.len() as i64);
            let mut distributed = Decimal::ZERO;
            for (position, index) in other_indices.iter().enumerate() {
                let share = if position == other_indices.len() - 1 {
                    remainder - distributed
                } else {
                    share
                };
                distributed += share;
                next[*index].percentage = share;
            }
        } else {
            let scale = remainder / others_sum;
            let mut distributed = Decimal::ZERO;
            for (position, index) in other_indices.iter().enumerate() {
                let scaled = if position == other_indices.len() - 1 {
                    remainder - distributed
                } else {
                    self.entries[*index].percentage * scale
                };
                distributed += scaled;
                next[*index].percentage = scaled;
            }
        }

        self.entries = next;
        self.mode = DistributionMode::Custom;
        self.recompute_amounts();
    }

    /// Re-derive all amounts from a new due figure, leaving percentages
    /// untouched.
    pub fn set_total_due(&mut self, total_due: Decimal) {
        self.total_due = clamp_non_negative(total_due);
        self.recompute_amounts();
    }

    /// `amount = percentage / 100 * total_due` for every entry, with the
    /// last entry absorbing the rounding remainder so the amounts sum to
    /// the due figure exactly.
    fn recompute_amounts(&mut self) {
        let count = self.entries.len();
        let mut distributed = Decimal::ZERO;
        for index in 0..count {
            let amount = if index == count - 1 {
                self.total_due - distributed
            } else {
                (self.entries[index].percentage / Decimal::ONE_HUNDRED * self.total_due)
                    .round_dp(AMOUNT_SCALE)
            };
            distributed += amount;
            self.entries[index].amount = amount;
        }
    }

    /// Percentages sum to 100 within tolerance
    pub fn verify_percentage_sum(&self) -> bool {
        let sum: Decimal = self.entries.iter().map(|entry| entry.percentage).sum();
        (sum - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 6)
    }

    /// Amounts sum to the due figure within tolerance
    pub fn verify_amount_sum(&self) -> bool {
        let sum: Decimal = self.entries.iter().map(|entry| entry.amount).sum();
        (sum - self.total_due).abs() < Decimal::new(1, 6)
    }
}

impl Default for DistributionAllocator {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZakatError;

    fn assert_invariants(allocator: &DistributionAllocator) {
        assert!(allocator.verify_percentage_sum());
        assert!(allocator.verify_amount_sum());
        for entry in allocator.entries() {
            assert!(entry.percentage >= Decimal::ZERO);
            assert!(entry.percentage <= Decimal::ONE_HUNDRED);
        }
    }

    #[test]
    fn test_initial_state_is_equal_split() {
        let allocator = DistributionAllocator::new(Decimal::new(1250, 0));

        assert_eq!(allocator.entries().len(), 8);
        assert_eq!(allocator.mode(), DistributionMode::Equal);
        for entry in allocator.entries() {
            assert_eq!(entry.percentage, Decimal::new(125, 1));
            assert_eq!(entry.amount, Decimal::new(15_625, 2)); // 156.25
        }
        assert_invariants(&allocator);
    }

    #[test]
    fn test_scholar_mode_applies_table() {
        let mut allocator = DistributionAllocator::new(Decimal::new(1000, 0));
        allocator
            .distribute_by_scholar(&ScholarWeights::default())
            .unwrap();

        assert_eq!(allocator.mode(), DistributionMode::Scholar);
        assert_eq!(
            allocator.entry(AsnafCategory::ThePoor).amount,
            Decimal::new(300, 0)
        );
        assert_eq!(
            allocator.entry(AsnafCategory::TheNeedy).amount,
            Decimal::new(250, 0)
        );
        assert_invariants(&allocator);
    }

    #[test]
    fn test_invalid_scholar_table_leaves_state_untouched() {
        let mut allocator = DistributionAllocator::new(Decimal::new(1000, 0));
        let before = allocator.clone();

        let mut weights = ScholarWeights::default();
        weights.the_poor = Decimal::new(90, 0);
        let err = allocator.distribute_by_scholar(&weights).unwrap_err();

        assert!(matches!(err, ZakatError::InvalidWeights { .. }));
        assert_eq!(allocator, before);
    }

    #[test]
    fn test_set_percentage_renormalizes_proportionally() {
        // 40 % to the poor from an equal split leaves (100 - 40) / 7 for
        // each of the other seven.
        let mut allocator = DistributionAllocator::new(Decimal::new(1000, 0));
        allocator.set_percentage(AsnafCategory::ThePoor, Decimal::new(40, 0));

        assert_eq!(allocator.mode(), DistributionMode::Custom);
        assert_eq!(
            allocator.entry(AsnafCategory::ThePoor).percentage,
            Decimal::new(40, 0)
        );

        let expected = Decimal::new(60, 0) / Decimal::from(7);
        for entry in allocator.entries() {
            if entry.category != AsnafCategory::ThePoor {
                assert!((entry.percentage - expected).abs() < Decimal::new(1, 6));
            }
        }

        let sum: Decimal = allocator.entries().iter().map(|e| e.percentage).sum();
        assert_eq!(sum, Decimal::ONE_HUNDRED);
        assert_invariants(&allocator);
    }

    #[test]
    fn test_renormalization_preserves_relative_proportions() {
        let mut allocator = DistributionAllocator::new(Decimal::new(1000, 0));
        allocator.set_percentage(AsnafCategory::ThePoor, Decimal::new(40, 0));
        allocator.set_percentage(AsnafCategory::TheNeedy, Decimal::new(30, 0));

        // After the second edit the poor's 40 was scaled with the rest; the
        // untouched six kept their proportions relative to each other.
        let poor = allocator.entry(AsnafCategory::ThePoor).percentage;
        let debtors = allocator.entry(AsnafCategory::Debtors).percentage;
        let wayfarers = allocator.entry(AsnafCategory::Wayfarers).percentage;

        assert!((debtors - wayfarers).abs() < Decimal::new(1, 6));
        assert!(poor > debtors);
        assert_invariants(&allocator);
    }

    #[test]
    fn test_set_percentage_clamps_to_range() {
        let mut allocator = DistributionAllocator::new(Decimal::new(800, 0));

        allocator.set_percentage(AsnafCategory::Debtors, Decimal::new(150, 0));
        assert_eq!(
            allocator.entry(AsnafCategory::Debtors).percentage,
            Decimal::ONE_HUNDRED
        );
        for entry in allocator.entries() {
            if entry.category != AsnafCategory::Debtors {
                assert_eq!(entry.percentage, Decimal::ZERO);
            }
        }
        assert_invariants(&allocator);

        allocator.set_percentage(AsnafCategory::Wayfarers, Decimal::new(-10, 0));
        assert_eq!(
            allocator.entry(AsnafCategory::Wayfarers).percentage,
            Decimal::ZERO
        );
        assert_invariants(&allocator);
    }

    #[test]
    fn test_zero_others_fall_back_to_equal_split() {
        let mut allocator = DistributionAllocator::new(Decimal::new(700, 0));

        // Drive all other categories to zero, then pull the single holder
        // back down; the freed 40 has no proportions to follow.
        allocator.set_percentage(AsnafCategory::ThePoor, Decimal::ONE_HUNDRED);
        allocator.set_percentage(AsnafCategory::ThePoor, Decimal::new(60, 0));

        let expected = Decimal::new(40, 0) / Decimal::from(7);
        for entry in allocator.entries() {
            if entry.category != AsnafCategory::ThePoor {
                assert!((entry.percentage - expected).abs() < Decimal::new(1, 6));
            }
        }
        assert_invariants(&allocator);
    }

    #[test]
    fn test_set_total_due_recomputes_amounts_only() {
        let mut allocator = DistributionAllocator::new(Decimal::new(1000, 0));
        allocator.set_percentage(AsnafCategory::ThePoor, Decimal::new(40, 0));
        let percentages: Vec<Decimal> =
            allocator.entries().iter().map(|e| e.percentage).collect();

        allocator.set_total_due(Decimal::new(2000, 0));

        let after: Vec<Decimal> = allocator.entries().iter().map(|e| e.percentage).collect();
        assert_eq!(percentages, after);
        assert_eq!(allocator.mode(), DistributionMode::Custom);
        assert_eq!(
            allocator.entry(AsnafCategory::ThePoor).amount,
            Decimal::new(800, 0)
        );
        assert_invariants(&allocator);
    }

    #[test]
    fn test_zero_due_distributes_nothing() {
        let mut allocator = DistributionAllocator::new(Decimal::ZERO);
        allocator.set_percentage(AsnafCategory::Captives, Decimal::new(55, 0));

        for entry in allocator.entries() {
            assert_eq!(entry.amount, Decimal::ZERO);
        }
        assert_invariants(&allocator);
    }

    #[test]
    fn test_invariants_hold_across_mutation_sequences() {
        let mut allocator = DistributionAllocator::new(Decimal::new(1250, 0));
        let edits = [
            (AsnafCategory::ThePoor, Decimal::new(40, 0)),
            (AsnafCategory::Wayfarers, Decimal::new(3, 0)),
            (AsnafCategory::CauseOfAllah, Decimal::new(22, 0)),
            (AsnafCategory::TheNeedy, Decimal::ZERO),
            (AsnafCategory::Administrators, Decimal::new(97, 0)),
        ];

        for (category, percentage) in edits {
            allocator.set_percentage(category, percentage);
            assert_invariants(&allocator);
        }

        allocator.distribute_by_scholar(&ScholarWeights::default()).unwrap();
        assert_invariants(&allocator);

        allocator.distribute_equally();
        assert_invariants(&allocator);
        assert_eq!(allocator.mode(), DistributionMode::Equal);
    }
}
