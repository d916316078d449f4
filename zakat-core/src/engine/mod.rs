//! Zakat Engine
//!
//! Combines category breakdowns, per-category hawl flags and the nisab
//! verdict into a single assessment. Every invocation recomputes from
//! scratch over the supplied snapshots; the engine holds no hidden state
//! and performs no I/O, so concurrent assessments over different inputs
//! cannot interfere.

use rust_decimal::Decimal;
use tracing::debug;

use crate::aggregation;
use crate::config::{NisabBasis, ZakatConfig};
use crate::nisab::NisabEvaluator;
use crate::types::{
    AssetCategory, AssetInputs, MetalPrices, NisabStatus, RateTable, ZakatAssessment,
};

/// The fixed zakat rate, 2.5 %. Never configurable per category.
pub fn zakat_rate() -> Decimal {
    Decimal::new(25, 3)
}

/// Decimal places zakat due is reported at
const DUE_SCALE: u32 = 2;

/// Zakat engine
#[derive(Clone, Debug, Default)]
pub struct ZakatEngine {
    config: ZakatConfig,
    evaluator: NisabEvaluator,
}

impl ZakatEngine {
    /// Create an engine with the given policy configuration
    pub fn new(config: ZakatConfig) -> Self {
        Self {
            config,
            evaluator: NisabEvaluator::new(),
        }
    }

    /// Policy configuration in effect
    pub fn config(&self) -> &ZakatConfig {
        &self.config
    }

    /// Run one assessment over the supplied input and market snapshots.
    ///
    /// Eligibility requires a completed hawl on the contributing categories
    /// and a nisab condition; once any qualifying condition is met, the
    /// entire hawl-qualified zakatable pool is due, not just the sub-pool
    /// that triggered it.
    pub fn assess(
        &self,
        inputs: &AssetInputs,
        prices: &MetalPrices,
        table: &RateTable,
    ) -> ZakatAssessment {
        let inputs = inputs.sanitized();
        let breakdown =
            aggregation::aggregate(&inputs, prices, table, &self.config.display_currency);

        let total_assets = breakdown.total_assets();

        // Only categories that completed their hawl contribute to the pool
        // the rate applies to.
        let qualified_pool: Decimal = AssetCategory::ALL
            .iter()
            .filter(|category| inputs.hawl_met(**category))
            .map(|category| breakdown.get(*category).zakatable)
            .sum();

        let metals_zakatable = if inputs.precious_metals.hawl_met {
            breakdown.precious_metals.zakatable
        } else {
            Decimal::ZERO
        };
        let monetary_pool = qualified_pool - metals_zakatable;

        let (nisab, is_eligible) = match self.config.nisab_basis {
            NisabBasis::EitherThreshold => {
                let metals_qualify = inputs.precious_metals.hawl_met
                    && breakdown
                        .precious_metals
                        .meets_nisab_individually
                        .unwrap_or(false);
                let nisab = self
                    .evaluator
                    .evaluate(
                        self.config.monetary_threshold_metal,
                        prices,
                        table,
                        &self.config.display_currency,
                    )
                    .assessed_against(monetary_pool);
                let eligible = metals_qualify || nisab.meets_nisab;
                (nisab, eligible)
            }
            NisabBasis::LowerOfTwo => {
                let nisab = self
                    .evaluator
                    .evaluate_lower(prices, table, &self.config.display_currency)
                    .assessed_against(qualified_pool);
                let eligible = nisab.meets_nisab;
                (nisab, eligible)
            }
        };

        let zakat_due = if is_eligible {
            (qualified_pool * zakat_rate()).round_dp(DUE_SCALE)
        } else {
            Decimal::ZERO
        };

        debug!(
            %total_assets,
            %qualified_pool,
            %zakat_due,
            is_eligible,
            "assessment complete"
        );

        ZakatAssessment {
            total_assets,
            zakatable_amount: qualified_pool,
            zakat_due,
            is_eligible,
            nisab,
            breakdown,
        }
    }

    /// Establish the current nisab status without running a full
    /// assessment, for display collaborators.
    pub fn nisab_status(&self, prices: &MetalPrices, table: &RateTable) -> NisabStatus {
        match self.config.nisab_basis {
            NisabBasis::EitherThreshold => self.evaluator.evaluate(
                self.config.monetary_threshold_metal,
                prices,
                table,
                &self.config.display_currency,
            ),
            NisabBasis::LowerOfTwo => {
                self.evaluator
                    .evaluate_lower(prices, table, &self.config.display_currency)
            }
        }
    }
}
