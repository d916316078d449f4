//! Raw per-category asset inputs
//!
//! These are the field sets the asset-input collaborators fill in. Absent
//! fields deserialize to zero, and `sanitized()` clamps negatives to zero,
//! so an input set is never partially invalid by the time it reaches the
//! aggregators. Every category carries its own hawl flag.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{clamp_non_negative, AssetCategory};

/// Cash and bank holdings, already expressed in the display currency
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashInput {
    pub cash_on_hand: Decimal,
    pub checking_account: Decimal,
    pub savings_account: Decimal,
    pub digital_wallets: Decimal,
    pub foreign_currency: Decimal,
    pub hawl_met: bool,
}

impl CashInput {
    pub fn sanitized(&self) -> Self {
        Self {
            cash_on_hand: clamp_non_negative(self.cash_on_hand),
            checking_account: clamp_non_negative(self.checking_account),
            savings_account: clamp_non_negative(self.savings_account),
            digital_wallets: clamp_non_negative(self.digital_wallets),
            foreign_currency: clamp_non_negative(self.foreign_currency),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total(&self) -> Decimal {
        self.cash_on_hand
            + self.checking_account
            + self.savings_account
            + self.digital_wallets
            + self.foreign_currency
    }
}

/// Gold and silver holdings by weight, split by use.
///
/// Regular-use (worn) jewelry is exempt; occasional-use and investment
/// holdings are zakatable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreciousMetalsInput {
    pub gold_regular_grams: Decimal,
    pub gold_occasional_grams: Decimal,
    pub gold_investment_grams: Decimal,
    pub silver_regular_grams: Decimal,
    pub silver_occasional_grams: Decimal,
    pub silver_investment_grams: Decimal,
    pub hawl_met: bool,
}

impl PreciousMetalsInput {
    pub fn sanitized(&self) -> Self {
        Self {
            gold_regular_grams: clamp_non_negative(self.gold_regular_grams),
            gold_occasional_grams: clamp_non_negative(self.gold_occasional_grams),
            gold_investment_grams: clamp_non_negative(self.gold_investment_grams),
            silver_regular_grams: clamp_non_negative(self.silver_regular_grams),
            silver_occasional_grams: clamp_non_negative(self.silver_occasional_grams),
            silver_investment_grams: clamp_non_negative(self.silver_investment_grams),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total_gold_grams(&self) -> Decimal {
        self.gold_regular_grams + self.gold_occasional_grams + self.gold_investment_grams
    }

    pub fn total_silver_grams(&self) -> Decimal {
        self.silver_regular_grams + self.silver_occasional_grams + self.silver_investment_grams
    }

    /// Occasional-use + investment gold, the weight the individual nisab
    /// check runs on
    pub fn zakatable_gold_grams(&self) -> Decimal {
        self.gold_occasional_grams + self.gold_investment_grams
    }

    /// Occasional-use + investment silver
    pub fn zakatable_silver_grams(&self) -> Decimal {
        self.silver_occasional_grams + self.silver_investment_grams
    }
}

/// Equity holdings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StocksInput {
    /// Market value of actively traded positions
    pub active_trading_value: Decimal,
    /// Market value of passive long-term holdings
    pub passive_holdings_value: Decimal,
    /// Dividends received and still held
    pub dividends_value: Decimal,
    pub hawl_met: bool,
}

impl StocksInput {
    pub fn sanitized(&self) -> Self {
        Self {
            active_trading_value: clamp_non_negative(self.active_trading_value),
            passive_holdings_value: clamp_non_negative(self.passive_holdings_value),
            dividends_value: clamp_non_negative(self.dividends_value),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total(&self) -> Decimal {
        self.active_trading_value + self.passive_holdings_value + self.dividends_value
    }
}

/// Retirement accounts
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementInput {
    /// Vested funds the holder could withdraw today
    pub accessible_value: Decimal,
    /// Funds locked until a future vesting or age condition
    pub locked_value: Decimal,
    pub hawl_met: bool,
}

impl RetirementInput {
    pub fn sanitized(&self) -> Self {
        Self {
            accessible_value: clamp_non_negative(self.accessible_value),
            locked_value: clamp_non_negative(self.locked_value),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total(&self) -> Decimal {
        self.accessible_value + self.locked_value
    }
}

/// Real-estate holdings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateInput {
    /// Primary residence, exempt
    pub primary_residence_value: Decimal,
    /// Accumulated rental income
    pub rental_income_value: Decimal,
    /// Property held for sale, at market value
    pub for_sale_value: Decimal,
    pub hawl_met: bool,
}

impl RealEstateInput {
    pub fn sanitized(&self) -> Self {
        Self {
            primary_residence_value: clamp_non_negative(self.primary_residence_value),
            rental_income_value: clamp_non_negative(self.rental_income_value),
            for_sale_value: clamp_non_negative(self.for_sale_value),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total(&self) -> Decimal {
        self.primary_residence_value + self.rental_income_value + self.for_sale_value
    }
}

/// Cryptocurrency holdings, treated as trade goods
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoInput {
    /// Market value of spot holdings
    pub spot_value: Decimal,
    /// Market value of staked positions
    pub staked_value: Decimal,
    pub hawl_met: bool,
}

impl CryptoInput {
    pub fn sanitized(&self) -> Self {
        Self {
            spot_value: clamp_non_negative(self.spot_value),
            staked_value: clamp_non_negative(self.staked_value),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total(&self) -> Decimal {
        self.spot_value + self.staked_value
    }
}

/// Money owed to the holder
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivablesInput {
    /// Debts repayment is expected on
    pub good_debts_value: Decimal,
    /// Debts repayment is doubtful on
    pub doubtful_debts_value: Decimal,
    pub hawl_met: bool,
}

impl ReceivablesInput {
    pub fn sanitized(&self) -> Self {
        Self {
            good_debts_value: clamp_non_negative(self.good_debts_value),
            doubtful_debts_value: clamp_non_negative(self.doubtful_debts_value),
            hawl_met: self.hawl_met,
        }
    }

    pub fn total(&self) -> Decimal {
        self.good_debts_value + self.doubtful_debts_value
    }
}

/// The full per-category input set consumed by one assessment run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetInputs {
    pub cash: CashInput,
    pub precious_metals: PreciousMetalsInput,
    pub stocks: StocksInput,
    pub retirement: RetirementInput,
    pub real_estate: RealEstateInput,
    pub crypto: CryptoInput,
    pub receivables: ReceivablesInput,
}

impl AssetInputs {
    /// Clamp every numeric sub-field to the non-negative range
    pub fn sanitized(&self) -> Self {
        Self {
            cash: self.cash.sanitized(),
            precious_metals: self.precious_metals.sanitized(),
            stocks: self.stocks.sanitized(),
            retirement: self.retirement.sanitized(),
            real_estate: self.real_estate.sanitized(),
            crypto: self.crypto.sanitized(),
            receivables: self.receivables.sanitized(),
        }
    }

    /// Hawl flag for a category
    pub fn hawl_met(&self, category: AssetCategory) -> bool {
        match category {
            AssetCategory::Cash => self.cash.hawl_met,
            AssetCategory::PreciousMetals => self.precious_metals.hawl_met,
            AssetCategory::Stocks => self.stocks.hawl_met,
            AssetCategory::Retirement => self.retirement.hawl_met,
            AssetCategory::RealEstate => self.real_estate.hawl_met,
            AssetCategory::Crypto => self.crypto.hawl_met,
            AssetCategory::Receivables => self.receivables.hawl_met,
        }
    }

    /// Whether any category has completed its hawl
    pub fn any_hawl_met(&self) -> bool {
        AssetCategory::ALL
            .iter()
            .any(|category| self.hawl_met(*category))
    }
}
