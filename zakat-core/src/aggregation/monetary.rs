//! Cash and receivables rules

use crate::types::{CashInput, CategoryBreakdown, ReceivablesInput};

/// Cash and bank balances are fully zakatable.
pub fn aggregate_cash(input: &CashInput) -> CategoryBreakdown {
    let total = input.total();
    CategoryBreakdown::new(total, total)
}

/// Good debts are zakatable; doubtful debts stay in the total but carry no
/// zakat until repayment becomes expected.
pub fn aggregate_receivables(input: &ReceivablesInput) -> CategoryBreakdown {
    CategoryBreakdown::new(input.total(), input.good_debts_value)
}
