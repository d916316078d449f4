//! Currency Converter
//!
//! Pivot-based cross-rate conversion over a [`RateTable`]. Every cross
//! conversion routes through the base currency; there is no direct
//! cross-rate table, which keeps the rate table linear in the number of
//! currencies. A missing code is an explicit [`ZakatError::RateUnavailable`]
//! and fallback policy belongs to the caller.

use rust_decimal::Decimal;

use crate::error::{ZakatError, ZakatResult};
use crate::types::{CurrencyCode, RateTable};

/// Currency converter
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Create new converter
    pub fn new() -> Self {
        Self
    }

    /// Convert `amount` from one currency into another.
    ///
    /// The same-currency case returns `amount` untouched: no lookup, no
    /// rounding, and no requirement that the table carry a self-rate.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
        table: &RateTable,
    ) -> ZakatResult<Decimal> {
        if from == to {
            return Ok(amount);
        }

        if *from == table.base_currency {
            return Ok(amount * self.factor(table, to)?);
        }

        if *to == table.base_currency {
            return Ok(amount / self.factor(table, from)?);
        }

        // Pivot: into base, then into target.
        let into_base = amount / self.factor(table, from)?;
        Ok(into_base * self.factor(table, to)?)
    }

    fn factor(&self, table: &RateTable, code: &CurrencyCode) -> ZakatResult<Decimal> {
        table.rate(code).ok_or_else(|| ZakatError::RateUnavailable {
            currency: code.as_str().to_string(),
        })
    }
}
