//! Fixed-point totals.
//!
//! [`aggregate_exact`] is an opt-in alternative to [`aggregate`](super::aggregate).
//! Each `f64` input is converted to a [`Decimal`] via its shortest decimal
//! representation, every row subtotal and row VAT is rounded half away from
//! zero to the currency's minor units, and the rounded rows are summed.
//!
//! This changes behaviour relative to the float totals: a row such as
//! `3 × 29.99 @ 7 %` contributes `6.30` VAT here and `6.2979…` there.
//! Callers switching to exact totals should expect the displayed figures to
//! move by up to half a minor unit per row.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currencies;
use super::error::InvoiceError;
use super::types::LineItem;

/// Rounded amounts of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExactRow {
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

/// Document totals in fixed-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExactTotals {
    pub subtotal: Decimal,
    pub total_vat: Decimal,
    /// Always exactly `subtotal + total_vat`.
    pub grand_total: Decimal,
}

/// Rounded subtotal, VAT and total for one row.
///
/// `index` is only used to label errors.
pub fn exact_row(
    item: &LineItem,
    index: usize,
    minor_units: u32,
) -> Result<ExactRow, InvoiceError> {
    let quantity = to_decimal(item.quantity, index, "quantity")?;
    let unit_price = to_decimal(item.unit_price, index, "unit_price")?;
    let vat_rate = to_decimal(item.vat_rate, index, "vat_rate")?;

    let subtotal = quantity
        .checked_mul(unit_price)
        .map(|v| round_half_up(v, minor_units))
        .ok_or_else(|| overflow(index))?;
    let vat = subtotal
        .checked_mul(vat_rate)
        .map(|v| round_half_up(v / dec!(100), minor_units))
        .ok_or_else(|| overflow(index))?;

    Ok(ExactRow {
        subtotal,
        vat,
        total: subtotal + vat,
    })
}

/// Aggregate `items` with fixed-point arithmetic, rounding each row to the
/// minor units of `currency`.
///
/// # Errors
///
/// `InvoiceError::UnknownCurrency` when `currency` is not in the currency
/// table, `InvoiceError::Arithmetic` for non-finite or out-of-range inputs.
pub fn aggregate_exact<'a, I>(items: I, currency: &str) -> Result<ExactTotals, InvoiceError>
where
    I: IntoIterator<Item = &'a LineItem>,
{
    let minor_units = currencies::minor_units(currency)
        .ok_or_else(|| InvoiceError::UnknownCurrency(currency.to_string()))?;

    let mut subtotal = Decimal::ZERO;
    let mut total_vat = Decimal::ZERO;
    for (index, item) in items.into_iter().enumerate() {
        let row = exact_row(item, index, minor_units)?;
        subtotal = subtotal
            .checked_add(row.subtotal)
            .ok_or_else(|| overflow(index))?;
        total_vat = total_vat.checked_add(row.vat).ok_or_else(|| overflow(index))?;
    }

    let grand_total = subtotal
        .checked_add(total_vat)
        .ok_or_else(|| InvoiceError::Arithmetic("grand total overflows".into()))?;

    Ok(ExactTotals {
        subtotal,
        total_vat,
        grand_total,
    })
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn to_decimal(value: f64, index: usize, field: &str) -> Result<Decimal, InvoiceError> {
    if !value.is_finite() {
        return Err(InvoiceError::Arithmetic(format!(
            "lines[{index}].{field} is not a finite number"
        )));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        InvoiceError::Arithmetic(format!(
            "lines[{index}].{field} {value} is outside the decimal range"
        ))
    })
}

fn overflow(index: usize) -> InvoiceError {
    InvoiceError::Arithmetic(format!("lines[{index}] amount overflows"))
}
