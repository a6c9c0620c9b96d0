//! Display formatting and input coercion.
//!
//! Amounts are rendered the way the Turkish locale prints currency, e.g.
//! `₺1.440,00`: `.` groups thousands and `,` separates the fraction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use super::currencies;
use super::exact::round_half_up;
use super::types::DEFAULT_CURRENCY;

/// Magnitude from which amounts are rendered straight from the `f64`.
/// Above it `Decimal::from_f64` loses digits or fails outright.
const DECIMAL_SAFE_LIMIT: f64 = 1e15;

/// Format `amount` as Turkish lira, e.g. `₺1.440,00`.
pub fn format_money(amount: f64) -> String {
    format_money_in(amount, DEFAULT_CURRENCY)
}

/// Format `amount` in `currency` with Turkish digit grouping.
///
/// Currencies with a customary symbol get it as a prefix (`$1.440,00`),
/// others are prefixed with their code (`CHF 1.440,00`). The number of
/// fraction digits follows the currency's minor units, defaulting to 2.
/// Non-finite amounts render as zero.
pub fn format_money_in(amount: f64, currency: &str) -> String {
    let dp = currencies::minor_units(currency).unwrap_or(2);
    let number = if !amount.is_finite() {
        format_decimal(Decimal::ZERO, dp)
    } else if amount.abs() >= DECIMAL_SAFE_LIMIT {
        group_digits(&format!("{:.*}", dp as usize, amount), dp)
    } else {
        match Decimal::from_f64(amount) {
            Some(value) => format_decimal(round_half_up(value, dp), dp),
            None => group_digits(&format!("{:.*}", dp as usize, amount), dp),
        }
    };

    let prefix = match currencies::symbol(currency) {
        Some(sym) => sym.to_string(),
        None => format!("{currency} "),
    };
    match number.strip_prefix('-') {
        Some(digits) => format!("-{prefix}{digits}"),
        None => format!("{prefix}{number}"),
    }
}

/// Format a date as `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Coerce a raw numeric input to `f64`.
///
/// Empty, non-numeric and non-finite text becomes `0`, so a half-typed
/// field never breaks the totals.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Render an already-rounded value with `dp` fraction digits, `.` thousands
/// separators and a `,` decimal separator.
fn format_decimal(value: Decimal, dp: u32) -> String {
    let plain = if value.is_zero() {
        value.abs().to_string()
    } else {
        value.to_string()
    };
    group_digits(&plain, dp)
}

/// Regroup a plain `-1234.5` style number as `-1.234,50`.
fn group_digits(plain: &str, dp: u32) -> String {
    let (negative, plain) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain),
    };
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if dp > 0 {
        out.push(',');
        out.push_str(frac_part);
        for _ in frac_part.len()..dp as usize {
            out.push('0');
        }
    }
    out
}
