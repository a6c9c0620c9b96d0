//! ISO 4217 currency table.
//!
//! Each entry records the number of minor-unit digits (used when rounding
//! exact totals and when formatting amounts) and, for the currencies the
//! invoice form offers prominently, the display symbol.

struct Currency {
    code: &'static str,
    minor_units: u32,
    symbol: Option<&'static str>,
}

const fn cur(code: &'static str, minor_units: u32, symbol: Option<&'static str>) -> Currency {
    Currency {
        code,
        minor_units,
        symbol,
    }
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Number of minor-unit digits for `code` (2 for TRY/EUR/USD, 0 for JPY).
pub fn minor_units(code: &str) -> Option<u32> {
    lookup(code).map(|c| c.minor_units)
}

/// Display symbol for `code`, if it has a customary one.
pub fn symbol(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|c| c.symbol)
}

fn lookup(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|i| &CURRENCIES[i])
}

/// Sorted by code for binary search.
static CURRENCIES: &[Currency] = &[
    cur("AED", 2, None),      // UAE Dirham
    cur("AUD", 2, None),      // Australian Dollar
    cur("AZN", 2, Some("₼")), // Azerbaijani Manat
    cur("BGN", 2, None),      // Bulgarian Lev
    cur("BHD", 3, None),      // Bahraini Dinar
    cur("CAD", 2, None),      // Canadian Dollar
    cur("CHF", 2, None),      // Swiss Franc
    cur("CNY", 2, None),      // Chinese Yuan
    cur("CZK", 2, None),      // Czech Koruna
    cur("DKK", 2, None),      // Danish Krone
    cur("EGP", 2, None),      // Egyptian Pound
    cur("EUR", 2, Some("€")), // Euro
    cur("GBP", 2, Some("£")), // Pound Sterling
    cur("GEL", 2, Some("₾")), // Georgian Lari
    cur("HUF", 2, None),      // Hungarian Forint
    cur("ILS", 2, None),      // Israeli Shekel
    cur("INR", 2, None),      // Indian Rupee
    cur("IQD", 3, None),      // Iraqi Dinar
    cur("ISK", 0, None),      // Icelandic Krona
    cur("JOD", 3, None),      // Jordanian Dinar
    cur("JPY", 0, Some("¥")), // Japanese Yen
    cur("KRW", 0, None),      // South Korean Won
    cur("KWD", 3, None),      // Kuwaiti Dinar
    cur("KZT", 2, None),      // Kazakhstani Tenge
    cur("NOK", 2, None),      // Norwegian Krone
    cur("PLN", 2, None),      // Polish Zloty
    cur("QAR", 2, None),      // Qatari Riyal
    cur("RON", 2, None),      // Romanian Leu
    cur("RUB", 2, None),      // Russian Ruble
    cur("SAR", 2, None),      // Saudi Riyal
    cur("SEK", 2, None),      // Swedish Krona
    cur("TRY", 2, Some("₺")), // Turkish Lira
    cur("UAH", 2, None),      // Ukrainian Hryvnia
    cur("USD", 2, Some("$")), // US Dollar
    cur("VND", 0, None),      // Vietnamese Dong
    cur("ZAR", 2, None),      // South African Rand
];
