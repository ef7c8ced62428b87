//! Lenient coercion of raw form input.
//!
//! Nothing here fails: malformed values degrade to a safe default and a
//! warning is logged.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Quantity used whenever raw input is missing, malformed, or below one.
pub const DEFAULT_QUANTITY: u32 = 1;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern is valid"));

/// Parses a quantity field.
///
/// Reads the leading integer (`"3.7"` is 3, `"12 jobs"` is 12). Input that
/// has no leading integer, overflows, or is below one becomes
/// [`DEFAULT_QUANTITY`].
pub fn parse_quantity(raw: &str) -> u32 {
    let parsed = LEADING_INTEGER
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i64>().ok());

    match parsed.and_then(|n| u32::try_from(n).ok()) {
        Some(n) if n >= DEFAULT_QUANTITY => n,
        _ => {
            tracing::warn!(input = %raw, "invalid quantity, using {}", DEFAULT_QUANTITY);
            DEFAULT_QUANTITY
        }
    }
}

/// Parses a price field, tolerating a leading `$` and comma thousands
/// separators. Returns `None` for empty or unparseable input.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().trim_start_matches('$').replace(',', "");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %raw, "invalid price: {}", e);
            None
        },
        Some,
    )
}

/// Largest accepted unit price. At `u32::MAX` units a subtotal stays
/// far below `Decimal::MAX`.
pub const MAX_UNIT_PRICE: Decimal = dec!(1000000000);

/// Clamps a unit price into `0..=MAX_UNIT_PRICE`.
pub fn clamp_price(price: Decimal) -> Decimal {
    if price.is_sign_negative() {
        tracing::warn!(%price, "negative price, using 0");
        Decimal::ZERO
    } else if price > MAX_UNIT_PRICE {
        tracing::warn!(%price, "price too large, using {}", MAX_UNIT_PRICE);
        MAX_UNIT_PRICE
    } else {
        price
    }
}
