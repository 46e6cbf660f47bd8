//! Currency display formatting.
//!
//! The only place in the crate where monetary values are rounded. Amounts
//! are rendered in whole currency units (midpoint rounds away from zero)
//! with thousands separators and the configured currency symbol.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount for display, e.g. `₪26,629`.
///
/// Rounds to whole currency units, midpoint away from zero. Negative
/// amounts carry a leading minus before the symbol.
///
/// # Example
///
/// ```
/// use rewards_engine::document::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("26629.20").unwrap();
/// assert_eq!(format_currency("₪", amount), "₪26,629");
/// ```
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let whole = digits.split('.').next().unwrap_or(&digits);
    let grouped = group_thousands(whole);

    if rounded < Decimal::ZERO {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

/// Formats a delta for display with an explicit sign for positive values,
/// e.g. `+₪2,000`. Zero renders without a sign.
pub fn format_signed_currency(symbol: &str, amount: Decimal) -> String {
    let formatted = format_currency(symbol, amount);
    if amount > Decimal::ZERO && !formatted.starts_with('-') {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
