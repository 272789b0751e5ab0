//! Display formatting for monetary and percentage figures, matching the
//! dashboard's card style: whole-dollar currency with thousands separators,
//! percentages with at most one decimal place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole dollars, e.g. `$1,250,000`.
pub fn format_currency(amount: Decimal) -> String {
    format_currency_with(amount, "$")
}

/// `format_currency` with the configured currency symbol.
pub fn format_currency_with(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

/// Formats an amount in compact thousands, e.g. `$95k`, as used for the
/// monthly chart's value axis.
pub fn format_currency_compact(amount: Decimal) -> String {
    format_currency_compact_with(amount, "$")
}

/// `format_currency_compact` with the configured currency symbol.
pub fn format_currency_compact_with(amount: Decimal, symbol: &str) -> String {
    let thousands = (amount / Decimal::from(1_000))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{symbol}{}k", thousands.normalize())
}

/// Formats a percentage with trailing zeros dropped, e.g. `36%`, `30.4%`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Formats a growth percentage with an explicit sign, e.g. `+12.5%`.
pub fn format_growth(value: Decimal) -> String {
    if value.is_sign_negative() {
        format_percentage(value)
    } else {
        format!("+{}", format_percentage(value))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
