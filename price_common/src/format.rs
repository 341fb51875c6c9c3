//! Text formatting for the display slots.
//!
//! Prices are rounded half away from zero to two decimals and grouped with `,`
//! every three integer digits, e.g. `1234.5` becomes `1,234.50`.

use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};

/// Text shown for an asset the API returned no value for.
pub const PLACEHOLDER: &str = "---";

/// Formats an optional price, substituting [`PLACEHOLDER`] when absent.
pub fn format_price(value: Option<Decimal>) -> String {
    match value {
        Some(amount) => format_amount(amount),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats `amount` with exactly two decimals and thousands separators.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    format!("{}{}.{}", sign, group_thousands(digits), fraction)
}

/// Text for the "last updated" slot.
pub fn format_updated(observed_at: &DateTime<Local>) -> String {
    format!("Updated {}", observed_at.format("%H:%M:%S"))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
