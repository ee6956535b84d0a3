use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a number written in national format (`1.234,56`).
///
/// Thousands separators (`.`) are stripped and the decimal comma becomes a
/// point. Anything that still fails to parse, including the empty string,
/// yields zero rather than an error.
pub fn normalize_decimal(s: &str) -> Decimal {
    let normalized = s.trim().replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Render a value in national format with at least two fractional digits.
///
/// `normalize_decimal(&render_decimal(x)) == x` for every `x`.
pub fn render_decimal(value: Decimal) -> String {
    let mut v = value;
    if v.scale() < 2 {
        v.rescale(2);
    }

    let plain = v.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if v.is_sign_negative() && !v.is_zero() { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}
