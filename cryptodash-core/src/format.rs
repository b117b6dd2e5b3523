//! Display formatting for numeric table cells.
//!
//! Every function here is pure and total. Null, NaN and infinite inputs render
//! as [`PLACEHOLDER`] so one bad cell never aborts a table render.
//!
//! - Currency: `$` with comma grouping, 4 fraction digits below $1, else 2.
//! - Percentage: `+` sign for values >= 0 (zero included), fixed decimals.
//! - Compact: B/M/K suffix for volumes and market caps.

use serde::{Deserialize, Serialize};

/// Rendered in place of a missing or non-finite value.
pub const PLACEHOLDER: &str = "-";

/// Semantic type of a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueKind {
    Currency,
    Percentage { decimals: usize },
    Number { decimals: usize },
    Compact { decimals: usize },
    /// Holding sizes: up to three decimals, trailing zeros trimmed.
    Quantity,
}

impl ValueKind {
    /// Two-decimal signed percentage, the most common call site.
    pub const PERCENT: ValueKind = ValueKind::Percentage { decimals: 2 };
    /// Volumes and market caps: no decimals below $1K.
    pub const COMPACT: ValueKind = ValueKind::Compact { decimals: 0 };
}

/// Format an optional value according to its kind.
pub fn format_value(value: Option<f64>, kind: ValueKind) -> String {
    let Some(v) = value else {
        return PLACEHOLDER.to_string();
    };
    match kind {
        ValueKind::Currency => currency(v),
        ValueKind::Percentage { decimals } => percent(v, decimals),
        ValueKind::Number { decimals } => number(v, decimals),
        ValueKind::Compact { decimals } => compact(v, decimals),
        ValueKind::Quantity => quantity(v),
    }
}

/// `$1,234.56`, or `$0.4500` when the magnitude is below 1.
pub fn currency(v: f64) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let decimals = if v.abs() < 1.0 { 4 } else { 2 };
    let digits = format!("{:.*}", decimals, v.abs());
    let sign = if v < 0.0 && !is_all_zero(&digits) { "-" } else { "" };
    format!("{sign}${}", group_digits(&digits))
}

/// `+2.40%` / `-1.20%`. Zero is rendered with a plus sign.
pub fn percent(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    // Normalise -0.0 so it takes the non-negative branch and prints without a sign.
    let v = if v == 0.0 { 0.0 } else { v };
    let sign = if v >= 0.0 { "+" } else { "" };
    format!("{sign}{:.*}%", decimals, v)
}

/// `$1.2B`, `$345.6M`, `$12.0K`, else the literal value with `decimals` places.
pub fn compact(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let abs = v.abs();
    let sign = if v < 0.0 { "-" } else { "" };
    if abs >= 1e9 {
        format!("{sign}${:.1}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{sign}${:.1}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{sign}${:.1}K", abs / 1e3)
    } else {
        let digits = format!("{:.*}", decimals, abs);
        let sign = if is_all_zero(&digits) { "" } else { sign };
        format!("{sign}${digits}")
    }
}

/// Plain fixed-point number, e.g. RSI `68.50` or beta `1.20`.
pub fn number(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{:.*}", decimals, v)
}

/// Grouped quantity with up to three fraction digits and no trailing zeros:
/// `532,875`, `1,247.8`, `24.125`.
pub fn quantity(v: f64) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let digits = format!("{:.3}", v.abs());
    let trimmed = digits.trim_end_matches('0').trim_end_matches('.');
    let sign = if v < 0.0 && !is_all_zero(trimmed) { "-" } else { "" };
    format!("{sign}{}", group_digits(trimmed))
}

/// Insert thousands separators into the integer part of an unsigned decimal string.
fn group_digits(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 + digits.len() - len);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn is_all_zero(digits: &str) -> bool {
    digits.chars().all(|c| c == '0' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_millions() {
        assert_eq!(format_value(Some(1_234_567.0), ValueKind::COMPACT), "$1.2M");
        assert_eq!(compact(28_500_000_000.0, 0), "$28.5B");
        assert_eq!(compact(12_000.0, 0), "$12.0K");
    }

    #[test]
    fn compact_below_thousand_keeps_literal_decimals() {
        assert_eq!(compact(999.5, 2), "$999.50");
        assert_eq!(compact(42.0, 0), "$42");
        assert_eq!(compact(-1_500.0, 0), "-$1.5K");
    }

    #[test]
    fn currency_uses_four_digits_below_one() {
        assert_eq!(format_value(Some(0.45), ValueKind::Currency), "$0.4500");
        assert_eq!(currency(0.485), "$0.4850");
        assert_eq!(currency(43_250.0), "$43,250.00");
        assert_eq!(currency(1_041_250.0), "$1,041,250.00");
        assert_eq!(currency(1.0), "$1.00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(currency(-1_250.3), "-$1,250.30");
        assert_eq!(currency(-0.00001), "$0.0000");
    }

    #[test]
    fn percent_sign_policy() {
        assert_eq!(format_value(Some(-1.2), ValueKind::PERCENT), "-1.20%");
        assert_eq!(format_value(Some(2.4), ValueKind::PERCENT), "+2.40%");
        assert_eq!(percent(0.0, 2), "+0.00%");
        assert_eq!(percent(-0.0, 1), "+0.0%");
        assert_eq!(percent(5.8, 1), "+5.8%");
    }

    #[test]
    fn missing_and_non_finite_render_placeholder() {
        for kind in [
            ValueKind::Currency,
            ValueKind::PERCENT,
            ValueKind::COMPACT,
            ValueKind::Number { decimals: 2 },
        ] {
            assert_eq!(format_value(None, kind), PLACEHOLDER);
            assert_eq!(format_value(Some(f64::NAN), kind), PLACEHOLDER);
            assert_eq!(format_value(Some(f64::INFINITY), kind), PLACEHOLDER);
        }
    }

    #[test]
    fn number_and_quantity() {
        assert_eq!(number(68.5, 2), "68.50");
        assert_eq!(number(-0.0, 2), "0.00");
        assert_eq!(quantity(532_875.0), "532,875");
        assert_eq!(quantity(1_247.8), "1,247.8");
        assert_eq!(quantity(24.125), "24.125");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("1234567.89"), "1,234,567.89");
    }

    #[test]
    fn formatting_is_deterministic() {
        let a = format_value(Some(98.45), ValueKind::Currency);
        let b = format_value(Some(98.45), ValueKind::Currency);
        assert_eq!(a, b);
    }
}
