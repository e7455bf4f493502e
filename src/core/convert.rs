//! Text-to-number conversions used by the input lessons.
//!
//! Learners type numbers the way they write them on paper: `70,5` as well as
//! `70.5`, and sometimes `1_000`. These helpers accept those forms and report
//! anything else as [`LessonError::InvalidNumber`] instead of aborting.

use crate::utils::error::{LessonError, Result};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn invalid(field: &str, text: &str) -> LessonError {
    LessonError::InvalidNumber {
        field: field.to_string(),
        value: text.to_string(),
    }
}

/// Drops `_` separators, which are only allowed between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }

    Some(out)
}

/// Parses a signed integer. Values outside the `i64` range are reported as
/// `InvalidNumber` like any other malformed input.
pub fn parse_integer(field: &str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let cleaned = strip_digit_separators(trimmed).ok_or_else(|| invalid(field, text))?;

    cleaned.parse::<i64>().map_err(|e| {
        tracing::debug!("Integer conversion failed for {}: {}", field, e);
        invalid(field, text)
    })
}

/// Parses a decimal number, accepting a decimal comma.
pub fn parse_decimal(field: &str, text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    let cleaned = strip_digit_separators(&normalized).ok_or_else(|| invalid(field, text))?;

    cleaned.parse::<f64>().map_err(|e| {
        tracing::debug!("Decimal conversion failed for {}: {}", field, e);
        invalid(field, text)
    })
}

/// Renders a float the way the lessons show it: whole values keep one decimal
/// (`9.0`), very large or very small magnitudes switch to `1e+16` notation.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let raw = format!("{:e}", value);
        if let Some((mantissa, exponent)) = raw.split_once('e') {
            if let Ok(exp) = exponent.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
        return raw;
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Spanish month name for `1`..`12` (or `01`..`09`); anything else is echoed lowercased.
pub fn month_name(text: &str) -> String {
    let is_month_number = matches!(text.len(), 1 | 2) && text.bytes().all(|b| b.is_ascii_digit());

    match text.parse::<usize>() {
        Ok(n @ 1..=12) if is_month_number => MONTHS[n - 1].to_string(),
        _ => text.to_lowercase(),
    }
}
