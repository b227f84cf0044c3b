//! Brazilian Portuguese number conventions.
//!
//! The web forms collect amounts as `"1.234,56"` (dot for thousands,
//! comma for decimals) and show results the same way.  The calculators
//! only ever see `f64`; these helpers sit at the edge.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LocaleError {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

/// Parses a pt-BR formatted number such as `"1.234,56"` or
/// `"R$ 18.500,00"`.  An empty string parses as zero.
pub fn parse_decimal(input: &str) -> Result<f64, LocaleError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let normalised = trimmed.replace('.', "").replacen(',', ".", 1);
    normalised
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LocaleError::InvalidNumber(input.to_string()))
}

/// Formats a monetary amount with two decimals: `1234.5` → `"1.234,50"`.
pub fn format_money(value: f64) -> String {
    format_decimal(value, 2)
}

/// Formats a monetary amount with the currency symbol: `"R$ 1.234,50"`.
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_money(value))
}

/// Rounds to the nearest integer and groups thousands: `12345.6` →
/// `"12.346"`.
pub fn format_integer(value: f64) -> String {
    format_decimal(value.round(), 0)
}

/// Formats a percentage value (already multiplied by 100) with the
/// given number of decimals: `(12.5, 1)` → `"12,5"`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format_decimal(value, decimals)
}

fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
