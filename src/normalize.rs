//! Normalization of loosely formatted company attributes.
//!
//! Everything here is total: any input produces a value, malformed or
//! missing data becomes `0` (numbers) or `false` (flags). Callers treat a
//! non-positive number as "undisclosed".

use crate::core::RawValue;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERAL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9,.]+").unwrap());

/// Sentinel the backend uses for values a company did not publish.
pub const UNDISCLOSED_SENTINEL: &str = "N/A";

/// Literals recognized as `true` by [`parse_flag`], compared after trimming
/// and ASCII case folding. Any other text is `false`.
pub const TRUTHY_LITERALS: [&str; 3] = ["true", "1", "あり"];

/// Extract a numeric magnitude from a raw attribute.
///
/// - numbers are returned unchanged
/// - null, booleans and blank text give `0`
/// - text yields its first run of digits, commas and periods with the
///   commas removed (`"1,234,000円"` gives `1234000`), read as the longest
///   valid decimal prefix (`"1.2.3"` gives `1.2`); no usable run gives `0`
pub fn parse_numeric(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => parse_numeric_str(s),
        RawValue::Null | RawValue::Bool(_) => 0.0,
    }
}

/// String form of [`parse_numeric`].
pub fn parse_numeric_str(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    NUMERAL_RUN
        .find(text)
        .map(|m| m.as_str().replace(',', ""))
        .and_then(|digits| parse_decimal_prefix(&digits))
        .unwrap_or(0.0)
}

/// Parse the longest `digits[.digits]` prefix of a string made only of
/// digits and periods.
fn parse_decimal_prefix(digits: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_point = false;
    for (idx, ch) in digits.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
    }

    let candidate = digits[..end].trim_end_matches('.');
    if candidate.is_empty() {
        return None;
    }
    if candidate.starts_with('.') {
        return format!("0{}", candidate).parse::<f64>().ok();
    }
    candidate.parse::<f64>().ok()
}

/// A normalized number counts as disclosed only when strictly positive.
#[inline]
pub fn is_disclosed(value: f64) -> bool {
    value > 0.0
}

/// True for null, blank text and the `"N/A"` sentinel.
pub fn is_undisclosed_text(value: &RawValue) -> bool {
    match value {
        RawValue::Null => true,
        RawValue::Text(s) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed == UNDISCLOSED_SENTINEL
        }
        RawValue::Bool(_) | RawValue::Number(_) => false,
    }
}

/// Interpret a boolean-like attribute.
///
/// Booleans map directly, the number `1` is true, and text is true only
/// when it equals one of [`TRUTHY_LITERALS`]. Arbitrary non-empty text such
/// as `"false"`, `"なし"` or `"yes"` is false.
pub fn parse_flag(value: &RawValue) -> bool {
    match value {
        RawValue::Bool(b) => *b,
        RawValue::Number(n) => *n == 1.0,
        RawValue::Text(s) => {
            let folded = s.trim().to_ascii_lowercase();
            TRUTHY_LITERALS.contains(&folded.as_str())
        }
        RawValue::Null => false,
    }
}
