//! Normalisation of raw user input
//!
//! Text typed into a percentage box is read the way a browser number field
//! hands it over: leading whitespace, an optional sign and a run of digits.
//! Anything after the digits is ignored, and text without digits reads as 0.

/// Upper bound for a single pillar percentage
pub const MAX_PERCENT: u8 = 100;

/// Read the leading integer of `text`
///
/// Returns 0 when no digits can be read. Values too large for `i64`
/// saturate instead of failing.
#[must_use]
pub fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Clamp any integer into the percentage range
#[inline]
#[must_use]
pub fn clamp_percent(value: i64) -> u8 {
    // Lossless after the clamp.
    u8::try_from(value.clamp(0, i64::from(MAX_PERCENT))).unwrap_or(MAX_PERCENT)
}

/// Parse and clamp percentage text in one step
#[inline]
#[must_use]
pub fn normalize_percent_text(text: &str) -> u8 {
    clamp_percent(parse_leading_int(text))
}

/// Clamp a gross amount to a finite, non-negative value
///
/// NaN and negative values become 0; positive infinity becomes `f64::MAX`.
#[inline]
#[must_use]
pub fn clamp_amount(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(0.0, f64::MAX)
    }
}
