//! Currency rounding and formatting
//!
//! All amounts are carried as unrounded `f64` pounds. Rounding happens here,
//! at render time, half away from zero to the nearest penny. Each figure is
//! rounded on its own; rounded pillar amounts are not forced to reconcile
//! with the rounded pool.

/// Symbol prefixed to rendered amounts
pub const CURRENCY_SYMBOL: char = '£';

/// Round pounds to whole pennies, half away from zero
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_pennies(pounds: f64) -> i64 {
    (pounds * 100.0).round() as i64
}

/// Round pounds to two decimal places, half away from zero
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn round_currency(pounds: f64) -> f64 {
    to_pennies(pounds) as f64 / 100.0
}

/// `£12.34`, or `-£12.34` for negative amounts
#[must_use]
pub fn format_gbp(pounds: f64) -> String {
    let pennies = to_pennies(pounds);
    let sign = if pennies < 0 { "-" } else { "" };
    let abs = pennies.unsigned_abs();
    format!("{sign}{CURRENCY_SYMBOL}{}.{:02}", abs / 100, abs % 100)
}

/// `£116,250` style with thousands separators
///
/// Whole amounts print without decimals, anything else with two.
#[must_use]
pub fn format_gbp_grouped(pounds: f64) -> String {
    let pennies = to_pennies(pounds);
    let sign = if pennies < 0 { "-" } else { "" };
    let abs = pennies.unsigned_abs();
    let whole = group_thousands(abs / 100);
    match abs % 100 {
        0 => format!("{sign}{CURRENCY_SYMBOL}{whole}"),
        cents => format!("{sign}{CURRENCY_SYMBOL}{whole}.{cents:02}"),
    }
}

/// Rate as a percentage label, e.g. `0.029` -> `2.9%`
#[must_use]
pub fn format_rate(rate: f64) -> String {
    let tenths = (rate * 1000.0).round();
    if tenths % 10.0 == 0.0 {
        format!("{:.0}%", tenths / 10.0)
    } else {
        format!("{:.1}%", tenths / 10.0)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_pennies() {
        assert_eq!(to_pennies(0.87), 87);
        assert_eq!(to_pennies(27.9), 2790);
        assert_eq!(to_pennies(0.125), 13);
        assert_eq!(to_pennies(-0.125), -13);
        assert_eq!(round_currency(11.16), 11.16);
    }

    #[test]
    fn formats_pounds() {
        assert_eq!(format_gbp(27.9), "£27.90");
        assert_eq!(format_gbp(0.0), "£0.00");
        assert_eq!(format_gbp(1234.5), "£1234.50");
        assert_eq!(format_gbp(-0.87), "-£0.87");
    }

    #[test]
    fn formats_grouped() {
        assert_eq!(format_gbp_grouped(116_250.0), "£116,250");
        assert_eq!(format_gbp_grouped(1_000_000.0), "£1,000,000");
        assert_eq!(format_gbp_grouped(999.0), "£999");
        assert_eq!(format_gbp_grouped(334.8), "£334.80");
        assert_eq!(format_gbp_grouped(0.0), "£0");
    }

    #[test]
    fn formats_rates() {
        assert_eq!(format_rate(0.029), "2.9%");
        assert_eq!(format_rate(0.035), "3.5%");
        assert_eq!(format_rate(0.006), "0.6%");
        assert_eq!(format_rate(0.93), "93%");
    }
}
