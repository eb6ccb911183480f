//! Financial formatting: signed display strings and sign-based accents.
//!
//! Zero is non-negative everywhere in this module: it formats with `+` and
//! resolves to [`Accent::Positive`]. Text and colour therefore always agree.

use serde::{Deserialize, Serialize};

use crate::error::{FormattingError, ValidationError};

/// What a signed number represents on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignedKind {
    /// Plain amount. Callers prepend a currency symbol if they want one.
    Currency,
    /// Percentage; a `%` suffix is appended.
    Percent,
}

/// Visual accent a value resolves to. The palette maps it to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Positive,
    Negative,
    /// Unsigned figures (Sharpe ratio, prices). Never produced by [`color_for`].
    Neutral,
}

/// Accent for a signed value: negative only when strictly below zero.
pub fn color_for(value: f64) -> Accent {
    if value >= 0.0 {
        Accent::Positive
    } else {
        Accent::Negative
    }
}

/// Render `value` with an explicit leading sign and two decimals.
///
/// `-0.0` compares equal to zero and is rendered as `+0.00`.
pub fn format_signed(value: f64, kind: SignedKind) -> Result<String, FormattingError> {
    if !value.is_finite() {
        return Err(FormattingError { value });
    }
    let sign = if value >= 0.0 { '+' } else { '-' };
    let body = format!("{sign}{:.2}", value.abs());
    Ok(match kind {
        SignedKind::Currency => body,
        SignedKind::Percent => format!("{body}%"),
    })
}

/// Unsigned, thousands-grouped currency: `$1,230.00`.
///
/// Amounts whose cent count does not fit a `u64` are rejected rather than
/// clamped.
pub fn format_money(value: f64) -> Result<String, FormattingError> {
    if !value.is_finite() {
        return Err(FormattingError { value });
    }
    let rounded = (value.abs() * 100.0).round();
    if rounded >= u64::MAX as f64 {
        return Err(FormattingError { value });
    }
    let cents = rounded as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    Ok(format!("${}.{frac:02}", group_thousands(whole)))
}

/// Signed, thousands-grouped currency: `+$834.61`, `-$1,230.00`.
///
/// The sign comes from [`format_signed`], so zero reads `+$0.00`.
pub fn format_signed_money(value: f64) -> Result<String, FormattingError> {
    let signed = format_signed(value, SignedKind::Currency)?;
    let sign = if signed.starts_with('-') { '-' } else { '+' };
    Ok(format!("{sign}{}", format_money(value)?))
}

/// Unsigned percentage with a caller-chosen precision: `65.4%`.
pub fn format_percent(value: f64, decimals: usize) -> Result<String, FormattingError> {
    if !value.is_finite() {
        return Err(FormattingError { value });
    }
    Ok(format!("{value:.decimals$}%"))
}

/// Plain fixed-precision number, used for ratios and prices.
pub fn format_number(value: f64, decimals: usize) -> Result<String, FormattingError> {
    if !value.is_finite() {
        return Err(FormattingError { value });
    }
    Ok(format!("{value:.decimals$}"))
}

/// Parse a signed display string such as `"+150"` or `"-0.98%"`.
///
/// A bare unsigned number is positive. A single trailing `%` is accepted.
pub fn parse_signed(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    match numeric.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::UnparseableAmount(text.to_string())),
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed(1.47, SignedKind::Percent).unwrap(), "+1.47%");
        assert_eq!(format_signed(-0.98, SignedKind::Percent).unwrap(), "-0.98%");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed(150.0, SignedKind::Currency).unwrap(), "+150.00");
        assert_eq!(format_signed(-100.0, SignedKind::Currency).unwrap(), "-100.00");
    }

    #[test]
    fn test_zero_is_positive() {
        assert_eq!(format_signed(0.0, SignedKind::Currency).unwrap(), "+0.00");
        assert_eq!(format_signed(-0.0, SignedKind::Percent).unwrap(), "+0.00%");
        assert_eq!(color_for(0.0), Accent::Positive);
        assert_eq!(color_for(-0.0), Accent::Positive);
        assert_eq!(color_for(12.5), Accent::Positive);
        assert_eq!(color_for(-0.01), Accent::Negative);
    }

    #[test]
    fn test_tiny_negative_keeps_minus() {
        assert_eq!(format_signed(-0.001, SignedKind::Currency).unwrap(), "-0.00");
    }

    #[test]
    fn test_non_finite_is_formatting_error() {
        assert!(format_signed(f64::NAN, SignedKind::Percent).is_err());
        assert!(format_signed(f64::INFINITY, SignedKind::Currency).is_err());
        assert!(format_money(f64::NEG_INFINITY).is_err());
        assert!(format_percent(f64::NAN, 1).is_err());
        assert!(format_number(f64::NAN, 2).is_err());
    }

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(834.61).unwrap(), "$834.61");
        assert_eq!(format_money(1230.0).unwrap(), "$1,230.00");
        assert_eq!(format_money(-1_234_567.891).unwrap(), "$1,234,567.89");
        assert_eq!(format_money(0.0).unwrap(), "$0.00");
    }

    #[test]
    fn test_format_money_rejects_unrepresentable_amounts() {
        assert!(format_money(1.0e17).is_ok());
        assert!(format_money(2.0e17).is_err());
        assert!(format_money(-1.0e300).is_err());
        assert!(format_signed_money(f64::MAX).is_err());
    }

    #[test]
    fn test_format_signed_money() {
        assert_eq!(format_signed_money(834.61).unwrap(), "+$834.61");
        assert_eq!(format_signed_money(-420.0).unwrap(), "-$420.00");
        assert_eq!(format_signed_money(-1230.0).unwrap(), "-$1,230.00");
        assert_eq!(format_signed_money(0.0).unwrap(), "+$0.00");
        assert_eq!(format_signed_money(-0.001).unwrap(), "-$0.00");
        assert!(format_signed_money(f64::NAN).is_err());
    }

    #[test]
    fn test_format_percent_and_number() {
        assert_eq!(format_percent(65.4, 1).unwrap(), "65.4%");
        assert_eq!(format_number(1.45, 2).unwrap(), "1.45");
        assert_eq!(format_number(10200.0, 0).unwrap(), "10200");
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_signed("+150").unwrap(), 150.0);
        assert_eq!(parse_signed("-100").unwrap(), -100.0);
        assert_eq!(parse_signed("-0.98%").unwrap(), -0.98);
        assert_eq!(parse_signed(" 1.47 % ").unwrap(), 1.47);
        assert_eq!(parse_signed("200").unwrap(), 200.0);
        assert!(parse_signed("abc").is_err());
        assert!(parse_signed("NaN").is_err());
        assert!(parse_signed("").is_err());
    }
}
