//! Parsed hourly rate.
//!
//! The rate field is edited as free text. The text is owned by the input
//! layer; the engine only ever works with the parsed [`HourlyRate`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative hourly base rate.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::HourlyRate;
/// use rust_decimal::Decimal;
///
/// let rate = HourlyRate::parse("1050").unwrap();
/// assert_eq!(rate.value(), Decimal::new(1050, 0));
///
/// assert_eq!(HourlyRate::parse("1000円").unwrap().value(), Decimal::new(1000, 0));
///
/// assert!(HourlyRate::parse("").is_none());
/// assert!(HourlyRate::parse("abc").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct HourlyRate(Decimal);

impl HourlyRate {
    /// Wraps a decimal rate, rejecting negative values.
    pub fn new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Parses rate text typed by the user.
    ///
    /// Reads the longest numeric prefix after leading whitespace, so a
    /// currency suffix is ignored (`"1000円"` is 1000) and `"1,000"` reads
    /// as 1. Scientific notation is accepted (`"1e3"`). Text with no
    /// numeric prefix, a negative value, or a value outside the decimal
    /// range yields `None`, which the pay calculation treats as "no rate".
    pub fn parse(text: &str) -> Option<Self> {
        let prefix = numeric_prefix(text.trim_start())?;
        let value = if prefix.contains('e') {
            Decimal::from_scientific(&prefix).ok()?
        } else {
            Decimal::from_str(&prefix).ok()?
        };
        Self::new(value)
    }

    /// The rate as a decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Reads the leading `[+-]digits[.digits][e[+-]digits]` run of `text` and
/// returns it in a form the decimal parsers accept.
///
/// The mantissa needs at least one digit on either side of the point. An
/// exponent marker with no digits after it ends the number.
fn numeric_prefix(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let negative = bytes.first() == Some(&b'-');
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_end = digits_from(pos);
    let integer = &text[pos..int_end];
    pos = int_end;

    let mut fraction = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_end = digits_from(pos + 1);
        fraction = &text[pos + 1..frac_end];
        pos = frac_end;
    }
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut number = String::with_capacity(pos + 2);
    if negative {
        number.push('-');
    }
    number.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(fraction);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let sign_end = pos + 1 + usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(sign_end);
        if exp_end > sign_end {
            number.push('e');
            number.push_str(&text[pos + 1..exp_end]);
        }
    }
    Some(number)
}

impl TryFrom<Decimal> for HourlyRate {
    type Error = String;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("hourly rate must not be negative: {}", value))
    }
}

impl From<HourlyRate> for Decimal {
    fn from(rate: HourlyRate) -> Self {
        rate.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_integer_and_fraction() {
        assert_eq!(HourlyRate::parse("1000").unwrap().value(), dec("1000"));
        assert_eq!(HourlyRate::parse(" 12.50 ").unwrap().value(), dec("12.5"));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(HourlyRate::parse("1e3").unwrap().value(), dec("1000"));
    }

    #[test]
    fn test_parse_reads_leading_number() {
        assert_eq!(HourlyRate::parse("1000円").unwrap().value(), dec("1000"));
        assert_eq!(HourlyRate::parse("12abc").unwrap().value(), dec("12"));
        assert_eq!(HourlyRate::parse("1,000").unwrap().value(), dec("1"));
        assert_eq!(HourlyRate::parse("  +950 yen").unwrap().value(), dec("950"));
        assert_eq!(HourlyRate::parse("12.5.3").unwrap().value(), dec("12.5"));
    }

    #[test]
    fn test_parse_partial_point_and_exponent() {
        assert_eq!(HourlyRate::parse(".5").unwrap().value(), dec("0.5"));
        assert_eq!(HourlyRate::parse("5.").unwrap().value(), dec("5"));
        assert_eq!(HourlyRate::parse("5.e2").unwrap().value(), dec("500"));
        assert_eq!(HourlyRate::parse("2e").unwrap().value(), dec("2"));
        assert_eq!(HourlyRate::parse("2e+x").unwrap().value(), dec("2"));
        assert_eq!(HourlyRate::parse("1.5E2/h").unwrap().value(), dec("150"));
    }

    #[test]
    fn test_parse_blank_and_garbage() {
        assert!(HourlyRate::parse("").is_none());
        assert!(HourlyRate::parse("   ").is_none());
        assert!(HourlyRate::parse("yen").is_none());
        assert!(HourlyRate::parse("¥1000").is_none());
        assert!(HourlyRate::parse(".").is_none());
        assert!(HourlyRate::parse("-").is_none());
        assert!(HourlyRate::parse("e5").is_none());
    }

    #[test]
    fn test_parse_out_of_range_is_absent() {
        assert!(HourlyRate::parse("1e40").is_none());
        assert!(HourlyRate::parse("792281625142643375935439503350").is_none());
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(HourlyRate::parse("-5").is_none());
        assert!(HourlyRate::parse("-5円").is_none());
        assert!(HourlyRate::new(dec("-0.01")).is_none());
    }

    #[test]
    fn test_zero_rate_accepted() {
        assert_eq!(HourlyRate::parse("0").unwrap().value(), Decimal::ZERO);
        assert_eq!(HourlyRate::parse("-0").unwrap().value(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_rejects_negative() {
        let ok: HourlyRate = serde_json::from_str(r#""950""#).unwrap();
        assert_eq!(ok.value(), dec("950"));

        let bad: Result<HourlyRate, _> = serde_json::from_str(r#""-1""#);
        assert!(bad.is_err());
    }
}
