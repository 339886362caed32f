//! Caller-side handling of user-entered text
//!
//! The engine only accepts finite numbers. Text coming from a form or the
//! command line is sanitised here: anything that is not a digit or a decimal
//! point is dropped, unparseable or negative input becomes 0, and the result
//! is clamped to the calculator's range. Absent required HRA fields yield no result
//! rather than an error.

use serde::{Deserialize, Serialize};

use crate::config::FieldRange;
use crate::error::EngineResult;
use crate::inputs::HraInput;
use crate::tax::{self, HraBreakdown};

/// Parse a user-entered amount such as "₹1,50,000" or "12.5%"
///
/// Keeps digits and the first decimal point; returns 0 when no number remains.
/// A minus sign before the first digit makes the entry invalid, so "-500" is 0.
pub fn parse_amount(text: &str) -> f64 {
    let mut cleaned = String::with_capacity(text.len());
    let mut seen_point = false;

    for ch in text.chars() {
        if ch == '-' && cleaned.is_empty() {
            return 0.0;
        }
        if ch.is_ascii_digit() {
            cleaned.push(ch);
        } else if ch == '.' {
            if seen_point {
                break;
            }
            seen_point = true;
            cleaned.push(ch);
        }
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse and clamp to `range`
pub fn parse_in_range(text: &str, range: &FieldRange) -> f64 {
    range.clamp(parse_amount(text))
}

/// Parse a year count, clamped to `range`
pub fn parse_years(text: &str, range: &FieldRange) -> u32 {
    range.clamp(parse_amount(text).trunc()) as u32
}

/// `None` for blank input, otherwise the sanitised amount
pub fn parse_optional(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        None
    } else {
        Some(parse_amount(text))
    }
}

/// Period a salary figure was entered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    /// Convert an amount for this period to a monthly amount
    pub fn to_monthly(&self, amount: f64) -> f64 {
        match self {
            Period::Monthly => amount,
            Period::Yearly => amount / 12.0,
        }
    }

    /// Convert a monthly amount to this period
    pub fn from_monthly(&self, monthly: f64) -> f64 {
        match self {
            Period::Monthly => monthly,
            Period::Yearly => monthly * 12.0,
        }
    }
}

/// HRA form state, all amounts monthly
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HraForm {
    pub basic: Option<f64>,
    /// Dearness allowance, treated as 0 when blank
    pub da: Option<f64>,
    pub hra_received: Option<f64>,
    pub rent_paid: Option<f64>,
    pub is_metro_city: bool,
}

impl HraForm {
    /// Build from raw text fields entered for `period`
    pub fn from_text(basic: &str, da: &str, hra_received: &str, rent_paid: &str, period: Period, is_metro_city: bool) -> Self {
        let monthly = |text: &str| parse_optional(text).map(|v| period.to_monthly(v));
        Self {
            basic: monthly(basic),
            da: monthly(da),
            hra_received: monthly(hra_received),
            rent_paid: monthly(rent_paid),
            is_metro_city,
        }
    }

    /// Engine input, or `None` while basic salary, HRA or rent is missing
    pub fn to_input(&self) -> Option<HraInput> {
        Some(HraInput::from_salary(
            self.basic?,
            self.da.unwrap_or(0.0),
            self.hra_received?,
            self.rent_paid?,
            self.is_metro_city,
        ))
    }

    /// Monthly and yearly exemption, or `None` when no computation is possible
    pub fn compute(&self) -> EngineResult<Option<HraBreakdown>> {
        self.to_input().map(|input| tax::compute_breakdown(&input)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_formatting() {
        assert_eq!(parse_amount("₹1,50,000"), 150_000.0);
        assert_eq!(parse_amount("12.5%"), 12.5);
        assert_eq!(parse_amount("  42 "), 42.0);
        assert_eq!(parse_amount("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_amount_negative_is_zero() {
        assert_eq!(parse_amount("-500"), 0.0);
        assert_eq!(parse_amount("₹ -1,000"), 0.0);
        // A dash after the number is just formatting
        assert_eq!(parse_amount("5000-"), 5000.0);

        let rate = FieldRange::new(1.0, 30.0);
        assert_eq!(parse_in_range("-12", &rate), 1.0);
    }

    #[test]
    fn test_parse_amount_non_numeric_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
    }

    #[test]
    fn test_parse_in_range() {
        let rate = FieldRange::new(0.0, 30.0);
        assert_eq!(parse_in_range("45", &rate), 30.0);
        assert_eq!(parse_in_range("oops", &rate), 0.0);

        let years = FieldRange::new(1.0, 30.0);
        assert_eq!(parse_years("0", &years), 1);
        assert_eq!(parse_years("12.9", &years), 12);
    }

    #[test]
    fn test_period_conversion() {
        assert_eq!(Period::Yearly.to_monthly(600_000.0), 50_000.0);
        assert_eq!(Period::Yearly.from_monthly(50_000.0), 600_000.0);
        assert_eq!(Period::Monthly.to_monthly(50_000.0), 50_000.0);
    }

    #[test]
    fn test_hra_form_requires_fields() {
        let form = HraForm::from_text("50000", "", "20000", "", Period::Monthly, false);
        assert_eq!(form.to_input(), None);
        assert_eq!(form.compute(), Ok(None));
    }

    #[test]
    fn test_hra_form_yearly_entry() {
        let form = HraForm::from_text("480000", "120000", "240000", "180000", Period::Yearly, false);
        let input = form.to_input().expect("all required fields present");
        assert_eq!(input.basic_plus_da, 50_000.0);
        assert_eq!(input.hra_received, 20_000.0);
        assert_eq!(input.rent_paid, 15_000.0);

        let breakdown = form.compute().unwrap().unwrap();
        assert_eq!(breakdown.monthly.exempted_hra, 10_000.0);
        assert_eq!(breakdown.yearly.exempted_hra, 120_000.0);
    }
}
