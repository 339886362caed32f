//! Presentation helpers for calculator results
//!
//! Rounding happens here only; engine values are passed through untouched.

use serde::Serialize;
use std::io::Write;

use crate::projection::{ProjectionSummary, SwpSummary};
use crate::scenario::{Outcome, ScenarioResult};
use crate::tax::HraResult;

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Format as rupees with Indian digit grouping and no decimals, e.g. "₹11,61,695"
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!("{}₹{}", sign, grouped)
}

/// Compact rupee form: "₹1.16 Cr", "₹11.62 L", or [`format_inr`] below one lakh
pub fn format_compact(amount: f64) -> String {
    if amount >= CRORE {
        format!("₹{:.2} Cr", amount / CRORE)
    } else if amount >= LAKH {
        format!("₹{:.2} L", amount / LAKH)
    } else {
        format_inr(amount)
    }
}

/// Millions shorthand for large values, e.g. "1.2M"
pub fn format_large(amount: f64) -> String {
    if amount >= 1e6 {
        format!("{:.1}M", amount / 1e6)
    } else {
        format_inr(amount)
    }
}

/// Whole-number percentage of `part` in `total` (0 when total is not positive)
pub fn percent_of(part: f64, total: f64) -> u32 {
    if total > 0.0 {
        (part / total * 100.0).round().max(0.0) as u32
    } else {
        0
    }
}

/// One slice of a two-way chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: &'static str,
    pub value: f64,
    pub percent: u32,
}

fn split(first: (&'static str, f64), second: (&'static str, f64)) -> [Share; 2] {
    let total = first.1 + second.1;
    [
        Share { label: first.0, value: first.1, percent: percent_of(first.1, total) },
        Share { label: second.0, value: second.1, percent: percent_of(second.1, total) },
    ]
}

/// Invested amount vs estimated returns
pub fn investment_shares(summary: &ProjectionSummary) -> [Share; 2] {
    split(
        ("Invested Amount", summary.total_contributed),
        ("Est. Returns", summary.total_gain.max(0.0)),
    )
}

/// Final value vs total withdrawn
pub fn withdrawal_shares(summary: &SwpSummary) -> [Share; 2] {
    split(("Final Value", summary.final_value), ("Withdrawn", summary.total_withdrawn))
}

/// Exempted vs taxable HRA
pub fn exemption_shares(result: &HraResult) -> [Share; 2] {
    split(
        ("Exempted HRA", result.exempted_hra),
        ("Taxable HRA", result.taxable_hra.max(0.0)),
    )
}

/// Final value as a whole percentage of the initial corpus
pub fn swp_return_percentage(summary: &SwpSummary) -> u32 {
    percent_of(summary.final_value, summary.total_invested)
}

/// Write the yearly series as CSV
pub fn write_series_csv<W: Write>(summary: &ProjectionSummary, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &summary.series {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// One line of batch output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    #[serde(rename = "ScenarioID")]
    pub scenario_id: u32,
    #[serde(rename = "Calculator")]
    pub calculator: &'static str,
    #[serde(rename = "Invested")]
    pub invested: Option<f64>,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
    #[serde(rename = "Gain")]
    pub gain: Option<f64>,
    #[serde(rename = "Withdrawn")]
    pub withdrawn: Option<f64>,
    #[serde(rename = "ExemptMonthly")]
    pub exempt_monthly: Option<f64>,
    #[serde(rename = "TaxableMonthly")]
    pub taxable_monthly: Option<f64>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl BatchRow {
    pub fn from_result(result: &ScenarioResult) -> Self {
        let mut row = BatchRow {
            scenario_id: result.scenario_id,
            calculator: result.calculator,
            invested: None,
            value: None,
            gain: None,
            withdrawn: None,
            exempt_monthly: None,
            taxable_monthly: None,
            error: None,
        };

        match &result.outcome {
            Ok(Outcome::Projection(summary)) => {
                row.invested = Some(summary.total_contributed);
                row.value = Some(summary.total_value);
                row.gain = Some(summary.total_gain);
            }
            Ok(Outcome::Withdrawal(summary)) => {
                row.invested = Some(summary.total_invested);
                row.value = Some(summary.final_value);
                row.withdrawn = Some(summary.total_withdrawn);
            }
            Ok(Outcome::Exemption(breakdown)) => {
                row.exempt_monthly = Some(breakdown.monthly.exempted_hra);
                row.taxable_monthly = Some(breakdown.monthly.taxable_hra);
            }
            Err(e) => row.error = Some(e.to_string()),
        }

        row
    }
}

/// Write batch results as CSV, one row per scenario
pub fn write_batch_csv<W: Write>(results: &[ScenarioResult], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(BatchRow::from_result(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::projection::ProjectionPoint;

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.4), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_161_695.38), "₹11,61,695");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
        assert_eq!(format_inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_compact_and_large_forms() {
        assert_eq!(format_compact(12_500_000.0), "₹1.25 Cr");
        assert_eq!(format_compact(1_161_695.0), "₹11.62 L");
        assert_eq!(format_compact(60_000.0), "₹60,000");
        assert_eq!(format_large(1_161_695.0), "1.2M");
        assert_eq!(format_large(600_000.0), "₹6,00,000");
    }

    #[test]
    fn test_shares_round_at_presentation() {
        let summary = ProjectionSummary::new(600_000.0, 1_161_695.38);
        let [invested, returns] = investment_shares(&summary);
        assert_eq!(invested.percent, 52);
        assert_eq!(returns.percent, 48);
        assert_eq!(returns.value, summary.total_gain);

        let swp = SwpSummary { total_invested: 1_000_000.0, total_withdrawn: 1_200_000.0, final_value: 1_000_000.0 };
        assert_eq!(swp_return_percentage(&swp), 100);
        assert_eq!(withdrawal_shares(&swp)[1].percent, 55);

        let empty = SwpSummary { total_invested: 0.0, total_withdrawn: 0.0, final_value: 0.0 };
        assert_eq!(swp_return_percentage(&empty), 0);
    }

    #[test]
    fn test_series_csv() {
        let summary = ProjectionSummary::from_series(vec![
            ProjectionPoint::new(1, 100.0, 110.0),
            ProjectionPoint::new(2, 200.0, 231.0),
        ]);
        let mut buffer = Vec::new();
        write_series_csv(&summary, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("period_index,contributed,value,gain"));
        assert_eq!(lines.next(), Some("1,100.0,110.0,10.0"));
        assert_eq!(lines.next(), Some("2,200.0,231.0,31.0"));
    }

    #[test]
    fn test_batch_row_reports_errors() {
        let result = ScenarioResult {
            scenario_id: 9,
            calculator: "swp",
            outcome: Err(EngineError::InvalidYears { years: 0 }),
        };
        let row = BatchRow::from_result(&result);
        assert_eq!(row.scenario_id, 9);
        assert!(row.value.is_none());
        assert_eq!(row.error.as_deref(), Some("Invalid horizon: years must be positive, got 0"));
    }
}
