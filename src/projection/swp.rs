//! SWP projector: fixed monthly withdrawals against a compounding corpus
//!
//! FV = P * (1+r)^n - w * ((1+r)^n - 1) / r, floored at zero.
//! The closed form does not track the month in which the corpus runs out;
//! a schedule that overdraws simply ends at zero.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::compounding::{fv_lump_sum, fv_ordinary_annuity, monthly_rate, months_in};
use crate::error::{ensure_finite_result, EngineResult};
use crate::inputs::SwpInput;

/// SWP projection result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpSummary {
    /// Initial corpus
    pub total_invested: f64,

    /// Sum of all monthly withdrawals
    pub total_withdrawn: f64,

    /// Corpus remaining at the end of the horizon (never negative)
    pub final_value: f64,
}

/// Project a systematic withdrawal plan
pub fn project(input: &SwpInput) -> EngineResult<SwpSummary> {
    input.validate()?;

    let rate = monthly_rate(input.annual_rate_percent);
    let months = months_in(input.years)?;

    let growth = ensure_finite_result("corpus growth", fv_lump_sum(input.initial_corpus, rate, months))?;
    let withdrawal_fv = ensure_finite_result(
        "withdrawal future value",
        fv_ordinary_annuity(input.monthly_withdrawal, months, rate),
    )?;
    let unfloored = ensure_finite_result("final_value", growth - withdrawal_fv)?;

    debug!(
        "SWP projection: corpus={} withdrawal={} rate={}% years={} growth={:.2} withdrawals_fv={:.2}",
        input.initial_corpus, input.monthly_withdrawal, input.annual_rate_percent, input.years, growth, withdrawal_fv
    );

    if unfloored < 0.0 {
        warn!(
            "SWP corpus exhausted before end of {} years (closed-form value {:.2}), reporting 0",
            input.years, unfloored
        );
    }

    Ok(SwpSummary {
        total_invested: input.initial_corpus,
        total_withdrawn: ensure_finite_result("total_withdrawn", input.monthly_withdrawal * months as f64)?,
        final_value: unfloored.max(0.0),
    })
}
