//! SIP projector: monthly annuity-due and lumpsum compounding
//!
//! Every yearly point is evaluated from the closed form for that year's
//! month count rather than accumulated from the previous point, so each
//! value is reproducible on its own.

use log::{debug, trace};

use super::series::{ProjectionPoint, ProjectionSummary};
use crate::compounding::{annual_rate, fv_annuity_due, fv_lump_sum, monthly_rate, months_in};
use crate::error::EngineResult;
use crate::inputs::{SipInput, SipMode};

/// Project a SIP or lumpsum investment
pub fn project(input: &SipInput) -> EngineResult<ProjectionSummary> {
    input.validate()?;

    debug!(
        "SIP projection: mode={:?} amount={} rate={}% years={}",
        input.mode, input.periodic_contribution, input.annual_rate_percent, input.years
    );

    let summary = match input.mode {
        SipMode::Periodic => project_periodic(input)?,
        SipMode::Lumpsum => project_lumpsum(input),
    };

    summary.ensure_finite()
}

fn project_periodic(input: &SipInput) -> EngineResult<ProjectionSummary> {
    let contribution = input.periodic_contribution;
    let rate = monthly_rate(input.annual_rate_percent);

    let months = months_in(input.years)?;
    let mut summary = ProjectionSummary::new(
        contribution * months as f64,
        fv_annuity_due(contribution, months, rate),
    );

    for year in 1..=input.years {
        let year_months = months_in(year)?;
        let point = ProjectionPoint::new(
            year,
            contribution * year_months as f64,
            fv_annuity_due(contribution, year_months, rate),
        );
        trace!("SIP year {}: value={:.2}", year, point.value);
        summary.add_point(point);
    }

    Ok(summary)
}

fn project_lumpsum(input: &SipInput) -> ProjectionSummary {
    let principal = input.periodic_contribution;
    let rate = annual_rate(input.annual_rate_percent);

    let mut summary = ProjectionSummary::new(principal, fv_lump_sum(principal, rate, input.years));

    for year in 1..=input.years {
        let point = ProjectionPoint::new(year, principal, fv_lump_sum(principal, rate, year));
        trace!("Lumpsum year {}: value={:.2}", year, point.value);
        summary.add_point(point);
    }

    summary
}
