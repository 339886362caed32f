//! Step-up SIP projector
//!
//! The contribution changes every year, so there is no closed form: the
//! projection folds month by month over a [`StepUpState`] and records one
//! point at each year end.

use log::{debug, trace};

use super::series::{ProjectionPoint, ProjectionSummary};
use super::state::StepUpState;
use crate::error::EngineResult;
use crate::inputs::StepUpSipInput;

/// Project a step-up SIP
pub fn project(input: &StepUpSipInput) -> EngineResult<ProjectionSummary> {
    input.validate()?;

    debug!(
        "Step-up SIP projection: initial={} step_up={}% rate={}% years={}",
        input.initial_monthly_contribution,
        input.annual_step_up_percent,
        input.annual_rate_percent,
        input.years
    );

    let mut state = StepUpState::from_input(input);
    let series: Vec<ProjectionPoint> = (1..=input.years)
        .map(|year| {
            state.advance_year();
            trace!(
                "Step-up year {}: contributed={:.2} balance={:.2} next_monthly={:.2}",
                year,
                state.contributed,
                state.balance,
                state.monthly_contribution
            );
            ProjectionPoint::new(year, state.contributed, state.balance)
        })
        .collect();

    ProjectionSummary::from_series(series).ensure_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::inputs::SipInput;
    use crate::projection::sip;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    /// Straight transcription of the month loop for cross-checking
    fn reference_loop(initial: f64, step_up: f64, rate: f64, years: u32) -> (f64, f64) {
        let monthly_rate = rate / 1200.0;
        let mut contribution = initial;
        let mut balance = 0.0;
        let mut contributed = 0.0;
        for _ in 0..years {
            for _ in 0..12 {
                contributed += contribution;
                balance = (balance + contribution) * (1.0 + monthly_rate);
            }
            contribution *= 1.0 + step_up / 100.0;
        }
        (contributed, balance)
    }

    #[test]
    fn test_reference_horizon() {
        let input = StepUpSipInput::default();
        let summary = project(&input).unwrap();
        let (contributed, balance) = reference_loop(5000.0, 10.0, 12.0, 40);

        assert_eq!(summary.series.len(), 40);
        assert_eq!(summary.total_contributed, contributed);
        assert_eq!(summary.total_value, balance);
        assert_eq!(summary.total_gain, balance - contributed);
    }

    #[test]
    fn test_first_year_contributions_are_level() {
        let summary = project(&StepUpSipInput::new(5000.0, 10.0, 12.0, 2)).unwrap();
        assert_eq!(summary.series[0].contributed, 60_000.0);
        assert_relative_eq!(summary.series[1].contributed, 60_000.0 + 66_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_zero_step_up() {
        let summary = project(&StepUpSipInput::new(1000.0, 0.0, 0.0, 3)).unwrap();
        assert_eq!(summary.total_value, 36_000.0);
        assert_eq!(summary.total_gain, 0.0);
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert_eq!(
            project(&StepUpSipInput::new(5000.0, 10.0, 12.0, 0)),
            Err(EngineError::InvalidYears { years: 0 })
        );
        assert!(project(&StepUpSipInput::new(-5.0, 10.0, 12.0, 5)).is_err());
    }

    #[test]
    fn test_overflowing_result_is_an_error() {
        assert!(matches!(
            project(&StepUpSipInput::new(5000.0, 10.0, 1e6, 100)),
            Err(EngineError::NonFiniteResult { .. })
        ));
        // Contribution itself overflows after enough 100% step-ups
        assert!(matches!(
            project(&StepUpSipInput::new(5000.0, 100.0, 0.0, 2_000)),
            Err(EngineError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_overlong_horizon_is_an_error() {
        assert_eq!(
            project(&StepUpSipInput::new(5000.0, 10.0, 12.0, 400_000_000)),
            Err(EngineError::HorizonTooLong { years: 400_000_000, max: crate::error::MAX_YEARS })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_zero_step_up_matches_periodic_sip(
            contribution in 1.0f64..200_000.0,
            rate in 0.01f64..30.0,
            years in 1u32..50,
        ) {
            let stepped = project(&StepUpSipInput::new(contribution, 0.0, rate, years)).unwrap();
            let level = sip::project(&SipInput::periodic(contribution, rate, years)).unwrap();

            prop_assert_eq!(stepped.series.len(), level.series.len());
            for (a, b) in stepped.series.iter().zip(&level.series) {
                prop_assert_eq!(a.period_index, b.period_index);
                prop_assert!((a.contributed - b.contributed).abs() <= 1e-9 * b.contributed.max(1.0));
                prop_assert!((a.value - b.value).abs() <= 1e-9 * b.value.max(1.0));
            }
        }

        #[test]
        fn prop_gain_identity(
            contribution in 0.0f64..200_000.0,
            step_up in 0.0f64..25.0,
            rate in 0.0f64..30.0,
            years in 1u32..45,
        ) {
            let summary = project(&StepUpSipInput::new(contribution, step_up, rate, years)).unwrap();
            prop_assert_eq!(summary.total_gain, summary.total_value - summary.total_contributed);
            for point in &summary.series {
                prop_assert_eq!(point.gain, point.value - point.contributed);
            }
        }
    }

    #[test]
    fn test_monthly_sip_scale() {
        // Sanity check against the closed form for a short level horizon
        let stepped = project(&StepUpSipInput::new(5000.0, 0.0, 12.0, 10)).unwrap();
        assert_abs_diff_eq!(stepped.total_value, 1_161_695.0, epsilon = 1.0);
    }
}
