//! HRA exemption: the least of actual HRA, the salary limit and rent in
//! excess of 10% of salary

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite_result, EngineResult};
use crate::inputs::{HraInput, RENT_SALARY_THRESHOLD};

/// The three amounts the exemption is the minimum of
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HraComponents {
    /// HRA actually received
    pub actual_hra: f64,

    /// 50% (metro) or 40% (non-metro) of basic + DA
    pub salary_percent_limit: f64,

    /// Rent paid minus 10% of basic + DA, floored at zero
    pub rent_excess: f64,
}

/// HRA exemption for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HraResult {
    pub exempted_hra: f64,
    pub taxable_hra: f64,
    pub components: HraComponents,
}

impl HraResult {
    /// Scale every amount by `factor`, element by element
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            exempted_hra: self.exempted_hra * factor,
            taxable_hra: self.taxable_hra * factor,
            components: HraComponents {
                actual_hra: self.components.actual_hra * factor,
                salary_percent_limit: self.components.salary_percent_limit * factor,
                rent_excess: self.components.rent_excess * factor,
            },
        }
    }

    /// Yearly figures from a monthly result (x12)
    pub fn yearly(&self) -> Self {
        self.scaled(12.0)
    }

    /// Fail if scaling overflowed any amount
    pub fn ensure_finite(self) -> EngineResult<Self> {
        ensure_finite_result("exempted_hra", self.exempted_hra)?;
        ensure_finite_result("taxable_hra", self.taxable_hra)?;
        ensure_finite_result("actual_hra", self.components.actual_hra)?;
        ensure_finite_result("salary_percent_limit", self.components.salary_percent_limit)?;
        ensure_finite_result("rent_excess", self.components.rent_excess)?;
        Ok(self)
    }
}

/// Monthly result alongside its yearly projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HraBreakdown {
    pub monthly: HraResult,
    pub yearly: HraResult,
}

/// Compute the exemption for one period's figures
pub fn compute(input: &HraInput) -> EngineResult<HraResult> {
    input.validate()?;

    let components = HraComponents {
        actual_hra: input.hra_received,
        salary_percent_limit: input.basic_plus_da * input.salary_share(),
        rent_excess: (input.rent_paid - input.basic_plus_da * RENT_SALARY_THRESHOLD).max(0.0),
    };

    let exempted_hra = components
        .actual_hra
        .min(components.salary_percent_limit)
        .min(components.rent_excess)
        .max(0.0);

    debug!(
        "HRA: actual={} salary_limit={} rent_excess={} exempt={}",
        components.actual_hra, components.salary_percent_limit, components.rent_excess, exempted_hra
    );

    Ok(HraResult {
        exempted_hra,
        taxable_hra: input.hra_received - exempted_hra,
        components,
    })
}

/// Compute from monthly figures and report monthly and yearly rows
pub fn compute_breakdown(monthly: &HraInput) -> EngineResult<HraBreakdown> {
    let monthly = compute(monthly)?;
    Ok(HraBreakdown {
        monthly,
        yearly: monthly.yearly().ensure_finite()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;

    #[test]
    fn test_reference_case_non_metro() {
        let result = compute(&HraInput::new(50_000.0, 20_000.0, 15_000.0, false)).unwrap();

        assert_eq!(result.components.actual_hra, 20_000.0);
        assert_eq!(result.components.salary_percent_limit, 20_000.0);
        assert_eq!(result.components.rent_excess, 10_000.0);
        assert_eq!(result.exempted_hra, 10_000.0);
        assert_eq!(result.taxable_hra, 10_000.0);
    }

    #[test]
    fn test_metro_limit() {
        let result = compute(&HraInput::new(50_000.0, 30_000.0, 40_000.0, true)).unwrap();
        assert_eq!(result.components.salary_percent_limit, 25_000.0);
        assert_eq!(result.exempted_hra, 25_000.0);
        assert_eq!(result.taxable_hra, 5_000.0);
    }

    #[test]
    fn test_low_rent_exempts_nothing() {
        let result = compute(&HraInput::new(50_000.0, 20_000.0, 4_000.0, true)).unwrap();
        assert_eq!(result.components.rent_excess, 0.0);
        assert_eq!(result.exempted_hra, 0.0);
        assert_eq!(result.taxable_hra, 20_000.0);
    }

    #[test]
    fn test_breakdown_is_elementwise_times_twelve() {
        let breakdown = compute_breakdown(&HraInput::new(50_000.0, 20_000.0, 15_000.0, false)).unwrap();
        assert_eq!(breakdown.yearly.exempted_hra, 120_000.0);
        assert_eq!(breakdown.yearly.taxable_hra, 120_000.0);
        assert_eq!(breakdown.yearly.components.salary_percent_limit, 240_000.0);
        assert_eq!(breakdown.yearly.components.rent_excess, 120_000.0);
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(matches!(
            compute(&HraInput::new(50_000.0, -1.0, 15_000.0, false)),
            Err(EngineError::NegativeValue { field: "HRA received", .. })
        ));
    }

    #[test]
    fn test_yearly_overflow_is_an_error() {
        let input = HraInput::new(1e308, 1e308, 1e308, false);
        assert!(compute(&input).is_ok());
        assert_eq!(
            compute_breakdown(&input),
            Err(EngineError::NonFiniteResult { field: "exempted_hra" })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_exemption_bounds(
            salary in 0.0f64..1_000_000.0,
            hra in 0.0f64..500_000.0,
            rent in 0.0f64..500_000.0,
            metro in any::<bool>(),
        ) {
            let result = compute(&HraInput::new(salary, hra, rent, metro)).unwrap();
            let c = result.components;
            prop_assert!(result.exempted_hra >= 0.0);
            prop_assert!(result.exempted_hra <= c.actual_hra);
            prop_assert!(result.exempted_hra <= c.salary_percent_limit);
            prop_assert!(result.exempted_hra <= c.rent_excess);
            prop_assert!(result.taxable_hra >= 0.0);
            prop_assert!((result.taxable_hra + result.exempted_hra - hra).abs() <= 1e-9 * hra.max(1.0));
        }
    }
}
