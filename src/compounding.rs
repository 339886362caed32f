//! Rate conversion and closed-form compounding factors
//!
//! Supports:
//! - Percent-per-annum to monthly/annual decimal rates
//! - Lump-sum growth
//! - Future value of an annuity-due (payment at start of each period)
//! - Future value of an ordinary annuity (payment at end of each period)
//!
//! At a zero periodic rate the annuity factor `((1+r)^n - 1) / r` is 0/0.
//! Its limit as r -> 0 is `n`, so both annuity functions fall back to the
//! simple sum `payment * n`.

use crate::error::{EngineError, EngineResult, MAX_YEARS};

/// Periodic rates smaller than this take the r -> 0 limit branch
pub const RATE_EPSILON: f64 = 1e-10;

/// Months per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert an annual percentage (e.g. 12.0 for 12%) to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 1200.0
}

/// Convert an annual percentage to an annual decimal rate
pub fn annual_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0
}

/// Number of months in `years` years
pub fn months_in(years: u32) -> EngineResult<u32> {
    years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(EngineError::HorizonTooLong { years, max: MAX_YEARS })
}

/// Growth factor (1 + rate)^periods
pub fn growth_factor(rate: f64, periods: u32) -> f64 {
    match i32::try_from(periods) {
        Ok(n) => (1.0 + rate).powi(n),
        Err(_) => (1.0 + rate).powf(f64::from(periods)),
    }
}

/// Future value of a single amount compounded for `periods` periods
pub fn fv_lump_sum(principal: f64, rate: f64, periods: u32) -> f64 {
    principal * growth_factor(rate, periods)
}

/// Future value of a level annuity-due
/// Payments of `payment` for `periods`, each earning interest for the period it is made in
pub fn fv_annuity_due(payment: f64, periods: u32, rate: f64) -> f64 {
    if rate.abs() < RATE_EPSILON {
        return payment * periods as f64;
    }

    payment * ((growth_factor(rate, periods) - 1.0) / rate) * (1.0 + rate)
}

/// Future value of a level ordinary annuity
/// Payments of `payment` for `periods`, first payment at the end of period 1
pub fn fv_ordinary_annuity(payment: f64, periods: u32, rate: f64) -> f64 {
    if rate.abs() < RATE_EPSILON {
        return payment * periods as f64;
    }

    payment * (growth_factor(rate, periods) - 1.0) / rate
}
