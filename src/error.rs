//! Error types for the calculation engine
//!
//! Structurally invalid input fails a call, as does a result that overflows
//! f64. A zero rate, zero contribution or zero withdrawal is a normal
//! numeric case and is handled inside the formulas.

use thiserror::Error;

/// Errors returned by the calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Projection horizon must be at least one year
    #[error("Invalid horizon: years must be positive, got {years}")]
    InvalidYears { years: u32 },

    /// Money or rate field below zero
    #[error("Invalid {field}: must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// NaN or infinite value in a numeric field
    #[error("Invalid {field}: must be a finite number")]
    NonFinite { field: &'static str },

    /// Horizon longer than the engine projects
    #[error("Invalid horizon: at most {max} years supported, got {years}")]
    HorizonTooLong { years: u32, max: u32 },

    /// Calculation overflowed to infinity or produced NaN
    #[error("Result {field} is not representable for these inputs")]
    NonFiniteResult { field: &'static str },
}

/// Longest projection horizon accepted, in years
pub const MAX_YEARS: u32 = 10_000;

/// Result alias used across the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Reject NaN/infinite and negative values for a named field
pub fn ensure_non_negative(field: &'static str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(EngineError::NegativeValue { field, value });
    }
    Ok(())
}

/// Reject a zero-year or overlong horizon
pub fn ensure_years(years: u32) -> EngineResult<()> {
    if years == 0 {
        return Err(EngineError::InvalidYears { years });
    }
    if years > MAX_YEARS {
        return Err(EngineError::HorizonTooLong { years, max: MAX_YEARS });
    }
    Ok(())
}

/// Pass a computed value through, or fail if it overflowed or became NaN
pub fn ensure_finite_result(field: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NonFiniteResult { field })
    }
}
