//! Calculator input records
//!
//! All inputs are immutable value objects. Money is in the caller's
//! currency unit and rates are percent per annum.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_years, EngineResult};

/// Step-up horizon used by the reference calculator
pub const DEFAULT_STEP_UP_YEARS: u32 = 40;

/// Share of salary exempt in a metro city
pub const METRO_SALARY_SHARE: f64 = 0.5;

/// Share of salary exempt outside metro cities
pub const NON_METRO_SALARY_SHARE: f64 = 0.4;

/// Share of salary that rent must exceed before it counts
pub const RENT_SALARY_THRESHOLD: f64 = 0.1;

/// SIP contribution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SipMode {
    /// Monthly contribution, annuity-due compounding
    Periodic,
    /// Single investment compounded annually
    Lumpsum,
}

/// Input to the SIP projector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// Monthly contribution, or the principal in lumpsum mode
    pub periodic_contribution: f64,

    /// Expected return, percent per annum
    pub annual_rate_percent: f64,

    /// Horizon in years
    pub years: u32,

    pub mode: SipMode,
}

impl SipInput {
    /// Monthly SIP of `contribution`
    pub fn periodic(contribution: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            periodic_contribution: contribution,
            annual_rate_percent,
            years,
            mode: SipMode::Periodic,
        }
    }

    /// One-time investment of `principal`
    pub fn lumpsum(principal: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            periodic_contribution: principal,
            annual_rate_percent,
            years,
            mode: SipMode::Lumpsum,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative("periodic contribution", self.periodic_contribution)?;
        ensure_non_negative("annual rate", self.annual_rate_percent)?;
        ensure_years(self.years)
    }
}

impl Default for SipInput {
    fn default() -> Self {
        Self::periodic(5000.0, 12.0, 10)
    }
}

/// Input to the step-up SIP projector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepUpSipInput {
    /// Contribution per month during year 1
    pub initial_monthly_contribution: f64,

    /// Yearly compounding increase of the contribution, percent
    pub annual_step_up_percent: f64,

    /// Expected return, percent per annum
    pub annual_rate_percent: f64,

    pub years: u32,
}

impl StepUpSipInput {
    pub fn new(
        initial_monthly_contribution: f64,
        annual_step_up_percent: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_monthly_contribution,
            annual_step_up_percent,
            annual_rate_percent,
            years,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative("initial monthly contribution", self.initial_monthly_contribution)?;
        ensure_non_negative("annual step-up", self.annual_step_up_percent)?;
        ensure_non_negative("annual rate", self.annual_rate_percent)?;
        ensure_years(self.years)
    }
}

impl Default for StepUpSipInput {
    fn default() -> Self {
        Self::new(5000.0, 10.0, 12.0, DEFAULT_STEP_UP_YEARS)
    }
}

/// Input to the SWP projector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpInput {
    pub initial_corpus: f64,

    /// Fixed withdrawal at the end of every month
    pub monthly_withdrawal: f64,

    /// Expected return, percent per annum
    pub annual_rate_percent: f64,

    pub years: u32,
}

impl SwpInput {
    pub fn new(initial_corpus: f64, monthly_withdrawal: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            initial_corpus,
            monthly_withdrawal,
            annual_rate_percent,
            years,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative("initial corpus", self.initial_corpus)?;
        ensure_non_negative("monthly withdrawal", self.monthly_withdrawal)?;
        ensure_non_negative("annual rate", self.annual_rate_percent)?;
        ensure_years(self.years)
    }
}

impl Default for SwpInput {
    fn default() -> Self {
        Self::new(1_000_000.0, 10_000.0, 12.0, 10)
    }
}

/// Input to the HRA exemption calculator
///
/// All money fields are for the same period (normally one month).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HraInput {
    /// Basic salary plus dearness allowance
    pub basic_plus_da: f64,

    pub hra_received: f64,

    pub rent_paid: f64,

    pub is_metro_city: bool,
}

impl HraInput {
    pub fn new(basic_plus_da: f64, hra_received: f64, rent_paid: f64, is_metro_city: bool) -> Self {
        Self {
            basic_plus_da,
            hra_received,
            rent_paid,
            is_metro_city,
        }
    }

    /// Build from separate basic salary and dearness allowance
    pub fn from_salary(basic: f64, da: f64, hra_received: f64, rent_paid: f64, is_metro_city: bool) -> Self {
        Self::new(basic + da, hra_received, rent_paid, is_metro_city)
    }

    /// Share of salary used for the salary limit
    pub fn salary_share(&self) -> f64 {
        if self.is_metro_city {
            METRO_SALARY_SHARE
        } else {
            NON_METRO_SALARY_SHARE
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative("basic plus DA", self.basic_plus_da)?;
        ensure_non_negative("HRA received", self.hra_received)?;
        ensure_non_negative("rent paid", self.rent_paid)
    }
}

/// One calculation request, tagged by calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Calculation {
    Sip(SipInput),
    StepUp(StepUpSipInput),
    Swp(SwpInput),
    Hra(HraInput),
}

impl Calculation {
    /// Short calculator name as used in scenario files
    pub fn name(&self) -> &'static str {
        match self {
            Calculation::Sip(input) => match input.mode {
                SipMode::Periodic => "sip",
                SipMode::Lumpsum => "lumpsum",
            },
            Calculation::StepUp(_) => "stepup",
            Calculation::Swp(_) => "swp",
            Calculation::Hra(_) => "hra",
        }
    }
}

/// A calculation with an identifier, as loaded from a scenario file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: u32,
    pub calculation: Calculation,
}
