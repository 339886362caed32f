//! Calculator defaults and input ranges
//!
//! Ranges are applied by callers before invoking the engine; the engine
//! functions themselves never clamp. Every section and field is optional in
//! JSON and falls back to the reference calculator settings.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

use crate::inputs::{Calculation, SipInput, SipMode, StepUpSipInput, SwpInput};

/// Inclusive range a user-entered value is clamped to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into range; NaN maps to the minimum
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Clamp a year count into range
    pub fn clamp_years(&self, years: u32) -> u32 {
        self.clamp(years as f64).round() as u32
    }
}

/// SIP calculator settings (periodic and lumpsum share amount, rate and years)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipConfig {
    pub defaults: SipInput,
    pub contribution: FieldRange,
    pub principal: FieldRange,
    pub rate: FieldRange,
    pub years: FieldRange,
}

impl Default for SipConfig {
    fn default() -> Self {
        Self {
            defaults: SipInput::default(),
            contribution: FieldRange::new(500.0, 100_000.0),
            principal: FieldRange::new(1_000.0, 10_000_000.0),
            rate: FieldRange::new(1.0, 30.0),
            years: FieldRange::new(1.0, 30.0),
        }
    }
}

impl SipConfig {
    /// Defaults for the given mode
    pub fn defaults_for(&self, mode: SipMode) -> SipInput {
        SipInput { mode, ..self.defaults }
    }

    pub fn clamp(&self, input: SipInput) -> SipInput {
        let amount_range = match input.mode {
            SipMode::Periodic => self.contribution,
            SipMode::Lumpsum => self.principal,
        };
        SipInput {
            periodic_contribution: amount_range.clamp(input.periodic_contribution),
            annual_rate_percent: self.rate.clamp(input.annual_rate_percent),
            years: self.years.clamp_years(input.years),
            mode: input.mode,
        }
    }
}

/// Step-up SIP calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepUpConfig {
    pub defaults: StepUpSipInput,
    pub contribution: FieldRange,
    pub step_up: FieldRange,
    pub rate: FieldRange,
    pub years: FieldRange,
}

impl Default for StepUpConfig {
    fn default() -> Self {
        Self {
            defaults: StepUpSipInput::default(),
            contribution: FieldRange::new(500.0, 500_000.0),
            step_up: FieldRange::new(0.0, 100.0),
            rate: FieldRange::new(1.0, 30.0),
            years: FieldRange::new(1.0, 100.0),
        }
    }
}

impl StepUpConfig {
    pub fn clamp(&self, input: StepUpSipInput) -> StepUpSipInput {
        StepUpSipInput {
            initial_monthly_contribution: self.contribution.clamp(input.initial_monthly_contribution),
            annual_step_up_percent: self.step_up.clamp(input.annual_step_up_percent),
            annual_rate_percent: self.rate.clamp(input.annual_rate_percent),
            years: self.years.clamp_years(input.years),
        }
    }
}

/// SWP calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwpConfig {
    pub defaults: SwpInput,
    pub corpus: FieldRange,
    pub withdrawal: FieldRange,
    pub rate: FieldRange,
    pub years: FieldRange,
}

impl Default for SwpConfig {
    fn default() -> Self {
        Self {
            defaults: SwpInput::default(),
            corpus: FieldRange::new(0.0, 100_000_000.0),
            withdrawal: FieldRange::new(0.0, 1_000_000.0),
            rate: FieldRange::new(0.0, 30.0),
            years: FieldRange::new(1.0, 30.0),
        }
    }
}

impl SwpConfig {
    pub fn clamp(&self, input: SwpInput) -> SwpInput {
        SwpInput {
            initial_corpus: self.corpus.clamp(input.initial_corpus),
            monthly_withdrawal: self.withdrawal.clamp(input.monthly_withdrawal),
            annual_rate_percent: self.rate.clamp(input.annual_rate_percent),
            years: self.years.clamp_years(input.years),
        }
    }
}

/// HRA calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HraConfig {
    /// Metro-city answer when the user gives none
    pub is_metro_city: bool,
}

/// Settings for all calculators
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub sip: SipConfig,
    pub step_up: StepUpConfig,
    pub swp: SwpConfig,
    pub hra: HraConfig,
}

impl CalculatorConfig {
    /// Parse from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Clamp a calculation's inputs to the configured ranges
    pub fn clamp(&self, calculation: Calculation) -> Calculation {
        match calculation {
            Calculation::Sip(input) => Calculation::Sip(self.sip.clamp(input)),
            Calculation::StepUp(input) => Calculation::StepUp(self.step_up.clamp(input)),
            Calculation::Swp(input) => Calculation::Swp(self.swp.clamp(input)),
            hra @ Calculation::Hra(_) => hra,
        }
    }
}
