//! Scenario runner for single and batch calculations
//!
//! Dispatches a tagged [`Calculation`] to its calculator. Batches run in
//! parallel; every calculation is pure, so results only depend on inputs
//! and come back in input order.

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::inputs::{Calculation, Scenario};
use crate::projection::{sip, step_up, swp, ProjectionSummary, SwpSummary};
use crate::tax::{self, HraBreakdown};

/// Result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// SIP, lumpsum or step-up projection
    Projection(ProjectionSummary),
    /// SWP decumulation
    Withdrawal(SwpSummary),
    /// HRA exemption, monthly and yearly
    Exemption(HraBreakdown),
}

/// Outcome of a loaded scenario; failures are kept per scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub scenario_id: u32,
    pub calculator: &'static str,
    pub outcome: EngineResult<Outcome>,
}

/// Runs calculations, optionally clamping inputs to configured ranges first
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new().with_clamping(true);
/// let outcome = runner.run(&Calculation::Sip(SipInput::default()))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: CalculatorConfig,
    clamp_inputs: bool,
}

impl ScenarioRunner {
    /// Runner with reference settings, inputs passed through unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with a specific configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            clamp_inputs: false,
        }
    }

    /// Clamp inputs to the configured ranges before calculating
    pub fn with_clamping(mut self, clamp_inputs: bool) -> Self {
        self.clamp_inputs = clamp_inputs;
        self
    }

    /// Run a single calculation
    pub fn run(&self, calculation: &Calculation) -> EngineResult<Outcome> {
        let calculation = if self.clamp_inputs {
            self.config.clamp(*calculation)
        } else {
            *calculation
        };

        match calculation {
            Calculation::Sip(input) => sip::project(&input).map(Outcome::Projection),
            Calculation::StepUp(input) => step_up::project(&input).map(Outcome::Projection),
            Calculation::Swp(input) => swp::project(&input).map(Outcome::Withdrawal),
            Calculation::Hra(input) => tax::compute_breakdown(&input).map(Outcome::Exemption),
        }
    }

    /// Run one loaded scenario
    pub fn run_scenario(&self, scenario: &Scenario) -> ScenarioResult {
        ScenarioResult {
            scenario_id: scenario.scenario_id,
            calculator: scenario.calculation.name(),
            outcome: self.run(&scenario.calculation),
        }
    }

    /// Run many scenarios in parallel, results in input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        info!("Running {} scenarios", scenarios.len());
        let results: Vec<ScenarioResult> = scenarios.par_iter().map(|s| self.run_scenario(s)).collect();

        let failed = results.iter().filter(|r| r.outcome.is_err()).count();
        info!("Batch complete: {} succeeded, {} failed", results.len() - failed, failed);
        results
    }
}
