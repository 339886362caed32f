//! CashIQ - Deterministic calculation engine for personal-finance calculators
//!
//! This library provides:
//! - SIP projections (monthly annuity-due and lumpsum compounding)
//! - Step-up SIP projections (contribution rising by a fixed percentage each year)
//! - SWP decumulation (fixed monthly withdrawals against a compounding corpus)
//! - HRA exemption (least of actual HRA, salary limit and rent excess)
//! - Input sanitisation, configurable ranges and batch scenario runs
//!
//! Every calculation is a pure function of its inputs: no I/O, no shared
//! state, bit-identical output for identical input.

pub mod compounding;
pub mod config;
pub mod error;
pub mod form;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod tax;

// Re-export commonly used types
pub use config::{CalculatorConfig, FieldRange};
pub use error::{EngineError, EngineResult};
pub use inputs::{Calculation, HraInput, Scenario, SipInput, SipMode, StepUpSipInput, SwpInput};
pub use projection::{ProjectionPoint, ProjectionSummary, SwpSummary};
pub use scenario::{Outcome, ScenarioResult, ScenarioRunner};
pub use tax::{HraBreakdown, HraComponents, HraResult};
