//! Calculator inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    Calculation, HraInput, Scenario, SipInput, SipMode, StepUpSipInput, SwpInput,
    DEFAULT_STEP_UP_YEARS, METRO_SALARY_SHARE, NON_METRO_SALARY_SHARE, RENT_SALARY_THRESHOLD,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
