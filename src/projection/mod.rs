//! Investment projectors: SIP, step-up SIP and SWP

mod series;
mod state;
pub mod sip;
pub mod step_up;
pub mod swp;

pub use series::{ProjectionPoint, ProjectionSummary};
pub use state::StepUpState;
pub use swp::SwpSummary;
