//! Salary tax-exemption calculators

pub mod hra;

pub use hra::{compute, compute_breakdown, HraBreakdown, HraComponents, HraResult};
