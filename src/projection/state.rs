//! Accumulator state for the month-by-month step-up projection

use crate::compounding::{monthly_rate, MONTHS_PER_YEAR};
use crate::inputs::StepUpSipInput;

/// Running position of a step-up SIP at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepUpState {
    /// Current projection year (1-indexed, 0 before the first month)
    pub year: u32,

    /// Month within the current year (1-12, 0 before the first month)
    pub month_in_year: u32,

    /// Contribution paid each month of the current year
    pub monthly_contribution: f64,

    /// Portfolio balance after the latest month's compounding
    pub balance: f64,

    /// Cumulative amount invested
    pub contributed: f64,

    /// Monthly decimal return
    pub monthly_rate: f64,

    /// Yearly contribution multiplier (1 + step-up)
    pub step_up_factor: f64,
}

impl StepUpState {
    /// Initialize state at projection start
    pub fn from_input(input: &StepUpSipInput) -> Self {
        Self {
            year: 0,
            month_in_year: 0,
            monthly_contribution: input.initial_monthly_contribution,
            balance: 0.0,
            contributed: 0.0,
            monthly_rate: monthly_rate(input.annual_rate_percent),
            step_up_factor: 1.0 + input.annual_step_up_percent / 100.0,
        }
    }

    /// Pay this month's contribution, then compound the balance for the month
    pub fn advance_month(&mut self) {
        if self.month_in_year == MONTHS_PER_YEAR || self.year == 0 {
            self.year += 1;
            self.month_in_year = 0;
        }
        self.month_in_year += 1;

        self.contributed += self.monthly_contribution;
        self.balance = (self.balance + self.monthly_contribution) * (1.0 + self.monthly_rate);
    }

    /// Raise the monthly contribution for the following year
    pub fn step_up(&mut self) {
        self.monthly_contribution *= self.step_up_factor;
    }

    /// Run the twelve months of the next year, then apply the step-up
    pub fn advance_year(&mut self) {
        for _ in 0..MONTHS_PER_YEAR {
            self.advance_month();
        }
        self.step_up();
    }
}
