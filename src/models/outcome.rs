//! Calculation outcome model
//!
//! The result of running one calculation, kept together with the inputs
//! that produced it so it can be printed or serialized as a unit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::request::Calculation;

/// Which formula produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    /// Monthly payment on an amortized loan
    LoanPayment,
    /// Total saved from a stream of monthly deposits
    FutureValue,
    /// Monthly deposit required to reach a goal
    SavingsGoal,
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoanPayment => write!(f, "Loan Payment"),
            Self::FutureValue => write!(f, "Future Value"),
            Self::SavingsGoal => write!(f, "Savings Goal"),
        }
    }
}

/// A computed result and the request it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub kind: CalculationKind,
    pub inputs: Calculation,
    /// Raw IEEE-754 result; NaN or infinite when the rate is zero
    pub value: f64,
}

impl CalculationOutcome {
    /// Returns true if the value is a usable finite amount
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}
