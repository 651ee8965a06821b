//! Core data models for fincalc
//!
//! Menu choices, the per-calculation input groups, and the computed outcome.
//! Every value here is transient: built for one calculation and dropped.

pub mod choice;
pub mod outcome;
pub mod request;

pub use choice::MenuChoice;
pub use outcome::{CalculationKind, CalculationOutcome};
pub use request::{Calculation, DepositRequest, GoalRequest, LoanRequest};
