//! Business logic layer for fincalc
//!
//! The closed-form formulas, and the calculator that maps a collected
//! request onto the right formula.

pub mod calculator;
pub mod formulas;

pub use calculator::calculate;
