//! Input limits for fincalc
//!
//! Every numeric input is accepted in the half-open range `[0, max)`. The
//! maximums live here so the interactive prompts and the one-shot commands
//! share them.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Exclusive upper bounds for each kind of numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum loan principal
    #[serde(default = "default_max_amount")]
    pub max_loan_amount: f64,

    /// Maximum savings goal
    #[serde(default = "default_max_amount")]
    pub max_goal_amount: f64,

    /// Maximum monthly savings deposit
    #[serde(default = "default_max_monthly_deposit")]
    pub max_monthly_deposit: f64,

    /// Maximum annual interest rate, as a decimal (0.05 = 5%)
    #[serde(default = "default_max_annual_rate")]
    pub max_annual_rate: f64,

    /// Maximum term in months
    #[serde(default = "default_max_term_months")]
    pub max_term_months: f64,
}

fn default_max_amount() -> f64 {
    1_000_000.0
}

fn default_max_monthly_deposit() -> f64 {
    1_000.0
}

fn default_max_annual_rate() -> f64 {
    1.0
}

fn default_max_term_months() -> f64 {
    120.0
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_loan_amount: default_max_amount(),
            max_goal_amount: default_max_amount(),
            max_monthly_deposit: default_max_monthly_deposit(),
            max_annual_rate: default_max_annual_rate(),
            max_term_months: default_max_term_months(),
        }
    }
}

/// Check that a value lies in `[0, max)`
///
/// NaN fails `value >= 0.0`, so it is never in range.
pub fn in_range(value: f64, max: f64) -> bool {
    value >= 0.0 && value < max
}

/// Validate a named value against `[0, max)`
pub fn check_range(field: &'static str, value: f64, max: f64) -> CalcResult<f64> {
    if in_range(value, max) {
        Ok(value)
    } else {
        Err(CalcError::out_of_range(field, value, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_loan_amount, 1_000_000.0);
        assert_eq!(limits.max_goal_amount, 1_000_000.0);
        assert_eq!(limits.max_monthly_deposit, 1_000.0);
        assert_eq!(limits.max_annual_rate, 1.0);
        assert_eq!(limits.max_term_months, 120.0);
    }

    #[test]
    fn test_in_range_is_half_open() {
        assert!(in_range(0.0, 120.0));
        assert!(in_range(119.99, 120.0));
        assert!(!in_range(120.0, 120.0));
        assert!(!in_range(-0.01, 120.0));
        assert!(!in_range(f64::NAN, 120.0));
    }

    #[test]
    fn test_check_range_names_field() {
        let err = check_range("rate", 1.5, 1.0).unwrap_err();
        match err {
            CalcError::OutOfRange { field, value, max } => {
                assert_eq!(field, "rate");
                assert_eq!(value, 1.5);
                assert_eq!(max, 1.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(check_range("rate", 0.05, 1.0).unwrap(), 0.05);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"max_term_months": 360.0}"#).unwrap();
        assert_eq!(limits.max_term_months, 360.0);
        assert_eq!(limits.max_loan_amount, 1_000_000.0);
    }
}
