//! Calculation request models
//!
//! Each menu entry collects its own small group of inputs. The groups are
//! passed by value into the calculator rather than kept as shared state
//! between prompts.

use serde::{Deserialize, Serialize};

use crate::config::limits::{check_range, Limits};
use crate::error::CalcResult;

/// Months per year, used to turn an annual rate into a monthly one
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Inputs for a loan payment calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed
    pub amount: f64,
    /// Annual interest rate as a decimal (0.05 = 5%)
    pub annual_rate: f64,
    /// Term in months
    pub term_months: f64,
}

/// Inputs for projecting what regular monthly deposits grow to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    /// Amount deposited each month
    pub monthly_deposit: f64,
    /// Annual interest rate as a decimal
    pub annual_rate: f64,
    /// Term in months
    pub term_months: f64,
}

/// Inputs for finding the monthly deposit that reaches a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalRequest {
    /// Target amount
    pub goal: f64,
    /// Annual interest rate as a decimal
    pub annual_rate: f64,
    /// Term in months
    pub term_months: f64,
}

impl LoanRequest {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / MONTHS_PER_YEAR
    }

    /// Check every field against the configured limits
    pub fn validate(&self, limits: &Limits) -> CalcResult<()> {
        check_range("amount", self.amount, limits.max_loan_amount)?;
        check_range("rate", self.annual_rate, limits.max_annual_rate)?;
        check_range("term", self.term_months, limits.max_term_months)?;
        Ok(())
    }
}

impl DepositRequest {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / MONTHS_PER_YEAR
    }

    /// Check every field against the configured limits
    pub fn validate(&self, limits: &Limits) -> CalcResult<()> {
        check_range("deposit", self.monthly_deposit, limits.max_monthly_deposit)?;
        check_range("rate", self.annual_rate, limits.max_annual_rate)?;
        check_range("term", self.term_months, limits.max_term_months)?;
        Ok(())
    }
}

impl GoalRequest {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / MONTHS_PER_YEAR
    }

    /// Check every field against the configured limits
    pub fn validate(&self, limits: &Limits) -> CalcResult<()> {
        check_range("goal", self.goal, limits.max_goal_amount)?;
        check_range("rate", self.annual_rate, limits.max_annual_rate)?;
        check_range("term", self.term_months, limits.max_term_months)?;
        Ok(())
    }
}

/// One fully collected calculation, ready to compute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    LoanPayment(LoanRequest),
    FutureValue(DepositRequest),
    SavingsGoal(GoalRequest),
}

impl Calculation {
    /// Validate the wrapped request against the limits
    pub fn validate(&self, limits: &Limits) -> CalcResult<()> {
        match self {
            Self::LoanPayment(req) => req.validate(limits),
            Self::FutureValue(req) => req.validate(limits),
            Self::SavingsGoal(req) => req.validate(limits),
        }
    }
}
