//! Calculator service
//!
//! Dispatches a collected [`Calculation`] to its formula.

use tracing::{debug, warn};

use crate::models::{Calculation, CalculationKind, CalculationOutcome};

use super::formulas::{future_value_deposit, loan_payment, savings_goal};

/// Run one calculation
pub fn calculate(calculation: Calculation) -> CalculationOutcome {
    let (kind, value) = match calculation {
        Calculation::LoanPayment(req) => (
            CalculationKind::LoanPayment,
            loan_payment(req.amount, req.monthly_rate(), req.term_months),
        ),
        Calculation::FutureValue(req) => (
            CalculationKind::FutureValue,
            savings_goal(req.monthly_deposit, req.monthly_rate(), req.term_months),
        ),
        Calculation::SavingsGoal(req) => (
            CalculationKind::SavingsGoal,
            future_value_deposit(req.goal, req.monthly_rate(), req.term_months),
        ),
    };

    if value.is_finite() {
        debug!(%kind, value, "calculation complete");
    } else {
        warn!(%kind, value, "calculation produced a non-finite result");
    }

    CalculationOutcome {
        kind,
        inputs: calculation,
        value,
    }
}
