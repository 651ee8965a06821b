//! Calculation outcome formatting

use crate::error::CalcResult;
use crate::models::{CalculationKind, CalculationOutcome};

/// Format the one-line result for an outcome, to two decimal places
pub fn format_outcome(outcome: &CalculationOutcome) -> String {
    match outcome.kind {
        CalculationKind::LoanPayment => {
            format!("Monthly payment will be {:.2}.", outcome.value)
        }
        CalculationKind::FutureValue => format!("Savings goal {:.2}.", outcome.value),
        CalculationKind::SavingsGoal => format!("Save {:.2} each month.", outcome.value),
    }
}

/// Format an outcome as pretty JSON
///
/// Non-finite values serialize as `null`.
pub fn format_outcome_json(outcome: &CalculationOutcome) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
