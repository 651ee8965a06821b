//! One-shot calculation commands
//!
//! Compute a single formula from command-line flags. Flags are checked
//! against the same limits the interactive prompts use, but a bad value is
//! an error rather than a re-prompt.

use clap::{Args, Subcommand};
use tracing::info;

use crate::config::Limits;
use crate::display::{format_outcome, format_outcome_json};
use crate::error::CalcResult;
use crate::models::{Calculation, CalculationOutcome, DepositRequest, GoalRequest, LoanRequest};
use crate::services::calculate;

/// Rate and term shared by every calculation
#[derive(Args, Debug, Clone, Copy)]
pub struct RateTermArgs {
    /// Annual interest rate as a decimal (5% -> 0.05)
    #[arg(short, long)]
    pub rate: f64,
    /// Term in months
    #[arg(short, long)]
    pub term: f64,
}

/// Calculation subcommands
#[derive(Subcommand, Debug)]
pub enum CalculateCommand {
    /// Monthly payment on a loan
    Loan {
        /// Amount borrowed
        #[arg(short, long)]
        amount: f64,
        #[command(flatten)]
        rate_term: RateTermArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Total saved by depositing a fixed amount every month
    #[command(alias = "fv")]
    FutureValue {
        /// Amount deposited each month
        #[arg(short, long)]
        deposit: f64,
        #[command(flatten)]
        rate_term: RateTermArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Monthly deposit needed to reach a savings goal
    #[command(alias = "goal")]
    SavingsGoal {
        /// Target amount
        #[arg(short, long)]
        goal: f64,
        #[command(flatten)]
        rate_term: RateTermArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CalculateCommand {
    /// Build the request this command describes
    pub fn to_calculation(&self) -> Calculation {
        match *self {
            Self::Loan {
                amount, rate_term, ..
            } => Calculation::LoanPayment(LoanRequest {
                amount,
                annual_rate: rate_term.rate,
                term_months: rate_term.term,
            }),
            Self::FutureValue {
                deposit, rate_term, ..
            } => Calculation::FutureValue(DepositRequest {
                monthly_deposit: deposit,
                annual_rate: rate_term.rate,
                term_months: rate_term.term,
            }),
            Self::SavingsGoal {
                goal, rate_term, ..
            } => Calculation::SavingsGoal(GoalRequest {
                goal,
                annual_rate: rate_term.rate,
                term_months: rate_term.term,
            }),
        }
    }

    fn json(&self) -> bool {
        match *self {
            Self::Loan { json, .. }
            | Self::FutureValue { json, .. }
            | Self::SavingsGoal { json, .. } => json,
        }
    }
}

/// Validate and compute a one-shot calculation
pub fn run_calculation(cmd: &CalculateCommand, limits: &Limits) -> CalcResult<CalculationOutcome> {
    let calculation = cmd.to_calculation();
    calculation.validate(limits)?;
    Ok(calculate(calculation))
}

/// Handle a calculation command
pub fn handle_calculate_command(cmd: CalculateCommand, limits: &Limits) -> CalcResult<()> {
    let outcome = run_calculation(&cmd, limits)?;
    info!(kind = %outcome.kind, "one-shot calculation");

    if cmd.json() {
        println!("{}", format_outcome_json(&outcome)?);
    } else {
        println!("{}", format_outcome(&outcome));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    fn rate_term(rate: f64, term: f64) -> RateTermArgs {
        RateTermArgs { rate, term }
    }

    #[test]
    fn test_run_loan() {
        let cmd = CalculateCommand::Loan {
            amount: 100_000.0,
            rate_term: rate_term(0.05, 60.0),
            json: false,
        };
        let outcome = run_calculation(&cmd, &Limits::default()).unwrap();
        assert_eq!(format_outcome(&outcome), "Monthly payment will be 1887.12.");
    }

    #[test]
    fn test_run_loan_rejects_term_at_limit() {
        let cmd = CalculateCommand::Loan {
            amount: 100_000.0,
            rate_term: rate_term(0.05, 120.0),
            json: false,
        };
        assert!(matches!(
            run_calculation(&cmd, &Limits::default()),
            Err(CalcError::OutOfRange { field: "term", .. })
        ));
    }

    #[test]
    fn test_run_rejects_out_of_range_term() {
        let cmd = CalculateCommand::SavingsGoal {
            goal: 10_000.0,
            rate_term: rate_term(0.05, 120.0),
            json: true,
        };
        match run_calculation(&cmd, &Limits::default()) {
            Err(CalcError::OutOfRange { field, .. }) => assert_eq!(field, "term"),
            other => panic!("expected term out of range, got {other:?}"),
        }
    }

    #[test]
    fn test_to_calculation_maps_fields() {
        let cmd = CalculateCommand::FutureValue {
            deposit: 100.0,
            rate_term: rate_term(0.05, 12.0),
            json: true,
        };
        assert!(cmd.json());
        assert_eq!(
            cmd.to_calculation(),
            Calculation::FutureValue(DepositRequest {
                monthly_deposit: 100.0,
                annual_rate: 0.05,
                term_months: 12.0,
            })
        );
    }
}
