//! Interactive calculator session
//!
//! Drives the menu → inputs → compute → display cycle until the user picks
//! Exit. Each pass collects a fresh request value, so nothing carries over
//! from one calculation to the next.

use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::config::Limits;
use crate::console::Console;
use crate::display::menu::{
    GOAL_AMOUNT_PROMPT, LOAN_AMOUNT_PROMPT, MONTHLY_DEPOSIT_PROMPT, RATE_PROMPT, TERM_PROMPT,
};
use crate::display::{format_outcome, FAREWELL, FATAL_DEFECT};
use crate::error::{CalcError, CalcResult};
use crate::models::{
    Calculation, CalculationOutcome, DepositRequest, GoalRequest, LoanRequest, MenuChoice,
};
use crate::services::calculate;

/// How a session came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit
    Farewell,
    /// Standard input closed while waiting for a line
    InputClosed,
}

/// Summary returned when a session ends normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Number of results displayed
    pub calculations: usize,
}

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionState {
    MenuPrompt,
    CollectInputs(MenuChoice),
    Compute(Calculation),
    Display(CalculationOutcome),
    Exit,
}

/// What the run loop does after a transition
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue(SessionState),
    Finished(SessionEnd),
}

/// An interactive session over a console
pub struct Session<R, W> {
    console: Console<R, W>,
    limits: Limits,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `input` and writing to `output`
    pub fn new(input: R, output: W, limits: Limits) -> Self {
        Self {
            console: Console::new(input, output),
            limits,
        }
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run until the user exits or input closes
    ///
    /// An [`CalcError::UnexpectedState`] is reported to the user before it
    /// is returned; callers should terminate with a non-zero status.
    pub fn run(&mut self) -> CalcResult<SessionSummary> {
        let mut state = SessionState::MenuPrompt;
        let mut calculations = 0;

        info!("session started");

        loop {
            let result = self.step(state);
            match self.settle(result)? {
                Flow::Continue(next) => {
                    if matches!(state, SessionState::Display(_)) {
                        calculations += 1;
                    }
                    state = next;
                }
                Flow::Finished(end) => {
                    info!(calculations, ?end, "session finished");
                    return Ok(SessionSummary { end, calculations });
                }
            }
        }
    }

    /// Decide what follows a transition
    ///
    /// Closed input ends the session normally. An impossible state prints
    /// the fatal-defect message and is returned as an error.
    fn settle(&mut self, result: CalcResult<SessionState>) -> CalcResult<Flow> {
        match result {
            Ok(SessionState::Exit) => Ok(Flow::Finished(SessionEnd::Farewell)),
            Ok(next) => Ok(Flow::Continue(next)),
            Err(CalcError::InputClosed) => Ok(Flow::Finished(SessionEnd::InputClosed)),
            Err(err) if err.is_fatal() => {
                error!(error = %err, "session reached an impossible state");
                self.console.say(FATAL_DEFECT)?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Advance one transition
    fn step(&mut self, state: SessionState) -> CalcResult<SessionState> {
        match state {
            SessionState::MenuPrompt => {
                let choice = self.console.read_menu_choice()?;
                info!(?choice, "menu choice");
                if choice.is_exit() {
                    self.console.say(FAREWELL)?;
                    Ok(SessionState::Exit)
                } else {
                    Ok(SessionState::CollectInputs(choice))
                }
            }
            SessionState::CollectInputs(choice) => {
                Ok(SessionState::Compute(self.collect_inputs(choice)?))
            }
            SessionState::Compute(calculation) => {
                Ok(SessionState::Display(calculate(calculation)))
            }
            SessionState::Display(outcome) => {
                self.console.say(&format_outcome(&outcome))?;
                Ok(SessionState::MenuPrompt)
            }
            SessionState::Exit => Err(CalcError::UnexpectedState(
                "session stepped past exit".into(),
            )),
        }
    }

    /// Prompt for the inputs a menu choice needs
    fn collect_inputs(&mut self, choice: MenuChoice) -> CalcResult<Calculation> {
        let limits = self.limits;
        match choice {
            MenuChoice::LoanPayment => {
                let amount = self
                    .console
                    .read_number(LOAN_AMOUNT_PROMPT, limits.max_loan_amount)?;
                let (annual_rate, term_months) = self.read_rate_and_term()?;
                Ok(Calculation::LoanPayment(LoanRequest {
                    amount,
                    annual_rate,
                    term_months,
                }))
            }
            MenuChoice::FutureValue => {
                let monthly_deposit = self
                    .console
                    .read_number(MONTHLY_DEPOSIT_PROMPT, limits.max_monthly_deposit)?;
                let (annual_rate, term_months) = self.read_rate_and_term()?;
                Ok(Calculation::FutureValue(DepositRequest {
                    monthly_deposit,
                    annual_rate,
                    term_months,
                }))
            }
            MenuChoice::SavingsGoal => {
                let goal = self
                    .console
                    .read_number(GOAL_AMOUNT_PROMPT, limits.max_goal_amount)?;
                let (annual_rate, term_months) = self.read_rate_and_term()?;
                Ok(Calculation::SavingsGoal(GoalRequest {
                    goal,
                    annual_rate,
                    term_months,
                }))
            }
            MenuChoice::Exit => Err(CalcError::UnexpectedState(
                "asked to collect inputs for Exit".into(),
            )),
        }
    }

    fn read_rate_and_term(&mut self) -> CalcResult<(f64, f64)> {
        let rate = self
            .console
            .read_number(RATE_PROMPT, self.limits.max_annual_rate)?;
        let term = self
            .console
            .read_number(TERM_PROMPT, self.limits.max_term_months)?;
        Ok((rate, term))
    }
}
