//! Interactive session command

use std::io;

use crate::config::Limits;
use crate::error::CalcResult;
use crate::session::{Session, SessionSummary};

/// Run an interactive session on stdin/stdout
pub fn handle_session_command(limits: Limits) -> CalcResult<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), limits);
    session.run()
}
