//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the calculator services.

pub mod calculate;
pub mod limits;
pub mod session;

pub use calculate::{handle_calculate_command, CalculateCommand};
pub use limits::handle_limits_command;
pub use session::handle_session_command;
