//! Display formatting for terminal output
//!
//! Everything the calculator prints is built here as a `String`, so the
//! session and the one-shot commands share the exact wording.

pub mod limits;
pub mod menu;
pub mod outcome;

pub use limits::format_limits;
pub use menu::{format_menu, FAREWELL, FATAL_DEFECT, INVALID_CHOICE, NOT_A_NUMBER};
pub use outcome::{format_outcome, format_outcome_json};
