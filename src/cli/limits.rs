//! Limits command

use crate::config::Limits;
use crate::display::format_limits;
use crate::error::CalcResult;

/// Print the input limits as text or JSON
pub fn handle_limits_command(limits: &Limits, json: bool) -> CalcResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(limits)?);
    } else {
        print!("{}", format_limits(limits));
    }
    Ok(())
}
