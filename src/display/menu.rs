//! Menu and prompt text

use crate::models::MenuChoice;

/// Heading printed above the menu entries
pub const MENU_HEADING: &str = "Please enter the letter for one of the following:";

/// Printed when the menu input is not a single letter A-D
pub const INVALID_CHOICE: &str = "Invalid choice";

/// Printed when a numeric prompt gets something that is not a number
pub const NOT_A_NUMBER: &str = "You have not entered a number";

/// Printed when the user chooses to exit
pub const FAREWELL: &str = "Thank you for using the fincalc calculator";

/// Printed before terminating on an impossible internal state
pub const FATAL_DEFECT: &str = "Something has gone wrong. Call IT department.";

pub const LOAN_AMOUNT_PROMPT: &str = "Enter loan amount, maximum: ";
pub const MONTHLY_DEPOSIT_PROMPT: &str = "Enter monthly savings amount, maximum: ";
pub const GOAL_AMOUNT_PROMPT: &str = "Enter savings goal amount, maximum: ";
pub const RATE_PROMPT: &str = "Enter interest rate as a decimal (5% -> 0.05), maximum: ";
pub const TERM_PROMPT: &str = "Enter the term in months, maximum: ";

/// Format the full menu, one entry per line
pub fn format_menu() -> String {
    let mut output = String::new();
    output.push_str(MENU_HEADING);
    output.push('\n');
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
    }
    output
}

/// Format a numeric prompt with its exclusive maximum
pub fn format_prompt(prompt: &str, max: f64) -> String {
    format!("{}{}: ", prompt, max)
}

/// Format the rejection for a value outside `[0, max)`
pub fn format_out_of_range(value: f64) -> String {
    format!("{:.2} is out of range.", value)
}
