//! Retry-until-valid console reader

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::limits::in_range;
use crate::display::menu::{format_menu, format_out_of_range, format_prompt};
use crate::display::{INVALID_CHOICE, NOT_A_NUMBER};
use crate::error::{CalcError, CalcResult};
use crate::models::MenuChoice;

/// Prompt shown under the menu entries
pub const CHOICE_PROMPT: &str = "Choice: ";

/// Parse a line as a finite decimal number
///
/// `NaN` and `inf` parse as `f64` but are not numbers a user can mean here.
pub fn parse_number(s: &str) -> CalcResult<f64> {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::NotANumber(trimmed.to_string())),
    }
}

/// A prompting reader over any line source and text sink
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given input and output
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line of text
    pub fn say(&mut self, line: &str) -> CalcResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one trimmed line
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so such a line is rejected by the usual validation and re-prompted.
    fn prompt(&mut self, prompt: &str) -> CalcResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(CalcError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Show the menu until the user enters a valid choice
    pub fn read_menu_choice(&mut self) -> CalcResult<MenuChoice> {
        loop {
            write!(self.output, "{}", format_menu())?;
            let line = self.prompt(CHOICE_PROMPT)?;

            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => {
                    debug!(input = %line, "rejected menu input");
                    self.say(INVALID_CHOICE)?;
                }
            }
        }
    }

    /// Prompt until the user enters a number in `[0, max)`
    pub fn read_number(&mut self, prompt: &str, max: f64) -> CalcResult<f64> {
        let prompt = format_prompt(prompt, max);
        loop {
            let line = self.prompt(&prompt)?;

            match parse_number(&line) {
                Ok(value) if in_range(value, max) => return Ok(value),
                Ok(value) => {
                    debug!(value, max, "rejected out-of-range input");
                    self.say(&format_out_of_range(value))?;
                }
                Err(_) => {
                    debug!(input = %line, "rejected non-numeric input");
                    self.say(NOT_A_NUMBER)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        console_bytes(input.as_bytes())
    }

    fn console_bytes(input: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5").unwrap(), 12.5);
        assert_eq!(parse_number("  7 \n").unwrap(), 7.0);
        assert_eq!(parse_number("-3").unwrap(), -3.0);
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("1,000").is_err());
    }

    #[test]
    fn test_read_number_accepts_value_in_range() {
        let mut c = console("0.05\n");
        assert_eq!(c.read_number("Rate: ", 1.0).unwrap(), 0.05);
    }

    #[test]
    fn test_read_number_accepts_zero() {
        let mut c = console("0\n");
        assert_eq!(c.read_number("Amount: ", 1_000.0).unwrap(), 0.0);
    }

    #[test]
    fn test_read_number_retries_until_valid() {
        let mut c = console("abc\n-1\n120\n119.5\n");
        assert_eq!(c.read_number("Term: ", 120.0).unwrap(), 119.5);

        let output = output_of(c);
        assert!(output.contains(NOT_A_NUMBER));
        assert!(output.contains("-1.00 is out of range."));
        assert!(output.contains("120.00 is out of range."));
        assert_eq!(output.matches("Term: 120: ").count(), 4);
    }

    #[test]
    fn test_read_number_retries_invalid_utf8() {
        let mut c = console_bytes(b"\xff\xfe\n42\n");
        assert_eq!(c.read_number("Amount: ", 100.0).unwrap(), 42.0);
        assert!(output_of(c).contains(NOT_A_NUMBER));
    }

    #[test]
    fn test_read_menu_choice_retries_invalid_utf8() {
        let mut c = console_bytes(b"\xc3\n\xffA\nb\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::FutureValue);
        assert_eq!(output_of(c).matches(INVALID_CHOICE).count(), 2);
    }

    #[test]
    fn test_read_number_input_closed() {
        let mut c = console("not a number\n");
        assert!(matches!(
            c.read_number("Amount: ", 10.0),
            Err(CalcError::InputClosed)
        ));
    }

    #[test]
    fn test_read_menu_choice_normalizes_case() {
        let mut c = console("c\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::SavingsGoal);
    }

    #[test]
    fn test_read_menu_choice_retries() {
        let mut c = console("\nx\nab\n5\nD\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Exit);

        let output = output_of(c);
        assert_eq!(output.matches(INVALID_CHOICE).count(), 4);
        assert_eq!(output.matches("A. Loan Payment").count(), 5);
    }
}
