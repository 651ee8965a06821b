//! Menu choice model
//!
//! The four entries of the main menu and their single-letter keys.

use std::fmt;

/// An entry on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// A: monthly payment on a loan
    LoanPayment,
    /// B: amount accumulated from regular monthly deposits
    FutureValue,
    /// C: monthly deposit needed to reach a goal
    SavingsGoal,
    /// D: leave the calculator
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 4] = [
        Self::LoanPayment,
        Self::FutureValue,
        Self::SavingsGoal,
        Self::Exit,
    ];

    /// The letter the user types to select this entry
    pub const fn letter(&self) -> char {
        match self {
            Self::LoanPayment => 'A',
            Self::FutureValue => 'B',
            Self::SavingsGoal => 'C',
            Self::Exit => 'D',
        }
    }

    /// Menu label shown next to the letter
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LoanPayment => "Loan Payment",
            Self::FutureValue => "Future Value",
            Self::SavingsGoal => "Savings Goal",
            Self::Exit => "Exit",
        }
    }

    /// Parse a line of user input
    ///
    /// Accepts exactly one letter A-D in either case, ignoring surrounding
    /// whitespace. Anything else yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match letter.to_ascii_uppercase() {
            'A' => Some(Self::LoanPayment),
            'B' => Some(Self::FutureValue),
            'C' => Some(Self::SavingsGoal),
            'D' => Some(Self::Exit),
            _ => None,
        }
    }

    /// Returns true if choosing this entry ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.letter(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_either_case() {
        assert_eq!(MenuChoice::parse("a"), Some(MenuChoice::LoanPayment));
        assert_eq!(MenuChoice::parse("B"), Some(MenuChoice::FutureValue));
        assert_eq!(MenuChoice::parse(" c \n"), Some(MenuChoice::SavingsGoal));
        assert_eq!(MenuChoice::parse("d"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for input in ["", "   ", "e", "Z", "1", "ab", "AA", "loan", "é"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_letters_round_trip_through_parse() {
        for choice in MenuChoice::ALL {
            let lower = choice.letter().to_ascii_lowercase().to_string();
            assert_eq!(MenuChoice::parse(&lower), Some(choice));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuChoice::LoanPayment.to_string(), "A. Loan Payment");
        assert_eq!(MenuChoice::Exit.to_string(), "D. Exit");
        assert!(MenuChoice::Exit.is_exit());
        assert!(!MenuChoice::SavingsGoal.is_exit());
    }
}
