//! fincalc - Terminal financial calculator
//!
//! This library provides the core of the fincalc calculator: three
//! closed-form amortization formulas behind a menu-driven console session
//! that re-prompts until every input is valid.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Input limits
//! - `error`: Custom error types
//! - `models`: Menu choices, calculation requests and outcomes
//! - `services`: The formulas and the calculator dispatch
//! - `console`: Retry-until-valid line input
//! - `display`: Text formatting for everything printed
//! - `session`: The interactive menu loop
//! - `cli`: Command handlers for the `fincalc` binary
//!
//! # Example
//!
//! ```rust
//! use fincalc::services::formulas::loan_payment;
//!
//! let payment = loan_payment(100_000.0, 0.05 / 12.0, 120.0);
//! assert_eq!(format!("{:.2}", payment), "1060.66");
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use error::{CalcError, CalcResult};
