//! Configuration module for fincalc
//!
//! The calculator reads no configuration files or environment variables.
//! This module holds the input bounds the prompts and one-shot commands
//! validate against.

pub mod limits;

pub use limits::Limits;
