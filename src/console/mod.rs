//! Line-based console input
//!
//! Prompts the user and loops until a valid menu choice or number is
//! entered. Generic over the reader and writer so sessions can be driven
//! from in-memory buffers.

pub mod reader;

pub use reader::{parse_number, Console};
