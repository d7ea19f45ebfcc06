//! Terminal output formatting
//!
//! Display utilities for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_find_report, print_scramble_result};
