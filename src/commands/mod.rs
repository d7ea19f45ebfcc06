//! Command implementations

pub mod find;
pub mod scramble;

pub use find::{FindConfig, FindReport, run_find};
pub use scramble::{ScrambleResult, scramble};
