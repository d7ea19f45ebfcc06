//! Word list scanning
//!
//! Turns a readable word list into candidates and filters them against a query.

pub mod finder;
pub mod reader;

pub use finder::{FindResult, find_in_candidates, find_words, find_words_into};
pub use reader::{Candidate, CandidateWords, MAX_LINE_LEN};
