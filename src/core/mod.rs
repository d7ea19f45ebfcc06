//! Core letter-matching types
//!
//! This module contains the pure matching logic with zero external dependencies.
//! Everything here is deterministic and free of I/O.

mod matcher;
mod multiset;

pub use matcher::{Query, matches};
pub use multiset::{ALPHABET_SIZE, LetterMultiset, equal, letter_index};
