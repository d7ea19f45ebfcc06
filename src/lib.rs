//! Word Finder
//!
//! Finds every word in a word list that can be spelled from a set of letters,
//! either using any subset of them or, in anagram mode, all of them exactly.
//!
//! # Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use word_finder::scan::find_words;
//!
//! let list = Cursor::new("silent\nenlist\nlist\ntinsel\ngoogle\n");
//! let result = find_words("listen", false, list);
//! assert_eq!(result.matches, ["silent", "enlist", "list", "tinsel"]);
//! assert_eq!(result.count, 4);
//! ```

// Core letter-matching types
pub mod core;

// Word list scanning
pub mod scan;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Errors raised by the command layer
pub mod error;

// Logger setup
pub mod log;
