//! Word lists for scanning
//!
//! Provides a bundled dictionary and helpers to open file or stdin word lists.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use loader::WordSource;
