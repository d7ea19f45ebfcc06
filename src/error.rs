//! Error type for the command layer
//!
//! The scanning core never fails; errors only arise when resolving inputs.

use std::fmt;
use std::io;

/// Errors raised while preparing a command
#[derive(Debug)]
pub enum FinderError {
    /// The word list could not be opened
    Wordlist { source: String, error: io::Error },
    /// No letters were given to scramble
    EmptyLetters,
}

impl fmt::Display for FinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wordlist { source, error } => {
                write!(f, "Cannot open word list '{source}': {error}")
            }
            Self::EmptyLetters => write!(f, "Letters must contain at least one ASCII letter"),
        }
    }
}

impl std::error::Error for FinderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wordlist { error, .. } => Some(error),
            Self::EmptyLetters => None,
        }
    }
}
