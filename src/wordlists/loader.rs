//! Word list sources
//!
//! Resolves the `--wordlist` argument to a readable, line-oriented source.

use super::EMBEDDED_WORDS;
use crate::error::FinderError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::PathBuf;

/// Where the candidate words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The dictionary bundled at build time
    Embedded,
    /// Standard input
    Stdin,
    /// A file on disk, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Interpret a CLI value: `embedded`, `-` for stdin, anything else is a path
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        match spec {
            "embedded" => Self::Embedded,
            "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Open the source for reading
    ///
    /// # Errors
    ///
    /// Returns `FinderError::Wordlist` if a file source cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, FinderError> {
        match self {
            Self::Embedded => Ok(Box::new(embedded_reader())),
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|error| FinderError::Wordlist {
                    source: path.display().to_string(),
                    error,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded word list"),
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The bundled dictionary as a line-per-word reader
#[must_use]
pub fn embedded_reader() -> Cursor<String> {
    Cursor::new(EMBEDDED_WORDS.join("\n"))
}
