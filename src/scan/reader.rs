//! Candidate word stream
//!
//! Reads a word list one line at a time, producing one candidate per line.
//! Lines are read in chunks of at most [`MAX_LINE_LEN`] bytes; a longer line
//! is split and every chunk becomes a candidate of its own. Within a chunk
//! the word ends at the first whitespace (or NUL) byte and the rest of the
//! chunk is ignored.

use log::warn;
use std::borrow::Cow;
use std::io::{self, BufRead};

/// Maximum number of bytes read per line chunk, newline included
pub const MAX_LINE_LEN: usize = 63;

/// Word boundary test: ASCII whitespace (vertical tab included) or NUL
#[inline]
#[must_use]
pub const fn is_word_boundary(byte: u8) -> bool {
    byte == 0 || byte == 0x0B || byte.is_ascii_whitespace()
}

/// One line chunk of the word list and the word at its start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    line: Vec<u8>,
    word_len: usize,
}

impl Candidate {
    /// Wrap a raw line chunk
    #[must_use]
    pub fn from_line(line: Vec<u8>) -> Self {
        let word_len = line
            .iter()
            .position(|&byte| is_word_boundary(byte))
            .unwrap_or(line.len());
        Self { line, word_len }
    }

    /// Length of the word (leading non-whitespace bytes)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_len
    }

    /// True for blank lines and lines starting with whitespace
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_len == 0
    }

    /// The word's raw bytes
    #[inline]
    #[must_use]
    pub fn word_bytes(&self) -> &[u8] {
        &self.line[..self.word_len]
    }

    /// The word as text, invalid UTF-8 replaced
    #[must_use]
    pub fn word(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.word_bytes())
    }

    /// Consume the chunk, keeping only the word
    #[must_use]
    pub fn into_word(mut self) -> String {
        self.line.truncate(self.word_len);
        match String::from_utf8(self.line) {
            Ok(word) => word,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

/// Lazy sequence of candidates read from a word list
///
/// Yields `None` once the source is exhausted. A read error also ends the
/// sequence; it is logged and not reported further.
pub struct CandidateWords<R> {
    reader: R,
    max_line_len: usize,
    done: bool,
}

impl<R: BufRead> CandidateWords<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self::with_max_line_len(reader, MAX_LINE_LEN)
    }

    /// Use a custom chunk size (at least one byte)
    #[must_use]
    pub const fn with_max_line_len(reader: R, max_line_len: usize) -> Self {
        Self {
            reader,
            max_line_len: if max_line_len == 0 { 1 } else { max_line_len },
            done: false,
        }
    }

    /// Read bytes up to and including the next newline, capped at the chunk size
    fn read_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();

        while line.len() < self.max_line_len {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                break;
            }

            let room = self.max_line_len - line.len();
            let window = &available[..available.len().min(room)];

            if let Some(pos) = window.iter().position(|&byte| byte == b'\n') {
                line.extend_from_slice(&window[..=pos]);
                self.reader.consume(pos + 1);
                return Ok(Some(line));
            }

            let taken = window.len();
            line.extend_from_slice(window);
            self.reader.consume(taken);
        }

        Ok(if line.is_empty() { None } else { Some(line) })
    }
}

impl<R: BufRead> Iterator for CandidateWords<R> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_chunk() {
            Ok(Some(line)) => Some(Candidate::from_line(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                warn!("Word list read failed, stopping scan: {err}");
                self.done = true;
                None
            }
        }
    }
}
