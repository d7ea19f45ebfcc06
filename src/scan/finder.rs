//! Word list scan
//!
//! Evaluates every candidate of a word list against one query and collects
//! the matches in source order.

use super::reader::{Candidate, CandidateWords};
use crate::core::Query;
use log::{debug, trace};
use std::io::BufRead;

/// Matches found by a scan, in the order they were read
///
/// Duplicates in the word list are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindResult {
    pub matches: Vec<String>,
    pub count: usize,
}

impl FindResult {
    fn push(&mut self, word: String) {
        self.matches.push(word);
        self.count += 1;
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Join the matches, writing `separator` after each one
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        append_matches(&mut out, &self.matches, separator);
        out
    }
}

fn append_matches(out: &mut String, matches: &[String], separator: &str) {
    for word in matches {
        out.push_str(word);
        out.push_str(separator);
    }
}

/// Find every word in `source` that can be spelled from `available_letters`
///
/// The source holds one word per line; anything after the first whitespace
/// on a line is ignored. Reading stops at end of input or at the first read
/// error, returning whatever was found until then.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use word_finder::scan::find_words;
///
/// let list = Cursor::new("silent\nenlist\nlist\ntinsel\ngoogle\n");
/// let result = find_words("listen", true, list);
/// assert_eq!(result.matches, ["silent", "enlist", "tinsel"]);
/// assert_eq!(result.count, 3);
/// ```
pub fn find_words<R: BufRead>(available_letters: &str, anagrams_only: bool, source: R) -> FindResult {
    let query = Query::new(available_letters, anagrams_only);
    find_in_candidates(&query, CandidateWords::new(source))
}

/// Scan an arbitrary candidate sequence with a prepared query
pub fn find_in_candidates<I>(query: &Query, candidates: I) -> FindResult
where
    I: IntoIterator<Item = Candidate>,
{
    debug!(
        "Scanning for '{}' (length bound {}, anagrams only: {})",
        query.letters(),
        query.effective_len(),
        query.anagrams_only()
    );

    let mut result = FindResult::default();
    let mut scanned = 0usize;

    for candidate in candidates {
        scanned += 1;

        // Cheap rejection before the letter-by-letter test
        if !query.fits_length(candidate.len()) {
            continue;
        }

        if query.accepts(candidate.word_bytes()) {
            let word = candidate.into_word();
            trace!("Match: {word}");
            result.push(word);
        }
    }

    debug!("Scanned {scanned} candidates, {} matched", result.count);
    result
}

/// Append matches to a caller-owned buffer and return how many were found
///
/// Each match is followed by `separator`.
pub fn find_words_into<R: BufRead>(
    available_letters: &str,
    anagrams_only: bool,
    source: R,
    out: &mut String,
    separator: &str,
) -> usize {
    let result = find_words(available_letters, anagrams_only, source);
    append_matches(out, &result.matches, separator);
    result.count
}
