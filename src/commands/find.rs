//! Word finding command
//!
//! Scans a word list for every word formable from the given letters.

use crate::core::Query;
use crate::scan::{CandidateWords, FindResult, find_in_candidates};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::io::BufRead;
use std::time::{Duration, Instant};

/// Configuration for a find run
pub struct FindConfig {
    pub letters: String,
    pub anagrams_only: bool,
    /// Stop after reading this many candidates
    pub max_words: Option<usize>,
    /// Printed after every match
    pub separator: String,
    pub progress: bool,
}

impl FindConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            anagrams_only: false,
            max_words: None,
            separator: "\n".to_string(),
            progress: false,
        }
    }
}

/// Outcome of a find run
pub struct FindReport {
    pub letters: String,
    pub anagrams_only: bool,
    pub separator: String,
    pub result: FindResult,
    pub scanned: u64,
    pub duration: Duration,
}

/// Run a find over `source`
///
/// Candidates beyond `max_words` are never read.
pub fn run_find<R: BufRead>(config: FindConfig, source: R) -> FindReport {
    let query = Query::new(&config.letters, config.anagrams_only);

    let pb = if config.progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {pos} words scanned | {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("letters: {}", query.letters()));

    let mut scanned = 0u64;
    let start = Instant::now();
    let candidates = CandidateWords::new(source)
        .take(config.max_words.unwrap_or(usize::MAX))
        .inspect(|_| scanned += 1)
        .progress_with(pb.clone());
    let result = find_in_candidates(&query, candidates);
    let duration = start.elapsed();

    pb.finish_and_clear();

    FindReport {
        letters: config.letters,
        anagrams_only: config.anagrams_only,
        separator: config.separator,
        result,
        scanned,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LIST: &str = "silent\nenlist\nlist\ntinsel\ngoogle\n";

    #[test]
    fn config_defaults() {
        let config = FindConfig::new("abc");
        assert_eq!(config.letters, "abc");
        assert!(!config.anagrams_only);
        assert_eq!(config.max_words, None);
        assert_eq!(config.separator, "\n");
        assert!(!config.progress);
    }

    #[test]
    fn run_find_counts_scanned() {
        let report = run_find(FindConfig::new("listen"), Cursor::new(LIST));
        assert_eq!(report.result.count, 4);
        assert_eq!(report.scanned, 5);
        assert_eq!(report.letters, "listen");
    }

    #[test]
    fn run_find_anagrams() {
        let config = FindConfig {
            anagrams_only: true,
            ..FindConfig::new("listen")
        };
        let report = run_find(config, Cursor::new(LIST));
        assert_eq!(report.result.matches, ["silent", "enlist", "tinsel"]);
        assert!(report.anagrams_only);
    }

    #[test]
    fn run_find_max_words() {
        let config = FindConfig {
            max_words: Some(2),
            ..FindConfig::new("listen")
        };
        let report = run_find(config, Cursor::new(LIST));
        assert_eq!(report.result.matches, ["silent", "enlist"]);
        assert_eq!(report.scanned, 2);
    }

    #[test]
    fn run_find_zero_max_words_reads_nothing() {
        let config = FindConfig {
            max_words: Some(0),
            ..FindConfig::new("listen")
        };
        let report = run_find(config, Cursor::new(LIST));
        assert!(report.result.is_empty());
        assert_eq!(report.scanned, 0);
    }
}
