//! Candidate word matching against a set of available letters
//!
//! A word matches when every letter it uses is available often enough. In
//! anagram mode it must additionally use every available letter exactly.

use super::multiset::{LetterMultiset, equal, letter_index};

/// Read-only context for one scan: the available letters and the match mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    letters: LetterMultiset,
    effective_len: usize,
    anagrams_only: bool,
}

impl Query {
    /// Build the query for `available_letters`
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Query;
    ///
    /// let query = Query::new("listen", true);
    /// assert!(query.accepts("silent"));
    /// assert!(!query.accepts("list"));
    /// ```
    #[must_use]
    pub fn new(available_letters: &str, anagrams_only: bool) -> Self {
        let (letters, effective_len) = LetterMultiset::build(available_letters);
        Self {
            letters,
            effective_len,
            anagrams_only,
        }
    }

    /// Multiset of the available letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    /// Scanned length of the available-letters text
    #[inline]
    #[must_use]
    pub const fn effective_len(&self) -> usize {
        self.effective_len
    }

    #[inline]
    #[must_use]
    pub const fn anagrams_only(&self) -> bool {
        self.anagrams_only
    }

    /// Length pre-filter: non-empty and no longer than the letters text
    #[inline]
    #[must_use]
    pub const fn fits_length(&self, word_len: usize) -> bool {
        word_len > 0 && word_len <= self.effective_len
    }

    /// Run the letter-by-letter match for `word`
    #[must_use]
    pub fn accepts(&self, word: impl AsRef<[u8]>) -> bool {
        matches(&self.letters, word, self.anagrams_only)
    }
}

/// Decide whether `word` can be spelled from `available`
///
/// Non-letters in `word` are skipped. A letter is rejected when `available`
/// has none of it at all, or when the word asks for it more times than
/// `available` holds. With `anagrams_only` the word's letters must also equal
/// `available` exactly.
///
/// An empty word is accepted vacuously (in anagram mode only against an empty
/// multiset).
#[must_use]
pub fn matches(available: &LetterMultiset, word: impl AsRef<[u8]>, anagrams_only: bool) -> bool {
    let mut tally = LetterMultiset::EMPTY;

    for index in word.as_ref().iter().copied().filter_map(letter_index) {
        let supply = available.count_at(index);
        if supply == 0 {
            return false;
        }
        if tally.increment(index) > supply {
            return false;
        }
    }

    !anagrams_only || equal(available, &tally)
}
