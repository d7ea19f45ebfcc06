//! Letter multiset over the 26-letter ASCII alphabet
//!
//! A `LetterMultiset` counts how many times each letter `a`-`z` occurs in a
//! piece of text. Case is folded and every non-letter byte is ignored.

use std::fmt;

/// Number of buckets in a multiset (`a` through `z`)
pub const ALPHABET_SIZE: usize = 26;

/// Map a byte to its alphabet position, folding case
///
/// Returns `None` for anything outside ASCII `A-Z`/`a-z`.
#[inline]
#[must_use]
pub const fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_alphabetic() {
        Some((byte.to_ascii_lowercase() - b'a') as usize)
    } else {
        None
    }
}

/// Per-letter frequency count of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMultiset {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterMultiset {
    /// The multiset with every bucket at zero
    pub const EMPTY: Self = Self {
        counts: [0; ALPHABET_SIZE],
    };

    /// Count the letters of `text`, also returning its scanned length
    ///
    /// The length is the total number of bytes scanned, letters or not. It is
    /// only meant as a cheap upper bound on how long a matching word can be.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterMultiset;
    ///
    /// let (letters, len) = LetterMultiset::build("It's");
    /// assert_eq!(len, 4);
    /// assert_eq!(letters.total(), 3);
    /// assert_eq!(letters.count(b'T'), 1);
    /// ```
    #[must_use]
    pub fn build(text: impl AsRef<[u8]>) -> (Self, usize) {
        let bytes = text.as_ref();
        let mut counts = [0; ALPHABET_SIZE];
        for index in bytes.iter().copied().filter_map(letter_index) {
            counts[index] += 1;
        }
        (Self { counts }, bytes.len())
    }

    /// Count the letters of `text`, discarding the scanned length
    #[must_use]
    pub fn from_text(text: impl AsRef<[u8]>) -> Self {
        Self::build(text).0
    }

    /// Count for a letter byte (either case); zero for non-letters
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u32 {
        match letter_index(letter) {
            Some(index) => self.counts[index],
            None => 0,
        }
    }

    #[inline]
    pub(crate) const fn count_at(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Bump one bucket and return its new count
    #[inline]
    pub(crate) const fn increment(&mut self, index: usize) -> u32 {
        self.counts[index] += 1;
        self.counts[index]
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// True when no letter was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Raw bucket counts, index 0 = `a`
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }
}

/// Check whether two multisets agree on every bucket
#[must_use]
pub fn equal(a: &LetterMultiset, b: &LetterMultiset) -> bool {
    a.counts.iter().zip(&b.counts).all(|(x, y)| x == y)
}

impl fmt::Display for LetterMultiset {
    /// Letters in alphabetical order, repeated by multiplicity
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &count) in self.counts.iter().enumerate() {
            let letter = char::from(b'a' + index as u8);
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_folds_case() {
        assert_eq!(letter_index(b'a'), Some(0));
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'z'), Some(25));
        assert_eq!(letter_index(b'Z'), Some(25));
    }

    #[test]
    fn letter_index_rejects_non_letters() {
        for byte in [b'0', b'\'', b'-', b' ', b'\n', b'@', b'[', 0xC3] {
            assert_eq!(letter_index(byte), None, "byte {byte:#x}");
        }
    }

    #[test]
    fn build_counts_letters() {
        let (letters, len) = LetterMultiset::build("listen");
        assert_eq!(len, 6);
        assert_eq!(letters.total(), 6);
        for letter in b"listen" {
            assert_eq!(letters.count(*letter), 1);
        }
        assert_eq!(letters.count(b'z'), 0);
    }

    #[test]
    fn build_counts_repeats_case_insensitively() {
        let letters = LetterMultiset::from_text("GooGle");
        assert_eq!(letters.count(b'g'), 2);
        assert_eq!(letters.count(b'o'), 2);
        assert_eq!(letters.count(b'L'), 1);
        assert_eq!(letters.count(b'e'), 1);
    }

    #[test]
    fn build_length_includes_non_letters() {
        let (letters, len) = LetterMultiset::build("a-b c!1");
        assert_eq!(len, 7);
        assert_eq!(letters.total(), 3);
    }

    #[test]
    fn build_empty_input() {
        let (letters, len) = LetterMultiset::build("");
        assert_eq!(len, 0);
        assert!(letters.is_empty());
        assert_eq!(letters, LetterMultiset::EMPTY);
    }

    #[test]
    fn build_no_letters() {
        let (letters, len) = LetterMultiset::build("123 ?!");
        assert_eq!(len, 6);
        assert!(letters.is_empty());
    }

    #[test]
    fn equal_for_anagrams() {
        let a = LetterMultiset::from_text("listen");
        let b = LetterMultiset::from_text("Silent");
        assert!(equal(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn not_equal_when_multiplicity_differs() {
        let a = LetterMultiset::from_text("lisen");
        let b = LetterMultiset::from_text("lissen");
        assert!(!equal(&a, &b));
    }

    #[test]
    fn increment_reports_new_count() {
        let mut letters = LetterMultiset::default();
        assert_eq!(letters.increment(3), 1);
        assert_eq!(letters.increment(3), 2);
        assert_eq!(letters.count_at(3), 2);
        assert_eq!(letters.count(b'd'), 2);
    }

    #[test]
    fn display_sorted_letters() {
        let letters = LetterMultiset::from_text("Banana!");
        assert_eq!(letters.to_string(), "aaabnn");
    }
}
