//! Letter scrambling command
//!
//! Shuffles a set of letters, e.g. to set up a word puzzle.

use crate::core::LetterMultiset;
use crate::error::FinderError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Result of scrambling a set of letters
pub struct ScrambleResult {
    pub letters: String,
    pub scrambled: String,
}

/// Shuffle the letters of `letters`
///
/// Non-letters are dropped and case is folded to lowercase. The same seed
/// always gives the same shuffle.
///
/// # Errors
///
/// Returns `FinderError::EmptyLetters` if `letters` contains no ASCII letter.
pub fn scramble(letters: &str, seed: Option<u64>) -> Result<ScrambleResult, FinderError> {
    let mut bytes: Vec<u8> = letters
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    if bytes.is_empty() {
        return Err(FinderError::EmptyLetters);
    }

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    bytes.shuffle(&mut rng);

    let scrambled: String = bytes.into_iter().map(char::from).collect();
    debug_assert_eq!(
        LetterMultiset::from_text(&scrambled),
        LetterMultiset::from_text(letters)
    );

    Ok(ScrambleResult {
        letters: letters.to_string(),
        scrambled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scramble_keeps_letters() {
        let result = scramble("Listen!", None).unwrap();
        assert_eq!(result.letters, "Listen!");
        assert_eq!(result.scrambled.len(), 6);
        assert_eq!(
            LetterMultiset::from_text(&result.scrambled),
            LetterMultiset::from_text("listen")
        );
        assert!(result.scrambled.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn scramble_seeded_is_deterministic() {
        let a = scramble("abcdefghij", Some(7)).unwrap();
        let b = scramble("abcdefghij", Some(7)).unwrap();
        assert_eq!(a.scrambled, b.scrambled);
    }

    #[test]
    fn scramble_empty_is_error() {
        assert!(matches!(scramble("", None), Err(FinderError::EmptyLetters)));
        assert!(matches!(scramble("123 ?", Some(1)), Err(FinderError::EmptyLetters)));
    }

    #[test]
    fn scramble_single_letter() {
        let result = scramble("Q", Some(3)).unwrap();
        assert_eq!(result.scrambled, "q");
    }
}
