//! Formatting utilities for terminal output

use std::time::Duration;

/// Pluralize "word" for a count
#[must_use]
pub const fn words_label(count: usize) -> &'static str {
    if count == 1 { "word" } else { "words" }
}

/// Format an elapsed time compactly (µs, ms, or s)
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.1}ms", duration.as_secs_f64() * 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Space out letters for display, e.g. `listen` → `L I S T E N`
#[must_use]
pub fn spaced_letters(letters: &str) -> String {
    letters
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_label_plural() {
        assert_eq!(words_label(0), "words");
        assert_eq!(words_label(1), "word");
        assert_eq!(words_label(2), "words");
    }

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_micros(2_500)), "2.5ms");
        assert_eq!(format_duration(Duration::from_millis(1_500)), "1.50s");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("listen"), "L I S T E N");
        assert_eq!(spaced_letters("it's"), "I T S");
        assert_eq!(spaced_letters(""), "");
    }
}
