//! Display functions for command results

use super::formatters::{format_duration, spaced_letters, words_label};
use crate::commands::{FindReport, ScrambleResult};
use colored::Colorize;

/// Print the matches of a find run to stdout, summary to stderr
///
/// With `count_only` only the match count is printed.
pub fn print_find_report(report: &FindReport, count_only: bool) {
    if count_only {
        println!("{}", report.result.count);
        return;
    }

    print!("{}", report.result.render(&report.separator));

    let mode = if report.anagrams_only {
        "anagrams of"
    } else {
        "words from"
    };
    let count = report.result.count;

    eprintln!("{}", "─".repeat(60).cyan());
    eprintln!(
        "{} {} {} {}",
        count.to_string().bright_yellow().bold(),
        words_label(count),
        mode,
        spaced_letters(&report.letters).bright_white().bold()
    );
    eprintln!(
        "{}",
        format!(
            "{} candidates scanned in {}",
            report.scanned,
            format_duration(report.duration)
        )
        .bright_black()
    );
}

/// Print a scrambled set of letters
pub fn print_scramble_result(result: &ScrambleResult) {
    println!("{}", result.scrambled.to_uppercase().bright_green().bold());
}
