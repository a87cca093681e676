//! Formatting utilities for terminal output

use indicatif::{ProgressBar, ProgressStyle};

/// Letters of a word separated by spaces
#[must_use]
pub fn spaced(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Letter numbers to print under a `spaced` word
///
/// Numbers past 9 wrap to their last digit to keep the columns aligned.
#[must_use]
pub fn letter_ruler(len: usize) -> String {
    let digits: String = (1..=len)
        .filter_map(|n| char::from_digit(u32::try_from(n % 10).unwrap_or(0), 10))
        .collect();
    spaced(&digits)
}

/// Edit options as `letter→word` pairs
#[must_use]
pub fn format_options(options: &[(char, String)]) -> String {
    options
        .iter()
        .map(|(c, word)| format!("{c}→{word}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a bar string for `value` out of `max`
#[must_use]
pub fn ratio_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value as f64 / max as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for long graph walks, hidden when `visible` is false
#[must_use]
pub fn create_progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
