//! Text metrics
//!
//! Word count, average word length, punctuation count and capitalization
//! ratio. Every division is guarded so any input, including the empty
//! string, yields a valid [`TextMetrics`].

use lori_core::TextMetrics;

/// Characters counted as punctuation
pub const PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Decimal places kept for float metrics in the report
pub const METRIC_DECIMALS: u32 = 2;

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Compute the report metrics for `text`.
pub fn compute_metrics(text: &str) -> TextMetrics {
    let words: Vec<&str> = text
        .split(is_word_separator)
        .filter(|w| !w.is_empty())
        .collect();
    let word_count = words.len();

    let average_word_length = if words.is_empty() {
        0.0
    } else {
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        total_chars as f64 / word_count as f64
    };

    let mut total_chars = 0usize;
    let mut uppercase = 0usize;
    let mut punctuation_count = 0usize;
    for c in text.chars() {
        total_chars += 1;
        if c.is_uppercase() {
            uppercase += 1;
        }
        if PUNCTUATION.contains(&c) {
            punctuation_count += 1;
        }
    }

    let capitalization_ratio = if total_chars == 0 {
        0.0
    } else {
        uppercase as f64 / total_chars as f64
    };

    TextMetrics {
        word_count,
        average_word_length: round_f64(average_word_length, METRIC_DECIMALS),
        punctuation_count,
        capitalization_ratio: round_f64(capitalization_ratio, METRIC_DECIMALS),
    }
}

/// Round to `decimals` places, ties to even (`0.125` -> `0.12`).
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(compute_metrics(""), TextMetrics::default());
    }

    #[test]
    fn test_whitespace_only() {
        let metrics = compute_metrics(" \t\n  ");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.average_word_length, 0.0);
        assert_eq!(metrics.capitalization_ratio, 0.0);
    }

    #[test]
    fn test_shouting() {
        let metrics = compute_metrics("THANK YOU!!!");
        assert_eq!(metrics.word_count, 2);
        // "THANK" (5) and "YOU!!!" (6)
        assert_eq!(metrics.average_word_length, 5.5);
        assert_eq!(metrics.punctuation_count, 3);
        // 8 uppercase letters over 12 chars
        assert_eq!(metrics.capitalization_ratio, 0.67);
    }

    #[test]
    fn test_sentence() {
        let metrics = compute_metrics("I will beat you up!");
        assert_eq!(metrics.word_count, 5);
        assert_eq!(metrics.average_word_length, 3.0);
        assert_eq!(metrics.punctuation_count, 1);
        // 1 of 19 chars
        assert_eq!(metrics.capitalization_ratio, 0.05);
    }

    #[test]
    fn test_all_punctuation_kinds() {
        let metrics = compute_metrics(". , ! ? ; : - ' \"");
        assert_eq!(metrics.punctuation_count, 6);
        assert_eq!(metrics.word_count, 9);
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let metrics = compute_metrics("Çok güzel");
        assert_eq!(metrics.average_word_length, 4.0);
        assert_eq!(metrics.capitalization_ratio, 0.11);
    }

    #[test]
    fn test_round_f64() {
        assert_eq!(round_f64(0.666_666, 2), 0.67);
        assert_eq!(round_f64(3.0, 2), 3.0);
        assert_eq!(round_f64(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_f64_ties_to_even() {
        assert_eq!(round_f64(0.125, 2), 0.12);
        assert_eq!(round_f64(0.375, 2), 0.38);
        assert_eq!(round_f64(2.125, 2), 2.12);
        assert_eq!(round_f64(5.5, 0), 6.0);
        assert_eq!(round_f64(4.5, 0), 4.0);
    }

    #[test]
    fn test_ratio_on_exact_half() {
        // 1 uppercase of 8 chars = 0.125
        assert_eq!(compute_metrics("Hi there").capitalization_ratio, 0.12);
    }

    #[test]
    fn test_average_on_exact_half() {
        // 17 chars over 8 words = 2.125
        let metrics = compute_metrics("ab cd ef gh ij kl mn opq");
        assert_eq!(metrics.word_count, 8);
        assert_eq!(metrics.average_word_length, 2.12);
    }

    #[test]
    fn test_information_separators_split_words() {
        let metrics = compute_metrics("a\u{1c}b\u{1d}c\u{1e}d\u{1f}e");
        assert_eq!(metrics.word_count, 5);
        assert_eq!(metrics.average_word_length, 1.0);
        assert_eq!(compute_metrics("\u{1f}\u{1c}").word_count, 0);
    }
}
