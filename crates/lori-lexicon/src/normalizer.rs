//! Text normalization for lexicon matching.
//!
//! - Lowercase conversion
//! - Punctuation and symbol removal
//! - Turkish character folding (ı→i, ğ→g, ü→u, ş→s, ö→o, ç→c)
//! - Whitespace normalization

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is neither a word character nor whitespace
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();

    /// Multiple whitespace pattern
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Turkish letters folded to their ASCII base after lowercasing
const TURKISH_FOLDS: [(char, char); 6] = [
    ('ı', 'i'),
    ('ğ', 'g'),
    ('ü', 'u'),
    ('ş', 's'),
    ('ö', 'o'),
    ('ç', 'c'),
];

/// Combining dot left behind when 'İ' is lowercased to "i̇"
const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Normalize text for pattern matching
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");

    let folded: String = stripped
        .chars()
        .filter(|&c| c != COMBINING_DOT_ABOVE)
        .map(fold_char)
        .collect();

    MULTI_SPACE.replace_all(folded.trim(), " ").into_owned()
}

fn fold_char(c: char) -> char {
    TURKISH_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}
