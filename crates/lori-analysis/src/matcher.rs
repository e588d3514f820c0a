//! Sensitive word matching.
//!
//! Scans the lower-cased text for every taxonomy tag as a plain substring.
//! There is no word-boundary check: `insult` matches inside `insultive`.

use crate::taxonomy::CategoryTaxonomy;

/// Tags of the standard taxonomy found in `text`.
pub fn find_sensitive_words(text: &str) -> Vec<String> {
    find_sensitive_words_in(text, CategoryTaxonomy::standard())
}

/// Tags of `taxonomy` found in `text`, in taxonomy order.
///
/// A tag defined under two categories is reported once per category.
pub fn find_sensitive_words_in(text: &str, taxonomy: &CategoryTaxonomy) -> Vec<String> {
    let lowered = text.to_lowercase();

    taxonomy
        .iter()
        .flat_map(|(_, tags)| tags.iter())
        .filter(|tag| lowered.contains(**tag))
        .map(|tag| tag.to_string())
        .collect()
}
