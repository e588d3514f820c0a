//! Data Model: ClassificationResult, TextMetrics, AnalysisDetails, AnalysisReport
use serde::{Deserialize, Serialize};

/// Raw verdict produced by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Predicted label (ex: "hate", "violence", "safe")
    pub label: String,
    /// Confidence of the predicted label, always within 0.0..=1.0
    pub confidence: f64,
}

impl ClassificationResult {
    /// Build a result, clamping the confidence into `0.0..=1.0`.
    ///
    /// NaN becomes `0.0` so downstream scoring never sees a non-finite value.
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence: clamp_confidence(confidence),
        }
    }

    /// True when the label equals the configured positive label.
    pub fn is_positive(&self, positive_label: &str) -> bool {
        self.label == positive_label
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

/// Surface statistics of the analyzed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Mean token length in chars, rounded to 2 decimals
    pub average_word_length: f64,
    /// Occurrences of `. , ! ? ; :`
    pub punctuation_count: usize,
    /// Uppercase chars over total chars, rounded to 2 decimals
    pub capitalization_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub emoji_count: usize,
    /// Length in Unicode scalar values, not bytes
    pub text_length: usize,
    /// Every subcategory tag of the predicted category
    pub category_details: Vec<String>,
    /// 0-100
    pub severity_score: u32,
    /// Taxonomy tags found verbatim in the lower-cased text
    pub found_words: Vec<String>,
    pub metrics: TextMetrics,
}

/// Full verdict returned for one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub is_hate_speech: bool,
    pub confidence: f64,
    pub category: String,
    pub details: AnalysisDetails,
}
