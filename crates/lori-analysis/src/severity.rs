//! Severity scoring
//!
//! Combines classifier confidence with the breadth of the predicted
//! category into a bounded 0-100 score.

use serde::{Deserialize, Serialize};

/// Upper bound of every severity score
pub const MAX_SCORE: u32 = 100;

/// Score boost contributed by each subcategory of the predicted category
pub const BREADTH_WEIGHT: f64 = 0.2;

/// Severity band derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// 0-30
    #[default]
    Low = 0,
    /// 31-60
    Medium = 1,
    /// 61-80
    High = 2,
    /// 81-100
    Critical = 3,
}

impl SeverityLevel {
    /// Get the severity level for a score (0-100)
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=30 => SeverityLevel::Low,
            31..=60 => SeverityLevel::Medium,
            61..=80 => SeverityLevel::High,
            _ => SeverityLevel::Critical,
        }
    }

    /// Whether content at this level should go to a human moderator
    pub fn requires_review(&self) -> bool {
        matches!(self, SeverityLevel::High | SeverityLevel::Critical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
            SeverityLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity for `confidence` given the full tag list of the predicted category.
///
/// `category_details` is the taxonomy entry of the predicted category, not
/// the words found in the text.
pub fn score<S: AsRef<str>>(confidence: f64, category_details: &[S]) -> u32 {
    score_for_breadth(confidence, category_details.len())
}

/// `min(100, floor(floor(confidence * 100) * (1 + breadth * 0.2)))`
///
/// Non-finite and negative confidences score as zero.
pub fn score_for_breadth(confidence: f64, breadth: usize) -> u32 {
    let confidence = if confidence.is_finite() {
        confidence.max(0.0)
    } else {
        0.0
    };

    let base = (confidence * 100.0).floor();
    let multiplier = breadth as f64 * BREADTH_WEIGHT;
    let raw = (base * (1.0 + multiplier)).floor();

    raw.min(MAX_SCORE as f64) as u32
}
