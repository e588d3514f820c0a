//! Analysis composer: classifier verdict + text → AnalysisReport
use lori_core::{
    AnalysisDetails, AnalysisReport, ClassificationResult, Classifier, ClassifierError,
};

use crate::emoji::count_emoji;
use crate::matcher::find_sensitive_words_in;
use crate::metrics::compute_metrics;
use crate::severity::{self, SeverityLevel};
use crate::taxonomy::CategoryTaxonomy;

/// Label that marks a classification as hate speech unless configured otherwise
pub const DEFAULT_POSITIVE_LABEL: &str = "hate";

/// Builds analysis reports. Holds only immutable configuration, so one
/// instance can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    positive_label: String,
    taxonomy: &'static CategoryTaxonomy,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_LABEL)
    }
}

impl Analyzer {
    pub fn new(positive_label: impl Into<String>) -> Self {
        Self {
            positive_label: positive_label.into(),
            taxonomy: CategoryTaxonomy::standard(),
        }
    }

    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }

    pub fn taxonomy(&self) -> &'static CategoryTaxonomy {
        self.taxonomy
    }

    /// Enrich a classifier verdict for `text`. Total over every input.
    pub fn analyze(&self, text: &str, classification: &ClassificationResult) -> AnalysisReport {
        let details = self.details(text, &classification.label, classification.confidence);

        tracing::debug!(
            category = %classification.label,
            severity_score = details.severity_score,
            severity = %SeverityLevel::from_score(details.severity_score),
            found_words = details.found_words.len(),
            "analysis complete"
        );

        AnalysisReport {
            is_hate_speech: classification.is_positive(&self.positive_label),
            confidence: classification.confidence,
            category: classification.label.clone(),
            details,
        }
    }

    /// Run `classifier` on `text`, then [`Analyzer::analyze`] its verdict.
    ///
    /// Classifier failures are returned unchanged.
    pub fn classify_and_analyze(
        &self,
        text: &str,
        classifier: &dyn Classifier,
    ) -> Result<AnalysisReport, ClassifierError> {
        let classification = classifier.classify(text)?;
        Ok(self.analyze(text, &classification))
    }

    /// Rule-based details for a predicted `category` and `confidence`.
    pub fn details(&self, text: &str, category: &str, confidence: f64) -> AnalysisDetails {
        let tags = self.taxonomy.subcategories_for(category);

        AnalysisDetails {
            emoji_count: count_emoji(text),
            text_length: text.chars().count(),
            category_details: tags.iter().map(|t| t.to_string()).collect(),
            severity_score: severity::score(confidence, tags),
            found_words: find_sensitive_words_in(text, self.taxonomy),
            metrics: compute_metrics(text),
        }
    }
}

/// Analyze with the default positive label and the standard taxonomy
pub fn analyze(text: &str, classification: &ClassificationResult) -> AnalysisReport {
    Analyzer::default().analyze(text, classification)
}
