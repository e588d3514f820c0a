//! Lori Lexicon: rule-based text classifier
//!
//! A [`Classifier`] backed by a YAML lexicon of weighted regex patterns. It
//! stands in for a statistical model: the analysis engine only sees the
//! `(label, confidence)` pair it returns.
//!
//! # Example
//!
//! ```
//! use lori_core::Classifier;
//! use lori_lexicon::LexiconClassifier;
//!
//! let classifier = LexiconClassifier::builtin().unwrap();
//! let verdict = classifier.classify("I will beat you up!").unwrap();
//! assert_eq!(verdict.label, "violence");
//!
//! let verdict = classifier.classify("The weather is nice today.").unwrap();
//! assert_eq!(verdict.label, "safe");
//! ```

pub mod lexicon;
pub mod normalizer;

use lori_core::{ClassificationResult, Classifier, ClassifierError};
use std::path::Path;
use thiserror::Error;

pub use lexicon::{CompiledLabel, CompiledLexicon, LabelSpec, LexiconFile};
pub use normalizer::normalize;

/// Lexicon shipped with the crate
pub const BUILTIN_LEXICON: &str = include_str!("../lexicons/default.yaml");

/// Errors that can occur while loading a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse lexicon YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid pattern for label '{label}' ({pattern}): {reason}")]
    Pattern {
        label: String,
        pattern: String,
        reason: String,
    },
    #[error("Invalid lexicon: {0}")]
    Invalid(String),
    #[error("Lexicon defines no labels")]
    Empty,
}

impl From<LexiconError> for ClassifierError {
    fn from(err: LexiconError) -> Self {
        ClassifierError::ModelLoad(err.to_string())
    }
}

/// Per-label score for one text
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub hits: usize,
    pub score: f64,
}

/// Classifier that votes labels by weighted pattern hits.
///
/// Immutable after construction, so it is safe to share across threads.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    lexicon: CompiledLexicon,
}

impl LexiconClassifier {
    pub fn new(lexicon: CompiledLexicon) -> Self {
        Self { lexicon }
    }

    /// Load a lexicon from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let lexicon = CompiledLexicon::load(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            version = %lexicon.version,
            labels = lexicon.labels.len(),
            "lexicon loaded"
        );
        Ok(Self::new(lexicon))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        CompiledLexicon::from_yaml(yaml).map(Self::new)
    }

    /// Classifier over [`BUILTIN_LEXICON`]
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_yaml(BUILTIN_LEXICON)
    }

    pub fn lexicon(&self) -> &CompiledLexicon {
        &self.lexicon
    }

    /// Scores of every label for `text`, in lexicon order
    pub fn scores(&self, text: &str) -> Vec<LabelScore> {
        let normalized = normalize(text);

        self.lexicon
            .labels
            .iter()
            .map(|label| {
                let hits = label.hits(&normalized);
                LabelScore {
                    label: label.name.clone(),
                    hits,
                    score: label.weight * hits as f64,
                }
            })
            .collect()
    }
}

impl Classifier for LexiconClassifier {
    fn id(&self) -> &str {
        "lexicon.v1"
    }

    fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError> {
        let scores = self.scores(text);
        let total: f64 = scores.iter().map(|s| s.score).sum();

        // First label wins ties
        let best = scores.iter().fold(None::<&LabelScore>, |best, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(s),
        });

        match best {
            Some(best) if best.score > 0.0 => {
                let confidence = (0.5 + 0.5 * best.score / total).min(1.0);
                Ok(ClassificationResult::new(best.label.clone(), confidence))
            }
            _ => Ok(ClassificationResult::new(
                self.lexicon.negative_label.clone(),
                self.lexicon.baseline_confidence,
            )),
        }
    }

    fn labels(&self) -> Vec<String> {
        std::iter::once(self.lexicon.negative_label.clone())
            .chain(self.lexicon.labels.iter().map(|l| l.name.clone()))
            .collect()
    }
}
