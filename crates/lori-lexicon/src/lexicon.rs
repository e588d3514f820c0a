//! Lexicon loading and representation.
//!
//! Supports the lexicon YAML format with:
//! - A negative label returned when nothing matches
//! - Weighted labels, each with case-insensitive regex patterns
//! - Patterns written against normalized text (see [`crate::normalizer`])

use serde::Deserialize;
use std::path::Path;

use crate::LexiconError;

/// Top-level lexicon file structure
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconFile {
    pub version: String,
    pub negative_label: String,
    #[serde(default = "default_baseline_confidence")]
    pub baseline_confidence: f64,
    pub labels: Vec<LabelSpec>,
}

fn default_baseline_confidence() -> f64 {
    0.9
}

/// One label and the patterns that vote for it
#[derive(Debug, Clone, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub patterns: Vec<String>,
}

fn default_weight() -> f64 {
    1.0
}

/// Compiled lexicon ready for matching
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    pub version: String,
    pub negative_label: String,
    pub baseline_confidence: f64,
    /// Labels in file order
    pub labels: Vec<CompiledLabel>,
}

#[derive(Debug, Clone)]
pub struct CompiledLabel {
    pub name: String,
    pub weight: f64,
    pub patterns: Vec<regex::Regex>,
}

impl CompiledLabel {
    /// Number of patterns matching the normalized text
    pub fn hits(&self, normalized: &str) -> usize {
        self.patterns.iter().filter(|p| p.is_match(normalized)).count()
    }
}

impl CompiledLexicon {
    /// Load and compile a lexicon from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Compile a lexicon from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_yaml::from_str(yaml)?;

        if file.labels.is_empty() {
            return Err(LexiconError::Empty);
        }
        if !(0.0..=1.0).contains(&file.baseline_confidence) {
            return Err(LexiconError::Invalid(format!(
                "baseline_confidence must be within 0..=1, got {}",
                file.baseline_confidence
            )));
        }

        let mut labels = Vec::with_capacity(file.labels.len());
        for spec in file.labels {
            if spec.name == file.negative_label {
                return Err(LexiconError::Invalid(format!(
                    "label '{}' is also the negative label",
                    spec.name
                )));
            }
            if labels.iter().any(|l: &CompiledLabel| l.name == spec.name) {
                return Err(LexiconError::Invalid(format!("duplicate label '{}'", spec.name)));
            }
            if !spec.weight.is_finite() || spec.weight <= 0.0 {
                return Err(LexiconError::Invalid(format!(
                    "label '{}' needs a positive weight, got {}",
                    spec.name, spec.weight
                )));
            }

            let patterns = spec
                .patterns
                .iter()
                .map(|p| compile_pattern(&spec.name, p))
                .collect::<Result<Vec<_>, _>>()?;

            labels.push(CompiledLabel {
                name: spec.name,
                weight: spec.weight,
                patterns,
            });
        }

        Ok(CompiledLexicon {
            version: file.version,
            negative_label: file.negative_label,
            baseline_confidence: file.baseline_confidence,
            labels,
        })
    }
}

fn compile_pattern(label: &str, pattern: &str) -> Result<regex::Regex, LexiconError> {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| LexiconError::Pattern {
            label: label.to_string(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}
