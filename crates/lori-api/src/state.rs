//! Shared application state
use std::sync::Arc;

use anyhow::Context;
use lori_analysis::Analyzer;
use lori_core::Classifier;
use lori_lexicon::LexiconClassifier;

use crate::config::ApiConfig;
use crate::metrics::ApiMetrics;

/// Owned by the router; cloning only bumps reference counts
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub analyzer: Arc<Analyzer>,
    pub metrics: Arc<ApiMetrics>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, analyzer: Analyzer) -> anyhow::Result<Self> {
        let labels = classifier.labels();
        if !labels.iter().any(|l| l == analyzer.positive_label()) {
            tracing::warn!(
                positive_label = analyzer.positive_label(),
                classifier = classifier.id(),
                ?labels,
                "positive label is never emitted by the classifier"
            );
        }

        Ok(Self {
            classifier,
            analyzer: Arc::new(analyzer),
            metrics: Arc::new(ApiMetrics::new().context("failed to register metrics")?),
        })
    }

    /// Load the configured lexicon, or the builtin one
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let classifier = match &config.lexicon_path {
            Some(path) => LexiconClassifier::load(path)
                .with_context(|| format!("failed to load lexicon {}", path.display()))?,
            None => LexiconClassifier::builtin().context("builtin lexicon is invalid")?,
        };

        Self::new(Arc::new(classifier), Analyzer::new(config.positive_label.clone()))
    }
}
