//! Lori Core: Data Model, Classifier contract and Response Envelope
//!
//! Shared types for the hate-speech analysis pipeline. The analysis engine
//! lives in `lori-analysis`; this crate only describes what flows through it.

pub mod classifier;
pub mod data_model;
pub mod envelope;
pub mod error;

pub use classifier::{Classifier, ClassifierMut, Serialized};
pub use data_model::{AnalysisDetails, AnalysisReport, ClassificationResult, TextMetrics};
pub use envelope::{Envelope, Status};
pub use error::{ClassifierError, LoriError};

/// Lori engine version
pub const LORI_VERSION: &str = env!("CARGO_PKG_VERSION");
