//! Lori Analysis: post-classification enrichment
//!
//! Takes a label + confidence from a classifier and produces the category
//! details, sensitive words, severity score and text metrics of an
//! [`AnalysisReport`](lori_core::AnalysisReport).
//!
//! # Architecture
//!
//! ```text
//! text ──► Classifier ──► (label, confidence)
//!   │                            │
//!   ├─► emoji::count_emoji       ├─► taxonomy::subcategories_for
//!   ├─► metrics::compute_metrics │          │
//!   └─► matcher::find_sensitive_words       └─► severity::score
//!                    │                              │
//!                    └────────► Analyzer ◄──────────┘
//!                                  │
//!                            AnalysisReport
//! ```
//!
//! Everything here is pure: no I/O, no locking, linear in the text length.
//!
//! # Example
//!
//! ```
//! use lori_analysis::Analyzer;
//! use lori_core::ClassificationResult;
//!
//! let analyzer = Analyzer::default();
//! let verdict = ClassificationResult::new("violence", 0.92);
//! let report = analyzer.analyze("I will beat you up!", &verdict);
//!
//! assert_eq!(report.details.category_details.len(), 9);
//! assert_eq!(report.details.severity_score, 100);
//! assert!(!report.is_hate_speech);
//! ```

pub mod analyzer;
pub mod emoji;
pub mod matcher;
pub mod metrics;
pub mod severity;
pub mod taxonomy;

pub use analyzer::{analyze, Analyzer, DEFAULT_POSITIVE_LABEL};
pub use emoji::count_emoji;
pub use matcher::{find_sensitive_words, find_sensitive_words_in};
pub use metrics::compute_metrics;
pub use severity::{score, score_for_breadth, SeverityLevel};
pub use taxonomy::{subcategories_for, CategoryTaxonomy};
