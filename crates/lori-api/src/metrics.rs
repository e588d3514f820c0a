//! Prometheus registry behind `/metrics`.
use prometheus::{
    linear_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

use lori_core::AnalysisReport;

pub struct ApiMetrics {
    registry: Registry,
    analyses: IntCounterVec,
    hate_speech: IntCounter,
    request_errors: IntCounterVec,
    severity: Histogram,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let analyses = IntCounterVec::new(
            Opts::new("lori_analyses_total", "Completed analyses by category"),
            &["category"],
        )?;
        let hate_speech = IntCounter::new(
            "lori_hate_speech_total",
            "Analyses flagged as hate speech",
        )?;
        let request_errors = IntCounterVec::new(
            Opts::new("lori_request_errors_total", "Failed requests by error kind"),
            &["kind"],
        )?;
        let severity = Histogram::with_opts(
            HistogramOpts::new("lori_severity_score", "Severity score of analyzed texts")
                .buckets(linear_buckets(10.0, 10.0, 10)?),
        )?;

        registry.register(Box::new(analyses.clone()))?;
        registry.register(Box::new(hate_speech.clone()))?;
        registry.register(Box::new(request_errors.clone()))?;
        registry.register(Box::new(severity.clone()))?;

        Ok(Self {
            registry,
            analyses,
            hate_speech,
            request_errors,
            severity,
        })
    }

    pub fn record_analysis(&self, report: &AnalysisReport) {
        self.analyses.with_label_values(&[report.category.as_str()]).inc();
        if report.is_hate_speech {
            self.hate_speech.inc();
        }
        self.severity.observe(f64::from(report.details.severity_score));
    }

    pub fn record_error(&self, kind: &str) {
        self.request_errors.with_label_values(&[kind]).inc();
    }

    /// Text exposition format
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
