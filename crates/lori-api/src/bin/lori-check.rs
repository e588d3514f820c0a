//! `lori-check`: analyze texts from the command line or an interactive prompt.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lori_analysis::{Analyzer, SeverityLevel, DEFAULT_POSITIVE_LABEL};
use lori_core::{AnalysisReport, Classifier};
use lori_lexicon::LexiconClassifier;

/// Analyze texts for hate speech.
///
/// Without TEXT arguments, reads one text per line from stdin; `q` quits.
#[derive(Parser, Debug)]
#[command(name = "lori-check", version, about, long_about = None)]
struct Cli {
    /// Texts to analyze
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Lexicon YAML to classify with (defaults to the builtin lexicon)
    #[arg(long, env = "LORI_LEXICON", value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Label that flags a text as hate speech
    #[arg(long, env = "LORI_POSITIVE_LABEL", default_value = DEFAULT_POSITIVE_LABEL)]
    positive_label: String,

    /// Print one summary line per text instead of JSON
    #[arg(long)]
    summary: bool,

    /// Print the classifier labels and exit
    #[arg(long)]
    labels: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let classifier = match &cli.lexicon {
        Some(path) => LexiconClassifier::load(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => LexiconClassifier::builtin().context("builtin lexicon is invalid")?,
    };

    if cli.labels {
        for label in classifier.labels() {
            println!("{}", label);
        }
        return Ok(());
    }

    let analyzer = Analyzer::new(cli.positive_label.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.texts.is_empty() {
        for text in &cli.texts {
            let report = analyzer.classify_and_analyze(text, &classifier)?;
            print_report(&mut out, text, &report, cli.summary)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    write!(out, "text (q to quit)> ")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.eq_ignore_ascii_case("q") {
            break;
        }
        if !text.is_empty() {
            let report = analyzer.classify_and_analyze(text, &classifier)?;
            print_report(&mut out, text, &report, cli.summary)?;
        }
        write!(out, "text (q to quit)> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_report(
    out: &mut impl Write,
    text: &str,
    report: &AnalysisReport,
    summary: bool,
) -> anyhow::Result<()> {
    if summary {
        writeln!(out, "{}", summary_line(text, report))?;
    } else {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    }
    Ok(())
}

fn summary_line(text: &str, report: &AnalysisReport) -> String {
    let verdict = if report.is_hate_speech { "HATE" } else { "ok" };
    let level = SeverityLevel::from_score(report.details.severity_score);
    let review = if level.requires_review() { " REVIEW" } else { "" };
    format!(
        "[{}{}] {} ({:.2}) severity={} ({}) found={:?} :: {}",
        verdict,
        review,
        report.category,
        report.confidence,
        report.details.severity_score,
        level,
        report.details.found_words,
        text
    )
}
