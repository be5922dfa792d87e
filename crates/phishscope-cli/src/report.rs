//! Machine-readable JSON report for a full scan.

use chrono::Utc;
use phishscope_client::ScanOutcome;
use phishscope_core::{AnalysisResult, SimilarityResult, Verdict};
use serde::Serialize;

/// One scan flattened into a single JSON document.
///
/// Failed legs serialize as their error strings, so the report always
/// records what happened to each leg.
#[derive(Serialize)]
pub struct Report<'a> {
    pub url: &'a str,
    /// RFC 3339 timestamp.
    pub analyzed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<&'a AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<&'a SimilarityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<&'a Verdict>,
}

impl<'a> Report<'a> {
    pub fn new(url: &'a str, outcome: &'a ScanOutcome, verdict: Option<&'a Verdict>) -> Self {
        Self {
            url,
            analyzed_at: Utc::now().to_rfc3339(),
            classification: outcome.classification.as_ref().ok(),
            classification_error: outcome
                .classification
                .as_ref()
                .err()
                .map(|e| e.to_string()),
            similarity: outcome.similarity.as_ref().ok(),
            similarity_error: outcome.similarity.as_ref().err().map(|e| e.to_string()),
            verdict,
        }
    }
}

pub fn print_json(
    url: &str,
    outcome: &ScanOutcome,
    verdict: Option<&Verdict>,
) -> anyhow::Result<()> {
    let report = Report::new(url, outcome, verdict);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
