//! Wire types for the analysis backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Classification produced by the backend's `/predict` endpoint.
///
/// Every field is optional on the wire: the backend fills in what its ML
/// and LLM stages managed to produce and omits or nulls the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Echo of the submitted URL.
    pub url: Option<String>,
    /// The backend's own ensemble label, shown as-is.
    pub final_verdict: Option<String>,
    /// Probability in [0,1] that the page is legitimate.
    pub ml_confidence: Option<f64>,
    pub ml_prediction: Option<String>,
    pub ml_explanations: Vec<String>,
    pub llm_prediction: Option<String>,
    /// Open-set risk label from the LLM stage ("safe", "suspicious", ...).
    pub llm_risk_level: Option<String>,
    pub llm_reasons: Vec<String>,
    pub evidence_snippets: Vec<String>,
    /// Per-call failure the backend reports inside an HTTP 200 result.
    pub error: Option<String>,
}

/// Brand-similarity comparison produced by the backend's `/similarity`
/// and `/similarity-upload` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityResult {
    /// Matched reference brand, derived from the domain.
    pub brand: Option<String>,
    pub reference_image: Option<String>,
    pub user_screenshot: Option<String>,
    /// Overall resemblance in [0,1]; `None` when no comparison was possible.
    pub score: Option<f64>,
    pub details: Option<SimilarityDetails>,
    /// Backend channel weights (image, color, text).
    pub weights: Option<[f64; 3]>,
}

/// The `details` field carries either per-channel raw scores or a message
/// explaining why no score exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimilarityDetails {
    Channels(SimilarityChannels),
    Unavailable { message: String },
}

/// Raw per-channel similarity scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimilarityChannels {
    pub image: f64,
    pub color: f64,
    pub text: f64,
}

/// Payload of the backend's `/health` probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthReport {
    pub status: String,
    pub imports: String,
    pub loader: String,
}
