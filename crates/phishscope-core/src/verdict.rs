//! Combined verdict over the ML, LLM, and similarity sub-scores.
//!
//! Weighted convex combination with fixed base weights. When the
//! similarity leg produced no score its weight drops out and the two
//! remaining weights renormalize, so the effective weights always sum
//! to exactly 1.

use serde::Serialize;

use crate::analysis::{AnalysisResult, SimilarityResult};
use crate::risk::RiskLevel;

/// Base weight of the ML confidence score.
pub const ML_WEIGHT: f64 = 0.5;
/// Base weight of the LLM legitimacy proxy.
pub const LLM_WEIGHT: f64 = 0.3;
/// Base weight of the brand-similarity score, when one is present.
pub const SIMILARITY_WEIGHT: f64 = 0.2;
/// Scores at or above this threshold are labelled legitimate.
pub const LEGITIMATE_THRESHOLD: f64 = 0.5;

/// A factor contributing to the combined verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Ml,
    Llm,
    Similarity,
}

impl Factor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ml => "ml",
            Self::Llm => "llm",
            Self::Similarity => "similarity",
        }
    }
}

/// One factor's raw sub-score and effective (renormalized) weight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contribution {
    pub factor: Factor,
    pub raw: f64,
    pub weight: f64,
}

/// Binary verdict label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictLabel {
    Legitimate,
    Phishing,
}

impl VerdictLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legitimate => "Legitimate",
            Self::Phishing => "Phishing",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined legitimacy verdict with its per-factor breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// Weighted legitimacy estimate in [0,1] for in-range inputs.
    pub final_score: f64,
    pub label: VerdictLabel,
    /// Contributions in display order: ml, llm, then similarity if present.
    pub breakdown: Vec<Contribution>,
}

impl Verdict {
    /// Combine a classification and an optional similarity result.
    ///
    /// Similarity contributes only when the backend produced an overall
    /// score; a result whose score is null drops the term.
    pub fn from_results(
        analysis: &AnalysisResult,
        similarity: Option<&SimilarityResult>,
    ) -> Self {
        combine_verdict(
            analysis.ml_confidence,
            analysis.llm_risk_level.as_deref(),
            similarity.and_then(|s| s.score),
        )
    }
}

/// Deterministically combine the sub-scores into one legitimacy verdict.
///
/// An absent ML confidence counts as 0, an unrecognized risk label maps
/// to a neutral 0.5, and an absent similarity score drops that term.
/// Inputs are not range-checked; out-of-range values pass through.
pub fn combine_verdict(
    ml_confidence: Option<f64>,
    llm_risk_level: Option<&str>,
    similarity_score: Option<f64>,
) -> Verdict {
    let ml = ml_confidence.unwrap_or(0.0);
    let llm = RiskLevel::from_label(llm_risk_level).legitimacy();

    let weight_sum = ML_WEIGHT
        + LLM_WEIGHT
        + if similarity_score.is_some() {
            SIMILARITY_WEIGHT
        } else {
            0.0
        };

    let mut breakdown = vec![
        Contribution {
            factor: Factor::Ml,
            raw: ml,
            weight: ML_WEIGHT / weight_sum,
        },
        Contribution {
            factor: Factor::Llm,
            raw: llm,
            weight: LLM_WEIGHT / weight_sum,
        },
    ];
    if let Some(sim) = similarity_score {
        breakdown.push(Contribution {
            factor: Factor::Similarity,
            raw: sim,
            weight: SIMILARITY_WEIGHT / weight_sum,
        });
    }

    let final_score: f64 = breakdown.iter().map(|c| c.raw * c.weight).sum();
    let label = if final_score >= LEGITIMATE_THRESHOLD {
        VerdictLabel::Legitimate
    } else {
        VerdictLabel::Phishing
    };

    Verdict {
        final_score,
        label,
        breakdown,
    }
}
