//! Backend collaborator layer: the swappable analysis capability and the
//! two-request scan orchestration.

pub mod http;

pub use http::{ClientError, HttpBackend};

use async_trait::async_trait;
use phishscope_core::{AnalysisResult, SimilarityResult};

/// The remote analysis capability: two independently fallible operations.
///
/// [`HttpBackend`] is the production implementation; tests inject fakes
/// returning fixed results to drive the combiner without a network.
#[async_trait]
pub trait Backend {
    /// ML + LLM phishing classification of a URL.
    async fn classify(&self, url: &str) -> Result<AnalysisResult, ClientError>;

    /// Visual/textual brand-similarity comparison of a URL.
    async fn compare_similarity(&self, url: &str) -> Result<SimilarityResult, ClientError>;
}

/// Outcome of one scan: each leg keeps its own result.
#[derive(Debug)]
pub struct ScanOutcome {
    pub classification: Result<AnalysisResult, ClientError>,
    pub similarity: Result<SimilarityResult, ClientError>,
}

impl ScanOutcome {
    /// True when neither leg produced a result.
    pub fn is_total_failure(&self) -> bool {
        self.classification.is_err() && self.similarity.is_err()
    }
}

/// Run both analysis legs against the backend.
///
/// The legs are independent and fail in isolation: an error in one never
/// suppresses the other's result.
pub async fn scan<B: Backend + Sync>(backend: &B, url: &str) -> ScanOutcome {
    let (classification, similarity) =
        tokio::join!(backend.classify(url), backend.compare_similarity(url));
    ScanOutcome {
        classification,
        similarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishscope_core::Verdict;

    struct FakeBackend {
        classify_ok: bool,
        similarity_ok: bool,
    }

    #[async_trait]
    impl Backend for FakeBackend {
        async fn classify(&self, url: &str) -> Result<AnalysisResult, ClientError> {
            if self.classify_ok {
                Ok(AnalysisResult {
                    url: Some(url.to_string()),
                    ml_confidence: Some(0.9),
                    llm_risk_level: Some("safe".into()),
                    ..Default::default()
                })
            } else {
                Err(ClientError::Backend("model unavailable".into()))
            }
        }

        async fn compare_similarity(&self, _url: &str) -> Result<SimilarityResult, ClientError> {
            if self.similarity_ok {
                Ok(SimilarityResult {
                    brand: Some("paypal".into()),
                    score: Some(0.7),
                    ..Default::default()
                })
            } else {
                Err(ClientError::Backend("screenshot failed".into()))
            }
        }
    }

    #[tokio::test]
    async fn both_legs_succeed() {
        let backend = FakeBackend {
            classify_ok: true,
            similarity_ok: true,
        };
        let outcome = scan(&backend, "https://paypal.com").await;
        assert!(outcome.classification.is_ok());
        assert!(outcome.similarity.is_ok());
        assert!(!outcome.is_total_failure());
    }

    #[tokio::test]
    async fn similarity_failure_leaves_classification_intact() {
        let backend = FakeBackend {
            classify_ok: true,
            similarity_ok: false,
        };
        let outcome = scan(&backend, "https://paypal.com").await;

        let analysis = outcome.classification.as_ref().unwrap();
        assert_eq!(analysis.ml_confidence, Some(0.9));
        assert!(outcome.similarity.is_err());

        // The combiner still produces a verdict from the surviving leg.
        let verdict = Verdict::from_results(analysis, outcome.similarity.as_ref().ok());
        assert_eq!(verdict.breakdown.len(), 2);
    }

    #[tokio::test]
    async fn classification_failure_leaves_similarity_intact() {
        let backend = FakeBackend {
            classify_ok: false,
            similarity_ok: true,
        };
        let outcome = scan(&backend, "https://paypal.com").await;
        assert!(outcome.classification.is_err());
        assert_eq!(outcome.similarity.as_ref().unwrap().score, Some(0.7));
        assert!(!outcome.is_total_failure());
    }

    #[tokio::test]
    async fn total_failure_detected() {
        let backend = FakeBackend {
            classify_ok: false,
            similarity_ok: false,
        };
        let outcome = scan(&backend, "https://paypal.com").await;
        assert!(outcome.is_total_failure());
    }
}
