pub mod analysis;
pub mod risk;
pub mod site;
pub mod verdict;

pub use analysis::{
    AnalysisResult, HealthReport, SimilarityChannels, SimilarityDetails, SimilarityResult,
};
pub use risk::RiskLevel;
pub use site::{brand_from_url, is_file_target, normalize_url};
pub use verdict::{Contribution, Factor, Verdict, VerdictLabel, combine_verdict};
