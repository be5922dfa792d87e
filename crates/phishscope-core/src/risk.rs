//! LLM risk levels and their legitimacy proxies.

use std::fmt;

/// Categorical risk label from the LLM analysis stage.
///
/// The label arrives as free text from a language model, so the set is
/// open: anything unrecognized becomes [`RiskLevel::Unknown`] and maps to
/// a neutral legitimacy proxy instead of failing the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Suspicious,
    Phishing,
    Unknown,
}

impl RiskLevel {
    /// Parse an optional wire label. Case-insensitive, whitespace-tolerant.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("safe") => Self::Safe,
            Some("suspicious") => Self::Suspicious,
            Some("phishing") => Self::Phishing,
            _ => Self::Unknown,
        }
    }

    /// Fixed pseudo-probability that a page at this risk level is legitimate.
    pub fn legitimacy(self) -> f64 {
        match self {
            Self::Safe => 0.8,
            Self::Suspicious => 0.5,
            Self::Phishing => 0.1,
            Self::Unknown => 0.5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suspicious => "suspicious",
            Self::Phishing => "phishing",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!(RiskLevel::from_label(Some("safe")), RiskLevel::Safe);
        assert_eq!(
            RiskLevel::from_label(Some("suspicious")),
            RiskLevel::Suspicious
        );
        assert_eq!(RiskLevel::from_label(Some("phishing")), RiskLevel::Phishing);
    }

    #[test]
    fn parsing_is_case_and_whitespace_tolerant() {
        assert_eq!(RiskLevel::from_label(Some("  Safe ")), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_label(Some("PHISHING")), RiskLevel::Phishing);
    }

    #[test]
    fn unrecognized_labels_fall_back_to_unknown() {
        assert_eq!(RiskLevel::from_label(Some("dangerous")), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_label(Some("")), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_label(None), RiskLevel::Unknown);
    }

    #[test]
    fn legitimacy_lookup() {
        assert_eq!(RiskLevel::Safe.legitimacy(), 0.8);
        assert_eq!(RiskLevel::Suspicious.legitimacy(), 0.5);
        assert_eq!(RiskLevel::Phishing.legitimacy(), 0.1);
        // Neutral default: an unknown label must not bias the verdict.
        assert_eq!(RiskLevel::Unknown.legitimacy(), 0.5);
    }

    #[test]
    fn display_matches_wire_labels() {
        assert_eq!(RiskLevel::Suspicious.to_string(), "suspicious");
        assert_eq!(RiskLevel::Unknown.to_string(), "unknown");
    }
}
