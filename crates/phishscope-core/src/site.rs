//! URL normalization and brand extraction.

use std::path::Path;

use url::Url;

/// Ensure the input has a scheme, defaulting to `https://`.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.split_once("://") {
        Some((scheme, _))
            if !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            trimmed.to_string()
        }
        _ => format!("https://{trimmed}"),
    }
}

/// Extract the leading domain label as a brand guess.
///
/// `https://www.paypal.com/signin` → `paypal`. Returns `None` when the
/// input has no parseable host.
pub fn brand_from_url(input: &str) -> Option<String> {
    let url = Url::parse(&normalize_url(input)).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    host.split('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

/// True when the target is a local image rather than a URL to fetch.
pub fn is_file_target(target: &str) -> bool {
    target
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("file://"))
        || Path::new(target).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_https_scheme() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
    }

    #[test]
    fn normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("ftp://example.com"), "ftp://example.com");
    }

    #[test]
    fn normalize_rejects_malformed_scheme() {
        // "//" without an alphabetic scheme is not a scheme separator.
        assert_eq!(normalize_url("://example.com"), "https://://example.com");
    }

    #[test]
    fn brand_is_first_domain_label() {
        assert_eq!(
            brand_from_url("https://paypal.com/signin").as_deref(),
            Some("paypal")
        );
        assert_eq!(brand_from_url("example.co.uk").as_deref(), Some("example"));
    }

    #[test]
    fn brand_strips_www_prefix() {
        assert_eq!(
            brand_from_url("https://www.paypal.com").as_deref(),
            Some("paypal")
        );
    }

    #[test]
    fn brand_is_lowercased() {
        assert_eq!(
            brand_from_url("https://PayPal.COM").as_deref(),
            Some("paypal")
        );
    }

    #[test]
    fn brand_none_for_unparseable_input() {
        assert!(brand_from_url("https://").is_none());
        assert!(brand_from_url("").is_none());
    }

    #[test]
    fn file_targets_detected_by_prefix() {
        assert!(is_file_target("file:///tmp/shot.png"));
        assert!(is_file_target("FILE:///tmp/shot.png"));
        assert!(!is_file_target("https://example.com"));
        assert!(!is_file_target("/no/such/screenshot.png"));
    }
}
