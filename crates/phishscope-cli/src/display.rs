//! Card-style terminal rendering for analysis results.
//!
//! Renders each backend response as a vertical card with aligned
//! key/value rows, skipping fields the backend omitted and truncating
//! long bullet lists.

use phishscope_client::ClientError;
use phishscope_core::{
    AnalysisResult, HealthReport, SimilarityDetails, SimilarityResult, Verdict,
};

const MAX_LIST_ITEMS: usize = 10;

// ── Scan header ──

pub fn print_scan_header(url: &str, brand_guess: Option<&str>) {
    println!("=== Scan: {url} ===");
    if let Some(brand) = brand_guess {
        println!("  {:<26} {}", "brand guess", brand);
    }
    println!();
}

// ── Phishing Detection ──

/// Print the ML + LLM classification as a vertical card.
pub fn print_analysis_card(result: &AnalysisResult) {
    println!("=== Phishing Detection ===");
    if let Some(url) = &result.url {
        println!("  {:<26} {}", "url", url);
    }
    if let Some(prediction) = &result.ml_prediction {
        println!("  {:<26} {}", "ml prediction", prediction);
    }
    if let Some(confidence) = result.ml_confidence {
        println!("  {:<26} {}", "ml confidence", format_percent(confidence));
    }
    if let Some(prediction) = &result.llm_prediction {
        println!("  {:<26} {}", "llm prediction", prediction);
    }
    if let Some(risk) = &result.llm_risk_level {
        println!("  {:<26} {}", "llm risk level", risk);
    }
    if let Some(verdict) = &result.final_verdict {
        println!("  {:<26} {}", "backend verdict", verdict);
    }
    print_bullets("ml explanations", &result.ml_explanations);
    print_bullets("llm reasons", &result.llm_reasons);
    print_bullets("evidence snippets", &result.evidence_snippets);
    println!();
}

// ── Website Similarity ──

/// Print the brand-similarity comparison, or the backend's explanation
/// when no score was produced.
pub fn print_similarity_card(result: &SimilarityResult) {
    println!("=== Website Similarity ===");
    if let Some(brand) = &result.brand {
        println!("  {:<26} {}", "brand", brand);
    }
    match result.score {
        Some(score) => println!("  {:<26} {}", "overall score", format_percent(score)),
        None => println!("  {:<26} unavailable", "overall score"),
    }
    match &result.details {
        Some(SimilarityDetails::Channels(channels)) => {
            let weights = result.weights;
            print_channel("image", channels.image, weights.map(|w| w[0]));
            print_channel("color", channels.color, weights.map(|w| w[1]));
            print_channel("text", channels.text, weights.map(|w| w[2]));
        }
        Some(SimilarityDetails::Unavailable { message }) => {
            println!("  {:<26} {}", "note", message);
        }
        None => {}
    }
    println!();
}

fn print_channel(name: &str, raw: f64, weight: Option<f64>) {
    match weight {
        Some(w) => println!("  {:<26} {} × {:.2}", name, format_percent(raw), w),
        None => println!("  {:<26} {}", name, format_percent(raw)),
    }
}

// ── Final Verdict ──

/// Print the combined verdict with its contribution breakdown.
pub fn print_verdict_card(verdict: &Verdict) {
    println!("=== Final Verdict ===");
    println!(
        "  {:<26} {}",
        "combined score",
        format_percent(verdict.final_score)
    );
    println!("  {:<26} {}", "verdict", verdict.label);
    println!("  {:<26} 50%", "threshold");
    println!("  contributions:");
    for contribution in &verdict.breakdown {
        println!(
            "    {:<24} {} × {:.1}%",
            contribution.factor.as_str(),
            format_percent(contribution.raw),
            contribution.weight * 100.0
        );
    }
    println!();
}

// ── Errors & health ──

/// Print a failed leg as its own card so the other leg still renders.
pub fn print_leg_error(header: &str, err: &ClientError) {
    println!("=== {header} ===");
    println!("  {:<26} {}", "error", err);
    println!();
}

pub fn print_health_card(health: &HealthReport) {
    println!("=== Backend Health ===");
    println!("  {:<26} {}", "status", health.status);
    if !health.imports.is_empty() {
        println!("  {:<26} {}", "imports", health.imports);
    }
    if !health.loader.is_empty() {
        println!("  {:<26} {}", "loader", health.loader);
    }
    println!();
}

// ── Helpers ──

fn print_bullets(header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {} ({}):", header, items.len());
    for item in items.iter().take(MAX_LIST_ITEMS) {
        println!("    • {item}");
    }
    if items.len() > MAX_LIST_ITEMS {
        println!("    ... and {} more", items.len() - MAX_LIST_ITEMS);
    }
}

/// Format a [0,1] score as a percentage. Clamped for display only; the
/// combiner itself never clamps.
fn format_percent(score: f64) -> String {
    format!("{:.1}%", score.clamp(0.0, 1.0) * 100.0)
}
