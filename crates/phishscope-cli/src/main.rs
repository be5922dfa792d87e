mod display;
mod report;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use phishscope_client::{Backend, HttpBackend, ScanOutcome, scan};
use phishscope_core::{Verdict, brand_from_url, is_file_target, normalize_url};

#[derive(Parser)]
#[command(
    name = "phishscope",
    version,
    about = "Phishing and brand-impersonation analysis"
)]
struct Cli {
    /// Analysis backend base URL.
    #[arg(
        long,
        global = true,
        env = "PHISHSCOPE_BACKEND_URL",
        default_value = "http://localhost:5000"
    )]
    backend_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, global = true, env = "PHISHSCOPE_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Emit a machine-readable JSON report instead of cards.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full analysis: classification, similarity, combined verdict.
    Analyze {
        /// URL to analyze (scheme optional, defaults to https).
        url: String,
    },
    /// Run the brand-similarity comparison only.
    Similarity {
        /// URL, or a local screenshot path / file:// target to upload.
        target: String,
    },
    /// Probe the analysis backend's health endpoint.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("phishscope v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let backend =
        HttpBackend::with_timeout(cli.backend_url, Duration::from_secs(cli.timeout_secs))
            .context("building backend client")?;

    match cli.command {
        Command::Analyze { url } => run_analyze(&backend, &url, cli.json).await,
        Command::Similarity { target } => run_similarity(&backend, &target, cli.json).await,
        Command::Health => run_health(&backend, cli.json).await,
    }
}

async fn run_analyze(backend: &HttpBackend, url: &str, json: bool) -> anyhow::Result<()> {
    let url = normalize_url(url);
    let outcome = scan(backend, &url).await;

    if let (Err(classify_err), Err(similarity_err)) =
        (&outcome.classification, &outcome.similarity)
    {
        anyhow::bail!(
            "both analysis legs failed: classification: {classify_err}; similarity: {similarity_err}"
        );
    }

    // A verdict needs the classification leg; a failed similarity leg
    // merely drops its term.
    let verdict = outcome
        .classification
        .as_ref()
        .ok()
        .map(|analysis| Verdict::from_results(analysis, outcome.similarity.as_ref().ok()));

    if json {
        report::print_json(&url, &outcome, verdict.as_ref())?;
        return Ok(());
    }

    render_cards(&url, &outcome, verdict.as_ref());
    Ok(())
}

fn render_cards(url: &str, outcome: &ScanOutcome, verdict: Option<&Verdict>) {
    display::print_scan_header(url, brand_from_url(url).as_deref());

    match &outcome.classification {
        Ok(analysis) => display::print_analysis_card(analysis),
        Err(err) => display::print_leg_error("Phishing Detection", err),
    }
    match &outcome.similarity {
        Ok(similarity) => display::print_similarity_card(similarity),
        Err(err) => display::print_leg_error("Website Similarity", err),
    }
    if let Some(verdict) = verdict {
        display::print_verdict_card(verdict);
    }
}

async fn run_similarity(backend: &HttpBackend, target: &str, json: bool) -> anyhow::Result<()> {
    let result = if is_file_target(target) {
        let path = target.strip_prefix("file://").unwrap_or(target);
        backend.similarity_upload(Path::new(path)).await
    } else {
        backend.compare_similarity(&normalize_url(target)).await
    }
    .context("similarity comparison failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::print_similarity_card(&result);
    }
    Ok(())
}

async fn run_health(backend: &HttpBackend, json: bool) -> anyhow::Result<()> {
    let health = backend.health().await.context("backend health probe failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        display::print_health_card(&health);
    }
    Ok(())
}
