//! # Docbrief CLI (`brief`)
//!
//! The `brief` binary summarizes documents and pasted text through a hosted
//! LLM endpoint. Summaries print on stdout; progress, statistics, and
//! warnings go to stderr so output stays pipeable.
//!
//! ## Usage
//!
//! ```bash
//! brief --config ./config/brief.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `brief summarize` | Summarize a document, pasted text, or stdin |
//! | `brief extract` | Print the text extracted from a document |
//! | `brief check` | Verify configuration and credentials |
//!
//! ## Examples
//!
//! ```bash
//! # Summarize a PDF
//! brief summarize --file report.pdf
//!
//! # Shorter summary of pasted text
//! brief summarize --text "..." --density concise
//!
//! # Pipe text in
//! cat notes.txt | brief summarize
//!
//! # Save the summary alongside printing it
//! brief summarize --file report.docx --output report-summary.txt
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use docbrief::config::{self, Config};
use docbrief::extract;
use docbrief::models::{Density, Document, MediaType, PromptVariant};
use docbrief::pipeline::{Disposition, SummaryPipeline};
use docbrief::progress::{PipelinePhase, ProgressMode};
use docbrief::session::{resolve_input, SessionState};
use docbrief::stats;
use docbrief::summarize::{HostedSummarizer, API_KEY_ENV};

/// Docbrief CLI — summarize documents and pasted text through a hosted
/// LLM endpoint.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/brief.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "brief",
    about = "Docbrief — summarize PDF, DOCX, and pasted text through a hosted LLM",
    version,
    long_about = "Docbrief extracts text from PDF and DOCX documents (or takes pasted text), \
    sends it to an OpenAI-compatible chat-completions endpoint with a fixed summarization \
    prompt, and caches results so repeated requests skip the service."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/brief.toml`. A missing file means built-in
    /// defaults; the API key always comes from the `OPENAI_API_KEY`
    /// environment variable, never from the file.
    #[arg(long, global = true, default_value = "./config/brief.toml")]
    config: PathBuf,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Summarize a document or pasted text.
    ///
    /// Input comes from `--file` (PDF or DOCX), `--text`, or stdin when
    /// neither is given. When a document upload succeeds, its extracted
    /// text is summarized even if `--text` is also present.
    Summarize {
        /// Document to summarize (.pdf or .docx).
        #[arg(long)]
        file: Option<PathBuf>,

        /// Text to summarize directly, skipping document extraction.
        #[arg(long)]
        text: Option<String>,

        /// Summary density: `concise`, `balanced`, or `detailed`.
        #[arg(long, default_value = "balanced")]
        density: String,

        /// Prompt variant: `sectioned` (fixed three-section layout) or
        /// `adaptive` (model picks the best format). Overrides the config.
        #[arg(long)]
        variant: Option<String>,

        /// Also write the summary to this file. A bare `--output` writes
        /// `summary.txt` in the current directory.
        #[arg(long, num_args = 0..=1, default_missing_value = "summary.txt")]
        output: Option<PathBuf>,

        /// Suppress progress and statistics on stderr.
        #[arg(long)]
        quiet: bool,
    },

    /// Print the text extracted from a document.
    ///
    /// Shows exactly what the summarizer would see, without calling the
    /// service. Useful for checking extraction quality.
    Extract {
        /// Document to extract (.pdf or .docx).
        #[arg(long)]
        file: PathBuf,
    },

    /// Verify configuration and credentials without calling the service.
    ///
    /// Prints the effective endpoint, model, and cache settings, then
    /// checks that `OPENAI_API_KEY` is set.
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _ = dotenv::dotenv();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Summarize {
            file,
            text,
            density,
            variant,
            output,
            quiet,
        } => run_summarize(&cfg, file, text, &density, variant.as_deref(), output, quiet).await,
        Commands::Extract { file } => run_extract(&cfg, &file),
        Commands::Check => run_check(&cfg),
    }
}

/// Run the summarize command end to end.
///
/// Extraction failures are warnings, not fatal: the command falls back to
/// pasted/stdin text, and a fully blank submission still produces the
/// advisory message on stdout with a zero exit code.
async fn run_summarize(
    cfg: &Config,
    file: Option<PathBuf>,
    text: Option<String>,
    density: &str,
    variant: Option<&str>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let density: Density = density.parse()?;
    let variant: PromptVariant = variant.unwrap_or(&cfg.prompt.variant).parse()?;

    // Missing credentials fail here, before any extraction work happens.
    let client = HostedSummarizer::new(&cfg.api)?;
    let mut pipeline = SummaryPipeline::new(Box::new(client), variant, cfg.cache.ttl_secs);

    let mode = if quiet {
        ProgressMode::Off
    } else {
        ProgressMode::default_for_tty()
    };
    let progress = mode.reporter();

    let mut session = SessionState::default();

    if let Some(path) = &file {
        match load_document(path, cfg.limits.max_upload_bytes) {
            Ok(document) => {
                progress.report(PipelinePhase::Extracting);
                match extract::extract(document) {
                    Ok(extracted) => {
                        tracing::debug!(
                            chars = extracted.as_str().chars().count(),
                            "extracted document text"
                        );
                        session.extracted = Some(extracted);
                    }
                    Err(e) => eprintln!("warning: failed to extract text: {}", e),
                }
            }
            Err(e) => eprintln!("warning: {}", e),
        }
    }

    let pasted = match text {
        Some(t) => t,
        // A file was given; don't also wait on stdin.
        None if file.is_some() => String::new(),
        // Interactive terminal with no input source: nothing to read.
        None if atty::is(atty::Stream::Stdin) => String::new(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    {
        let input = resolve_input(&pasted, session.extracted.as_ref());
        let has_input = !input.trim().is_empty();
        if has_input && !quiet {
            let metrics = stats::analyze(input);
            eprintln!(
                "characters: {}  words: {}  est. {} sec",
                stats::format_number(metrics.characters as u64),
                stats::format_number(metrics.words as u64),
                metrics.estimated_secs
            );
            if metrics.is_short() {
                eprintln!("note: longer texts generally produce better summaries");
            }
        }
        if has_input {
            progress.report(PipelinePhase::Summarizing);
        }
    }

    let report = pipeline.handle_submit(&mut session, &pasted, density).await;

    println!("{}", report.result);

    // The artifact is written for any displayed run, including failures;
    // only a rejected (blank) submission produces nothing.
    if report.disposition != Disposition::Rejected {
        if !quiet
            && matches!(
                report.disposition,
                Disposition::CacheHit | Disposition::Summarized
            )
        {
            eprintln!("summary ready ({:.1}s)", report.elapsed.as_secs_f64());
        }
        if let Some(path) = output {
            std::fs::write(&path, &report.result)
                .with_context(|| format!("Failed to write summary to {}", path.display()))?;
            if !quiet {
                eprintln!("saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Run the extract command: print extracted text on stdout.
fn run_extract(cfg: &Config, path: &Path) -> Result<()> {
    let document = load_document(path, cfg.limits.max_upload_bytes)?;
    let text =
        extract::extract(document).map_err(|e| anyhow::anyhow!("extraction failed: {}", e))?;
    println!("{}", text.as_str());
    Ok(())
}

/// Run the check command: show effective settings and verify credentials.
fn run_check(cfg: &Config) -> Result<()> {
    println!("base url:     {}", cfg.api.base_url);
    println!("model:        {}", cfg.api.model);
    println!("temperature:  {}", cfg.api.temperature);
    println!("cache ttl:    {}s", cfg.cache.ttl_secs);
    println!("variant:      {}", cfg.prompt.variant);

    HostedSummarizer::new(&cfg.api)?;
    println!("credentials:  OK ({} present)", API_KEY_ENV);
    Ok(())
}

/// Read a document from disk, enforcing the upload size limit and the
/// supported extensions before loading the bytes.
fn load_document(path: &Path, max_bytes: u64) -> Result<Document> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if metadata.len() > max_bytes {
        bail!(
            "{} exceeds the upload size limit ({} bytes)",
            path.display(),
            max_bytes
        );
    }
    let media_type = MediaType::from_path(path);
    if media_type == MediaType::None {
        bail!(
            "{}: unsupported media type (expected .pdf or .docx)",
            path.display()
        );
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Document::new(bytes, media_type))
}
