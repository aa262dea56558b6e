//! Summarize documents and analyze support tickets from the command line.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use summarizer::{
    Annotator, RuleBasedAnnotator, ScoredSentence, Summarizer, SummarizerConfig, SummaryReport,
    TicketAnalyzer, DEFAULT_DICTIONARY,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "summarize")]
#[command(about = "Heuristic extractive summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a document
    Summarize(SummarizeArgs),

    /// Analyze support tickets, one per line
    Analyze {
        /// File with one ticket per line
        file: PathBuf,

        /// Custom entity dictionary for regex NER
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_DICTIONARY)]
        dictionary: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SummarizeArgs {
    /// Document to summarize
    file: PathBuf,

    /// Score with heuristic features instead of random scores
    #[arg(long)]
    heuristic: bool,

    /// Maximum sentences kept after ranking
    #[arg(long)]
    max_sentences: Option<usize>,

    /// String appended after every summary sentence
    #[arg(long)]
    separator: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with summarizer settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report with scores as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,summarizer=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let env_config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Summarize(args) => run_summarize(args, &env_config),
        Commands::Analyze { file, dictionary } => run_analyze(&file, dictionary, &env_config),
    }
}

fn run_summarize(args: SummarizeArgs, env_config: &Config) -> Result<()> {
    let config = build_summarizer_config(&args, env_config)?;
    let text = read_input(&args.file)?;

    let summarizer = Summarizer::new(select_annotator(env_config), config)
        .context("Invalid summarizer configuration")?;
    let report = summarizer
        .report(&text, args.heuristic)
        .with_context(|| format!("Failed to summarize {}", args.file.display()))?;

    if args.json {
        let output = serde_json::to_string_pretty(&JsonReport::from(&report))
            .context("Failed to serialize report")?;
        println!("{}", output);
    } else {
        println!("{}", report.render());
    }

    Ok(())
}

fn run_analyze(file: &Path, dictionary: Option<PathBuf>, env_config: &Config) -> Result<()> {
    let annotator = analysis_annotator(env_config)?;
    let text = read_input(file)?;

    let mut analyzer = TicketAnalyzer::new(annotator);
    if let Some(path) = dictionary {
        analyzer = analyzer.with_dictionary(path);
    }

    let analyses = analyzer
        .analyze_tickets(text.lines())
        .with_context(|| format!("Failed to analyze {}", file.display()))?;

    let output = serde_json::to_string_pretty(&analyses).context("Failed to serialize analysis")?;
    println!("{}", output);

    Ok(())
}

/// Layer settings: defaults, then `--config` file, then environment, then flags.
fn build_summarizer_config(args: &SummarizeArgs, env_config: &Config) -> Result<SummarizerConfig> {
    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => SummarizerConfig::default(),
    };
    Ok(apply_overrides(config, args, env_config))
}

fn load_config_file(path: &Path) -> Result<SummarizerConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn apply_overrides(
    mut config: SummarizerConfig,
    args: &SummarizeArgs,
    env_config: &Config,
) -> SummarizerConfig {
    if let Some(max) = args.max_sentences.or(env_config.max_sentences) {
        config.max_sentences = max;
    }
    if let Some(separator) = args.separator.as_ref().or(env_config.separator.as_ref()) {
        config.separator = separator.clone();
    }
    if let Some(seed) = args.seed.or(env_config.seed) {
        config.seed = Some(seed);
    }
    config
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(feature = "corenlp")]
fn select_annotator(env_config: &Config) -> Box<dyn Annotator> {
    match &env_config.corenlp_url {
        Some(url) => {
            tracing::info!(url = %url, "Using CoreNLP annotator");
            Box::new(summarizer::CoreNlpAnnotator::new(url.as_str()))
        }
        None => {
            tracing::info!("Using rule-based annotator");
            Box::new(RuleBasedAnnotator::new())
        }
    }
}

#[cfg(not(feature = "corenlp"))]
fn select_annotator(env_config: &Config) -> Box<dyn Annotator> {
    if env_config.corenlp_url.is_some() {
        tracing::warn!("CORENLP_URL is set but the corenlp feature is disabled");
    }
    Box::new(RuleBasedAnnotator::new())
}

/// Ticket analysis needs tagging, which only the CoreNLP annotator provides.
#[cfg(feature = "corenlp")]
fn analysis_annotator(env_config: &Config) -> Result<Box<dyn Annotator>> {
    match &env_config.corenlp_url {
        Some(url) => Ok(Box::new(summarizer::CoreNlpAnnotator::new(url.as_str()))),
        None => bail!("analyze requires CORENLP_URL (CoreNLP annotator)"),
    }
}

#[cfg(not(feature = "corenlp"))]
fn analysis_annotator(_env_config: &Config) -> Result<Box<dyn Annotator>> {
    bail!("analyze requires CORENLP_URL (CoreNLP annotator), but the corenlp feature is disabled")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ranked: Vec<JsonSentence<'a>>,
    selected: Vec<JsonSentence<'a>>,
    summary: Vec<JsonSentence<'a>>,
    rendered: String,
}

#[derive(Serialize)]
struct JsonSentence<'a> {
    position: usize,
    score: u32,
    title: bool,
    text: &'a str,
}

impl<'a> From<&'a ScoredSentence> for JsonSentence<'a> {
    fn from(s: &'a ScoredSentence) -> Self {
        Self {
            position: s.position,
            score: s.score,
            title: s.is_title(),
            text: s.text(),
        }
    }
}

impl<'a> From<&'a SummaryReport> for JsonReport<'a> {
    fn from(report: &'a SummaryReport) -> Self {
        let sentences = |list: &'a [ScoredSentence]| -> Vec<JsonSentence<'a>> {
            list.iter().map(JsonSentence::from).collect()
        };
        Self {
            ranked: sentences(&report.ranked),
            selected: sentences(&report.selected),
            summary: sentences(&report.summary.sentences),
            rendered: report.render(),
        }
    }
}
