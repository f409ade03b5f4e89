//! Analyze command: extract, reconstruct, enrich, export.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::{debug, info};

use confsift::config::Config;
use confsift::enrich::{
    enrich_records, parse_keywords, CommandSummarizer, EnrichedRecord, ExtractiveSummary,
    Summarizer,
};
use confsift::export::{default_output_name, render_table, write_csv, write_json};
use confsift::extract::provider_for_path;
use confsift::lang::WhatlangDetector;
use confsift::parser::{ParserConfig, SessionReconstructor, SplitMode, TimeMode};

/// How long an external summary command may run per record.
const SUMMARY_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table on stdout.
    #[default]
    Table,
    /// CSV file, one row per record.
    Csv,
    /// JSON array of enriched records.
    Json,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Program document: a PDF, or any text file (e.g. a company-name list).
    pub file: PathBuf,

    /// Interest keywords, comma-separated. Overrides the configured default.
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Block splitting mode. Overrides the configured default.
    #[arg(long, value_enum)]
    pub split_mode: Option<SplitMode>,

    /// Time recognition mode. Overrides the configured default.
    #[arg(long, value_enum)]
    pub time_mode: Option<TimeMode>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Output path for csv/json. Defaults to a name derived from the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Word cap for extractive summaries.
    #[arg(long)]
    pub summary_words: Option<usize>,

    /// External command to summarize each record (text on stdin, summary on
    /// stdout). Falls back to the extractive summary on any failure.
    #[arg(long)]
    pub summary_command: Option<String>,
}

pub fn handle(args: AnalyzeArgs) -> Result<()> {
    let config = Config::load()?;

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let provider = provider_for_path(&args.file);
    info!(provider = provider.name(), file = %args.file.display(), "extracting document text");
    let text = provider.extract(&bytes)?;

    if text.trim().is_empty() {
        println!(
            "No text could be extracted from {} (scanned PDFs need OCR first).",
            args.file.display()
        );
        return Ok(());
    }

    let parser_config = ParserConfig {
        split_mode: args.split_mode.unwrap_or(config.split_mode),
        time_mode: args.time_mode.unwrap_or(config.time_mode),
        venue_keywords: config.venue_keywords.clone(),
    };
    let detector = WhatlangDetector::new();
    let outcome = SessionReconstructor::new(parser_config, &detector).parse(&text);
    info!(
        records = outcome.records.len(),
        total_blocks = outcome.stats.total_blocks,
        duplicates = outcome.stats.duplicate_blocks,
        dropped = outcome.stats.dropped_blocks,
        "reconstruction pass complete"
    );

    if outcome.records.is_empty() {
        println!("No sessions found in {}.", args.file.display());
        return Ok(());
    }

    let keyword_source = args.keywords.as_deref().unwrap_or(&config.keywords);
    let keywords = parse_keywords(keyword_source);
    debug!(keywords = keywords.len(), "scoring with keyword list");

    let extractive =
        ExtractiveSummary::new(args.summary_words.unwrap_or(config.summary_words));
    let command_summarizer = args.summary_command.as_deref().and_then(|cmd| {
        CommandSummarizer::from_command_line(cmd, SUMMARY_COMMAND_TIMEOUT, extractive)
    });
    let summarize_full_text = command_summarizer.is_some();
    let summarizer: &dyn Summarizer = match &command_summarizer {
        Some(s) => s,
        None => &extractive,
    };

    let enriched = enrich_records(outcome.records, &keywords, summarizer, summarize_full_text);
    println!("Found {} sessions.", enriched.len());

    emit(&args, &enriched)
}

fn emit(args: &AnalyzeArgs, enriched: &[EnrichedRecord]) -> Result<()> {
    match args.format {
        OutputFormat::Table => {
            let stdout = std::io::stdout();
            render_table(stdout.lock(), enriched)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let path = output_path(args, "csv");
            let file = fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(file, enriched)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        OutputFormat::Json => {
            let path = output_path(args, "json");
            let mut file = fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_json(&mut file, enriched)?;
            file.write_all(b"\n")?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn output_path(args: &AnalyzeArgs, extension: &str) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(default_output_name(&args.file, extension)),
    }
}
