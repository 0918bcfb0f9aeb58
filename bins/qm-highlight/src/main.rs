//! qm-highlight: CLI tool for highlighting query matches in text.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use querymark_highlight::{
    highlight, highlight_all, render, spans_to_json, HighlightCache, HighlightConfig,
    HighlightSpan, MarkupStyle,
};
use querymark_telemetry::{LogConfig, Timer};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Lines handed to the highlighter per progress update.
const BATCH_CHUNK: usize = 256;

#[derive(Parser)]
#[command(name = "qm-highlight")]
#[command(about = "Highlight the parts of a text that match a search query")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to .querymark.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight a single description
    Mark {
        /// Text to highlight
        description: String,
        /// Search query
        query: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
        format: Format,
    },
    /// Highlight every line of a file against one query
    Batch {
        /// File with one description per line
        path: PathBuf,
        /// Search query
        query: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
        format: Format,
    },
    /// Read queries from stdin and show the matching lines of a file
    Search {
        /// File with one description per line
        path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Bold terminal text
    Ansi,
    /// Markup using the configured tags
    Html,
    /// JSON span list
    Json,
    /// Bold spans wrapped in [ ]
    Plain,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = HighlightConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let log_config = LogConfig {
        level: if cli.verbose {
            "debug".to_string()
        } else {
            config.logging.level.clone()
        },
        json: config.logging.json,
        show_target: cli.verbose,
    };
    querymark_telemetry::init_with_config(log_config)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "using config file");
    }

    match cli.command {
        Commands::Mark {
            description,
            query,
            format,
        } => {
            let spans = highlight(&description, &query);
            println!("{}", format_spans(&spans, format, &config.markup)?);
        }

        Commands::Batch {
            path,
            query,
            format,
        } => {
            let lines = read_lines(&path)?;
            let timer = Timer::start("batch");

            let pb = ProgressBar::new(lines.len() as u64);
            if format == Format::Json || lines.len() <= 1 {
                pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
            }
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
                    .progress_chars("#>-"),
            );

            let mut results: Vec<Vec<HighlightSpan>> = Vec::with_capacity(lines.len());
            for chunk in lines.chunks(BATCH_CHUNK) {
                results.extend(highlight_all(chunk, &query));
                pb.inc(chunk.len() as u64);
            }
            pb.finish_and_clear();
            timer.stop();

            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for spans in &results {
                    println!("{}", format_spans(spans, format, &config.markup)?);
                }
            }
        }

        Commands::Search { path, format } => {
            let lines = read_lines(&path)?;
            let cache = HighlightCache::new(config.cache.clone());

            for query in std::io::stdin().lock().lines() {
                let query = query.context("Failed to read query from stdin")?;
                let matching: Vec<_> = lines
                    .iter()
                    .map(|line| cache.highlight(line, &query))
                    .filter(|spans| spans.iter().any(|s| s.bold))
                    .collect();

                println!("> {} ({} matches)", query, matching.len());
                for spans in matching {
                    println!("  {}", format_spans(&spans, format, &config.markup)?);
                }
            }

            let stats = cache.stats();
            tracing::debug!(hits = stats.hits, misses = stats.misses, "search finished");
        }
    }

    Ok(())
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.lines().map(String::from).collect())
}

fn format_spans(
    spans: &[HighlightSpan],
    format: Format,
    markup: &MarkupStyle,
) -> anyhow::Result<String> {
    Ok(match format {
        Format::Ansi => spans
            .iter()
            .map(|span| {
                if span.bold {
                    span.text
                        .if_supports_color(Stream::Stdout, |t| t.bold())
                        .to_string()
                } else {
                    span.text.clone()
                }
            })
            .collect(),
        Format::Html => render(spans, markup),
        Format::Json => spans_to_json(spans)?,
        Format::Plain => render(spans, &MarkupStyle::brackets()),
    })
}
