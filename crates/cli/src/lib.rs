//! CLI for Syncmark.
//!
//! The `syncmark` binary stands in for the original dashboard page as the
//! driver: it resolves deployment settings, fetches the benchmark history
//! once per invocation, seeds the selector option list from the revision
//! index, and turns projections into chart-ready output.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use syncmark_core::{BenchmarkHistory, TimingField};
use syncmark_feed::{FeedClient, FeedSettings};
use syncmark_projector::{io as chart_io, RevisionOrder, SeriesProjector};

/// Syncmark CLI.
#[derive(Parser, Debug)]
#[command(name = "syncmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Benchmarks feed URL (overrides SYNCMARK_FEED_URL).
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Read the feed document from a local file instead of fetching.
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Timing field to read: executionTime or average.
    #[arg(long, global = true)]
    pub timing_field: Option<TimingField>,

    /// Revision display order: reverse-insertion or lexicographic.
    #[arg(long, global = true)]
    pub order: Option<RevisionOrder>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ordered revision index.
    ///
    /// This is the option list the comparison selectors are seeded from.
    Revisions,

    /// Project the latest window of revisions and print the chart data.
    Latest {
        /// Window size override (defaults to the configured window).
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Compare up to two selected revisions.
    ///
    /// Each selector slot is independent and may be left empty; empty slots
    /// contribute nothing to the projection.
    Compare {
        /// First selector slot.
        #[arg(long)]
        first: Option<String>,

        /// Second selector slot.
        #[arg(long)]
        second: Option<String>,
    },

    /// Write the chart data JSON and markdown summary to a directory.
    Report {
        /// Output directory.
        #[arg(short, long, default_value = chart_io::OUTPUT_DIR)]
        output: PathBuf,
    },
}

/// Run the CLI with the given arguments.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Cli {
        feed_url,
        file,
        timing_field,
        order,
        command,
    } = Cli::parse();

    let mut settings = FeedSettings::from_env()?;
    if let Some(url) = feed_url {
        settings.feed_url = url;
    }
    if let Some(field) = timing_field {
        settings.timing_field = field;
    }
    if let Some(order) = order {
        settings.order = order;
    }

    let history = load_history(file.as_deref(), &settings).await?;
    let projector = SeriesProjector::new(settings.projector_config());
    let ordered = projector.index_revisions(&history);

    match command {
        Commands::Revisions => {
            for revision in &ordered {
                println!("{revision}");
            }
        }
        Commands::Latest { window } => {
            let projection = match window {
                Some(window) => projector.project_window(&history, &ordered, window)?,
                None => projector.project_latest(&history, &ordered)?,
            };
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
        Commands::Compare { first, second } => {
            let projection = projector.project_comparison(&history, &[first, second])?;
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
        Commands::Report { output } => {
            let projection = projector.project_latest(&history, &ordered)?;
            chart_io::write_chart_outputs(&projection, &output)
                .with_context(|| format!("writing chart outputs to {}", output.display()))?;
            println!("Chart outputs written to {}", output.display());
        }
    }

    Ok(())
}

async fn load_history(
    file: Option<&std::path::Path>,
    settings: &FeedSettings,
) -> anyhow::Result<BenchmarkHistory> {
    match file {
        Some(path) => chart_io::read_history_json(path)
            .with_context(|| format!("reading feed document from {}", path.display())),
        None => Ok(FeedClient::new(settings).fetch().await?),
    }
}
