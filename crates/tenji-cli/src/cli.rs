//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Exhibition listing board toolkit.
///
/// Filters, classifies, and validates exhibition announcement records
/// supplied as JSONL by the listing store.
#[derive(Debug, Parser)]
#[command(name = "tenji", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter event records by date range, prefecture, and venue type.
    Filter {
        /// Input JSONL file, or `-` for stdin.
        #[arg(long, default_value = "-")]
        input: String,

        /// Date range token (upcoming, ongoing, thisWeek, thisMonth,
        /// next30, or all). Defaults to the configured range.
        #[arg(long)]
        range: Option<String>,

        /// Prefecture name (e.g. 東京都), or all.
        #[arg(long)]
        prefecture: Option<String>,

        /// Venue type (major, independent, or all).
        #[arg(long)]
        venue_type: Option<String>,

        /// Evaluation date (YYYY-MM-DD). Defaults to the local calendar date.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Attach the computed venue classification to each record.
        #[arg(long)]
        badges: bool,
    },

    /// Classify a single venue or exhibition.
    Classify {
        /// Venue name to classify.
        #[arg(long)]
        venue: String,

        /// Exhibition title.
        #[arg(long)]
        title: Option<String>,

        /// Organizer name.
        #[arg(long)]
        host: Option<String>,

        /// Output as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate submitted event records.
    Validate {
        /// Input JSONL file, or `-` for stdin.
        #[arg(long, default_value = "-")]
        input: String,
    },
}
