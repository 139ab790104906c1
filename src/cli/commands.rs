//! CLI command definitions

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayjot")]
#[command(about = "Personal journal over a shared CSV table", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a new entry
    Add {
        /// User the entry belongs to
        #[arg(short, long)]
        user: String,

        /// Entry date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Overall mood, 1 (low) to 10 (high)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        mood: u8,

        /// What did you do today?
        #[arg(long)]
        did: Option<String>,

        /// What felt meaningful today?
        #[arg(long)]
        meaningful: Option<String>,

        /// Was it your choice?
        #[arg(long)]
        choice: Option<String>,

        /// What you wouldn't repeat
        #[arg(long)]
        avoid: Option<String>,

        /// Plans for tomorrow
        #[arg(long)]
        tomorrow: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Show a user's recent entries
    List {
        #[arg(short, long)]
        user: String,

        /// How many recent entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Edit one entry's fields in place
    Edit {
        #[arg(short, long)]
        user: String,

        /// Date of the entry to edit, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// New mood, 1 to 10
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        mood: Option<u8>,

        /// What did you do today?
        #[arg(long)]
        did: Option<String>,

        /// What felt meaningful today?
        #[arg(long)]
        meaningful: Option<String>,

        /// Was it your choice?
        #[arg(long)]
        choice: Option<String>,

        /// What you wouldn't repeat
        #[arg(long)]
        avoid: Option<String>,

        /// Plans for tomorrow
        #[arg(long)]
        tomorrow: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Search all entries of all users
    Search {
        /// Keyword to match against every column, case-insensitively
        query: String,
    },

    /// List the users that have entries
    Users,

    /// Show a user's mood trend
    Trend {
        #[arg(short, long)]
        user: String,

        /// How many recent entries to chart
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Export entries as CSV (UTF-8 with BOM, English headers)
    #[command(group = ArgGroup::new("scope").required(true).args(["user", "all"]))]
    Export {
        /// Export this user's entries
        #[arg(short, long)]
        user: Option<String>,

        /// Only the entries on this date, YYYY-MM-DD
        #[arg(long, requires = "user", conflicts_with = "recent")]
        date: Option<String>,

        /// Only the most recent N entries (default 10)
        #[arg(long, requires = "user")]
        recent: Option<usize>,

        /// Export every entry of every user
        #[arg(long)]
        all: bool,

        /// Output file (default: journal_export.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
