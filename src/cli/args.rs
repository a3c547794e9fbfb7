//! CLI argument definitions using clap
//!
//! Commands:
//! - sig-reports list
//! - sig-reports export
//! - sig-reports chips
//!
//! All commands run against the seeded mock backend; `--seed` selects the
//! dataset. Filter flags are repeatable (`--zone North --zone South`).

use clap::{Args, Parser, Subcommand};

/// Report query tool for the SIG municipal water network dashboard
#[derive(Parser, Debug)]
#[command(name = "sig-reports")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of filtered, sorted reports
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Sort column (id, date, employee_name, duration_minutes, ...)
        #[arg(long, default_value = "date")]
        sort_by: String,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// 1-based page to show
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Records per page
        #[arg(long, default_value_t = 25)]
        page_size: usize,
    },

    /// Print the full filtered set as JSON (what export consumers receive)
    Export {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print the active-filter chips for the given flags
    Chips {
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Filter surface shared by every command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Seed for the mock backend dataset
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Start of the date range (YYYY-MM-DD, requires --to)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the date range (YYYY-MM-DD, requires --from)
    #[arg(long)]
    pub to: Option<String>,

    /// Asset type filter (Tank, Pipe, Plumber-Equipment)
    #[arg(long = "asset-type")]
    pub asset_types: Vec<String>,

    /// Zone filter (North, South, East, West, Center)
    #[arg(long = "zone")]
    pub zones: Vec<String>,

    /// Status filter (OK, Pending, InProgress, Closed)
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Event filter (Inspection, Maintenance, Repair, Reading)
    #[arg(long = "event")]
    pub events: Vec<String>,

    /// Free-text search over employee, asset, notes, and zone
    #[arg(long)]
    pub search: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
