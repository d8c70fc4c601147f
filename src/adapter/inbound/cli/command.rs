//! Command-line interface definitions.
//!
//! Every subcommand initializes a client (warm-up plus directory seed) and
//! prints its result as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Congressional stock-trade disclosures from Capitol Trades
#[derive(Parser, Debug)]
#[command(name = "capitoltrades")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply when missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Print compact single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every known politician ID and name
    Politicians,

    /// Resolve a politician ID from a full or last name
    Lookup {
        /// Name to search for, case-insensitive
        name: String,
    },

    /// Normalized trades of one politician (single page)
    Trades {
        /// Politician ID, e.g. P000197
        politician_id: String,
    },

    /// Full raw trade history of one politician (all pages)
    History {
        /// Politician ID, e.g. P000197
        politician_id: String,
    },

    /// Most recent trades across all politicians
    Latest {
        /// Maximum number of pages to fetch (defaults to `api.latest_max_pages`)
        #[arg(long)]
        pages: Option<u32>,
    },

    /// Committee details by ID
    Committees {
        /// Committee IDs, e.g. hsju ssfi
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
