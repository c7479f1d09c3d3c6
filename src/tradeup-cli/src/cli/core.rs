//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::catalog::CatalogCommand;

#[derive(Parser)]
#[command(name = "tradeup")]
#[command(about = "CS2 Trade-Up Calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Catalog operations (fetch, info)
    #[command(visible_alias = "cat")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Search trade-up-eligible items by name
    #[command(visible_alias = "s")]
    Search {
        /// Name query (case-insensitive substring, at least 2 characters)
        query: Vec<String>,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Path to catalog JSON (uses configured/cached catalog if not provided)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Compute possible outcomes for a set of input slots
    #[command(visible_alias = "o")]
    Outcomes {
        /// Path to input-slot file (JSON array of {"id"|"name", "float"})
        #[arg(short, long)]
        inputs: PathBuf,

        /// Path to catalog JSON (uses configured/cached catalog if not provided)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compute the deterministic result float for one prospective output
    #[command(visible_alias = "f")]
    Float {
        /// Path to input-slot file (JSON array of {"id"|"name", "float"})
        #[arg(short, long)]
        inputs: PathBuf,

        /// Catalog id of the prospective output item
        #[arg(short, long)]
        output_id: String,

        /// Path to catalog JSON (uses configured/cached catalog if not provided)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default catalog path
        #[arg(long)]
        catalog_path: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
