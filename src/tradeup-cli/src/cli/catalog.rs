//! Catalog subcommand definitions

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Download the public skins catalog to the local cache
    Fetch {
        /// Write to this path instead of the cache location
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Catalog document URL
        #[arg(long, default_value = crate::commands::catalog::DEFAULT_CATALOG_URL)]
        url: String,
    },

    /// Show entry counts per rarity tier
    Info {
        /// Path to catalog JSON (uses configured/cached catalog if not provided)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}
