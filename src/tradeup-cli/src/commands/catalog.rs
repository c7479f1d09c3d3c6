//! Catalog fetch and info command handlers

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use tradeup::{Rarity, RARITY_TABLE};

/// Public catalog document maintained by the ByMykel/CSGO-API project
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/ByMykel/CSGO-API/main/public/api/en/skins.json";

/// Download the catalog document and store it locally.
pub fn fetch(output: Option<&Path>, url: &str) -> Result<()> {
    let destination: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => Config::catalog_cache_path()?,
    };

    println!("Fetching catalog from {}...", url);

    let body = ureq::get(url)
        .call()
        .with_context(|| format!("Failed to fetch catalog from {}", url))?
        .into_string()
        .context("Failed to read catalog response body")?;

    // Parse before writing so a bad download never clobbers a good cache.
    let catalog = tradeup::load_catalog_json(&body)
        .context("Downloaded document is not a valid catalog")?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create cache directory at {}", parent.display())
        })?;
    }
    fs::write(&destination, &body)
        .with_context(|| format!("Failed to write catalog to {}", destination.display()))?;

    println!(
        "Saved {} items to {}",
        catalog.len(),
        destination.display()
    );

    Ok(())
}

/// Print entry counts per rarity tier.
pub fn info(catalog_flag: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let path = config.resolve_catalog_path(catalog_flag)?;
    let catalog = tradeup::load_catalog_file(&path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

    println!("Catalog: {} ({} items)\n", path.display(), catalog.len());
    println!("{:<20} {:>8}", "Rarity", "Items");
    println!("{}", "-".repeat(29));

    for entry in RARITY_TABLE {
        let count = match entry.rarity {
            Rarity::Gold => catalog.iter().filter(|i| i.is_gold_eligible()).count(),
            tier => catalog
                .iter()
                .filter(|i| i.rarity_tier() == Some(tier))
                .count(),
        };
        println!("{:<20} {:>8}", entry.name, count);
    }

    let unclassified = catalog
        .iter()
        .filter(|i| i.rarity_tier().is_none() && !i.is_gold_eligible())
        .count();
    if unclassified > 0 {
        println!("{:<20} {:>8}", "(unclassified)", unclassified);
    }

    Ok(())
}
