//! Configure command handler

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

/// Handle the configure command
pub fn handle(catalog_path: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(path) = catalog_path {
        config.catalog_path = Some(path.clone());
        config.save()?;
        println!("Default catalog path set to {}", path.display());
    }

    if show {
        println!("Config file: {}", Config::config_path()?.display());
        match &config.catalog_path {
            Some(path) => println!("Catalog path: {}", path.display()),
            None => println!(
                "Catalog path: (not set, using cache at {})",
                Config::catalog_cache_path()?.display()
            ),
        }
    }

    Ok(())
}
