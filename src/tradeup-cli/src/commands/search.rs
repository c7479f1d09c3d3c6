//! Item search command handler

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::config::Config;
use tradeup::{display_source_name, Item};

/// Minimum query length, matching the autocomplete behavior
const MIN_QUERY_LEN: usize = 2;

/// Handle the search command
pub fn handle(query: &str, limit: usize, catalog_flag: Option<PathBuf>) -> Result<()> {
    if query.chars().count() < MIN_QUERY_LEN {
        bail!("Search query must be at least {} characters", MIN_QUERY_LEN);
    }

    let config = Config::load()?;
    let path = config.resolve_catalog_path(catalog_flag)?;
    let catalog = tradeup::load_catalog_file(&path)?;

    let matches = search(&catalog, query, limit);

    if matches.is_empty() {
        println!("No trade-up-eligible items match '{}'", query);
        return Ok(());
    }

    println!(
        "{:<45} {:<18} {:<15} {}",
        "Name", "Rarity", "Float range", "Source"
    );
    println!("{}", "-".repeat(100));

    for item in matches {
        println!(
            "{:<45} {:<18} {:<15} {}",
            item.name,
            item.rarity_name().unwrap_or("-"),
            format!("{} - {}", item.min_float, item.max_float),
            display_source_name(item)
        );
    }

    Ok(())
}

/// Case-insensitive name substring search over trade-up-eligible items.
/// Knives, gloves and Contraband items cannot go into a trade-up and are
/// excluded.
pub fn search<'a>(catalog: &'a [Item], query: &str, limit: usize) -> Vec<&'a Item> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|item| !item.is_gold_eligible())
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Item> {
        tradeup::load_catalog_json(
            r#"[
                {"id": "1", "name": "AK-47 | Redline", "rarity": "Classified"},
                {"id": "2", "name": "AK-47 | Asiimov", "rarity": "Covert"},
                {"id": "3", "name": "Karambit | Fade", "category": "Knives"},
                {"id": "4", "name": "M4A4 | Howl", "rarity": "Contraband"},
                {"id": "5", "name": "Glock-18 | Fade", "rarity": "Restricted"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let results = search(&catalog, "ak-47", 10);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_excludes_knives_and_contraband() {
        let catalog = catalog();
        let results = search(&catalog, "fade", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "5");

        assert!(search(&catalog, "howl", 10).is_empty());
    }

    #[test]
    fn test_search_respects_limit() {
        let catalog = catalog();
        let results = search(&catalog, "ak-47", 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }
}
