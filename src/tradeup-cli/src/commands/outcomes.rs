//! Outcome and float command handlers

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::session;
use tradeup::{InputSlot, Item};

/// Handle the outcomes command
pub fn handle(inputs_path: &Path, catalog_flag: Option<PathBuf>, json: bool) -> Result<()> {
    let (slots, catalog) = load(inputs_path, catalog_flag)?;
    let outcomes = tradeup::possible_outcomes(&slots, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    print_inputs(&slots);

    if outcomes.is_empty() {
        println!("No compatible outcomes found.");
        println!("(Knives and gloves generally cannot be traded up further.)");
        return Ok(());
    }

    println!("Possible outcomes:\n");
    println!(
        "{:>7}  {:<45} {:<13} {}",
        "Chance", "Name", "Float", "Source"
    );
    println!("{}", "-".repeat(100));

    for outcome in &outcomes {
        println!(
            "{:>6.1}%  {:<45} {:<13.9} {}",
            outcome.chance_percent, outcome.item.name, outcome.result_float, outcome.source_name
        );
    }

    Ok(())
}

/// Handle the float command: deterministic result float for one output item.
pub fn float(inputs_path: &Path, output_id: &str, catalog_flag: Option<PathBuf>) -> Result<()> {
    let (slots, catalog) = load(inputs_path, catalog_flag)?;

    let output: &Item = catalog
        .iter()
        .find(|item| item.id == output_id)
        .with_context(|| format!("No catalog item with id '{}'", output_id))?;

    let result = tradeup::outcome_float(&slots, output)?;

    println!("{:<45} [{} - {}]", output.name, output.min_float, output.max_float);
    println!("Result float: {:.9}", result);

    Ok(())
}

fn load(inputs_path: &Path, catalog_flag: Option<PathBuf>) -> Result<(Vec<InputSlot>, Vec<Item>)> {
    let config = Config::load()?;
    let catalog_path = config.resolve_catalog_path(catalog_flag)?;
    let catalog = tradeup::load_catalog_file(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    if catalog.is_empty() {
        bail!("Catalog at {} is empty", catalog_path.display());
    }

    let specs = session::load_slot_specs(inputs_path)?;
    let slots = session::resolve_slots(&specs, &catalog)?;
    Ok((slots, catalog))
}

fn print_inputs(slots: &[InputSlot]) {
    let tier = slots[0]
        .item
        .rarity_tier()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());

    println!("Trade-up: {} x {} inputs\n", slots.len(), tier);
    for slot in slots {
        println!("  {:<45} float {:.9}", slot.item.name, slot.float);
    }
    println!();
}
