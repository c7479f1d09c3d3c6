//! Input-slot files and session rules
//!
//! The engine assumes its preconditions hold; this module is where the CLI
//! enforces them before calling in: slot-count limits (2-10, exactly 5 for
//! Covert), rarity homogeneity, trade-up eligibility of every input, and
//! floats within each item's wear bounds. Missing floats default to the
//! item's midpoint.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use tradeup::{InputSlot, Item, Rarity};

/// Maximum slots in a standard trade-up
pub const MAX_SLOTS: usize = 10;

/// Exact slot count required for a Covert (gold) trade-up
pub const COVERT_SLOTS: usize = 5;

/// Minimum slots for any trade-up
pub const MIN_SLOTS: usize = 2;

/// One entry of an input-slot file. Items are referenced by catalog id or
/// by exact display name.
#[derive(Debug, Deserialize)]
pub struct SlotSpec {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub float: Option<f64>,
}

/// Read an input-slot file (a JSON array of [`SlotSpec`]).
pub fn load_slot_specs<P: AsRef<Path>>(path: P) -> Result<Vec<SlotSpec>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse input file {}", path.display()))
}

/// Resolve slot specs against the catalog and enforce the session rules.
pub fn resolve_slots(specs: &[SlotSpec], catalog: &[Item]) -> Result<Vec<InputSlot>> {
    let mut slots = Vec::with_capacity(specs.len());

    for (index, spec) in specs.iter().enumerate() {
        let item = find_item(spec, catalog)
            .with_context(|| format!("Input slot {} could not be resolved", index + 1))?;

        if item.is_gold_eligible() {
            bail!(
                "'{}' cannot be used in a trade-up (knives, gloves and Contraband items are not valid inputs)",
                item.name
            );
        }

        let slot = match spec.float {
            Some(float) => {
                if float < item.min_float || float > item.max_float {
                    bail!(
                        "Float {} for '{}' is outside its wear range [{}, {}]",
                        float,
                        item.name,
                        item.min_float,
                        item.max_float
                    );
                }
                InputSlot::new(item.clone(), float)
            }
            None => InputSlot::with_default_float(item.clone()),
        };

        slots.push(slot);
    }

    validate_session(&slots)?;
    Ok(slots)
}

fn find_item<'a>(spec: &SlotSpec, catalog: &'a [Item]) -> Result<&'a Item> {
    if let Some(id) = &spec.id {
        return catalog
            .iter()
            .find(|item| &item.id == id)
            .with_context(|| format!("No catalog item with id '{}'", id));
    }

    if let Some(name) = &spec.name {
        let mut matches = catalog.iter().filter(|item| &item.name == name);
        let first = matches
            .next()
            .with_context(|| format!("No catalog item named '{}'", name))?;
        if matches.next().is_some() {
            bail!("Item name '{}' is ambiguous, reference it by id instead", name);
        }
        return Ok(first);
    }

    bail!("Input slot needs an \"id\" or a \"name\" field")
}

/// Enforce slot-count limits and rarity homogeneity.
pub fn validate_session(slots: &[InputSlot]) -> Result<()> {
    if slots.len() < MIN_SLOTS {
        bail!(
            "A trade-up needs at least {} input slots, got {}",
            MIN_SLOTS,
            slots.len()
        );
    }

    let first_rarity = match slots[0].item.rarity_tier() {
        Some(rarity) => rarity,
        None => bail!(
            "'{}' has no recognized rarity tier",
            slots[0].item.name
        ),
    };

    for slot in &slots[1..] {
        let rarity = slot.item.rarity_tier();
        if rarity != Some(first_rarity) {
            bail!(
                "Rarity mismatch: started with {}, cannot add '{}' ({})",
                first_rarity,
                slot.item.name,
                slot.item.rarity_name().unwrap_or("no rarity")
            );
        }
    }

    if first_rarity == Rarity::Covert {
        if slots.len() != COVERT_SLOTS {
            bail!(
                "A Covert trade-up requires exactly {} inputs, got {}",
                COVERT_SLOTS,
                slots.len()
            );
        }
    } else if slots.len() > MAX_SLOTS {
        bail!(
            "A trade-up takes at most {} input slots, got {}",
            MAX_SLOTS,
            slots.len()
        );
    }

    Ok(())
}
