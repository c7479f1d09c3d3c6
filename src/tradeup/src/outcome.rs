//! Trade-up outcome computation
//!
//! Given a homogeneous-tier set of input slots and the full catalog, produce
//! every item the trade-up can yield, each with an exact probability and its
//! deterministic result float.
//!
//! The probability rule generalizes the classic single-collection formula —
//! your share of inputs from a group, split evenly among that group's
//! possible outcomes — to mixed-group trade-ups. A candidate reachable
//! through several input groups (common for knives, which live in many
//! crates) sums its per-group contributions instead of picking one group.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Item;
use crate::rarity::Rarity;
use crate::source::{display_source_name, resolve_sources, Source};
use crate::wear;

/// One occupied input slot: an item plus the user-chosen wear float.
#[derive(Debug, Clone)]
pub struct InputSlot {
    pub item: Item,
    pub float: f64,
}

impl InputSlot {
    /// Create a slot, clamping the float into the item's wear bounds.
    pub fn new(item: Item, float: f64) -> Self {
        let float = item.clamp_float(float);
        Self { item, float }
    }

    /// Create a slot at the item's default (midpoint) float.
    pub fn with_default_float(item: Item) -> Self {
        let float = item.default_float();
        Self { item, float }
    }
}

/// One possible trade-up result.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeCandidate {
    #[serde(flatten)]
    pub item: Item,
    pub chance_percent: f64,
    pub result_float: f64,
    pub source_name: String,
}

/// Compute every possible outcome of a trade-up.
///
/// Inputs are assumed homogeneous in rarity tier (the first slot's tier is
/// taken as the trade-up tier); enforcing that precondition is the caller's
/// job. Returns an empty list for empty inputs, for inputs whose tier is
/// unrecognized, and for Gold-tier inputs (knives cannot be traded up).
///
/// The returned list drops zero-probability entries and is sorted by
/// descending probability, ties keeping catalog order. Neither argument is
/// mutated; repeated calls with identical arguments yield identical output.
pub fn possible_outcomes(inputs: &[InputSlot], catalog: &[Item]) -> Vec<OutcomeCandidate> {
    if inputs.is_empty() {
        return Vec::new();
    }

    let input_tier = match inputs[0].item.rarity_tier() {
        Some(tier) => tier,
        None => return Vec::new(),
    };

    // None means the gold path (Covert inputs); a standard target otherwise.
    let target = match input_tier {
        Rarity::Covert => None,
        Rarity::Gold => return Vec::new(),
        tier => match tier.next_tier() {
            Some(next) => Some(next),
            None => return Vec::new(),
        },
    };

    let input_sources: Vec<Vec<Source>> = inputs
        .iter()
        .map(|slot| resolve_sources(&slot.item))
        .collect();

    // Union of input source ids, first-seen order.
    let mut input_source_ids: Vec<String> = Vec::new();
    for sources in &input_sources {
        for source in sources {
            if !input_source_ids.iter().any(|id| *id == source.id) {
                input_source_ids.push(source.id.clone());
            }
        }
    }

    // Candidate set: tier match plus at least one shared source, in catalog
    // order. Sources are resolved once per candidate.
    let mut candidates: Vec<(&Item, Vec<Source>)> = Vec::new();
    for entry in catalog {
        let tier_ok = match target {
            Some(tier) => entry.rarity_tier() == Some(tier),
            None => entry.is_gold_eligible(),
        };
        if !tier_ok {
            continue;
        }
        let sources = resolve_sources(entry);
        let shared = sources
            .iter()
            .any(|s| input_source_ids.iter().any(|id| *id == s.id));
        if shared {
            candidates.push((entry, sources));
        }
    }

    let total_inputs = inputs.len() as f64;
    let mut inputs_from: HashMap<&str, f64> = HashMap::new();
    let mut candidates_in: HashMap<&str, f64> = HashMap::new();
    for id in &input_source_ids {
        let input_count = input_sources
            .iter()
            .filter(|sources| sources.iter().any(|s| s.id == *id))
            .count();
        let candidate_count = candidates
            .iter()
            .filter(|(_, sources)| sources.iter().any(|s| s.id == *id))
            .count();
        inputs_from.insert(id.as_str(), input_count as f64);
        candidates_in.insert(id.as_str(), candidate_count as f64);
    }

    let mean_wear = wear::mean_normalized(inputs);

    let mut outcomes: Vec<OutcomeCandidate> = Vec::new();
    for (entry, sources) in &candidates {
        let mut chance = 0.0;
        for id in &input_source_ids {
            if !sources.iter().any(|s| s.id == *id) {
                continue;
            }
            let pool = candidates_in[id.as_str()];
            if pool == 0.0 {
                continue;
            }
            chance += (inputs_from[id.as_str()] / total_inputs) / pool;
        }
        if chance == 0.0 {
            continue;
        }
        outcomes.push(OutcomeCandidate {
            item: (*entry).clone(),
            chance_percent: chance * 100.0,
            result_float: wear::denormalize(entry, mean_wear),
            source_name: display_source_name(entry),
        });
    }

    // Stable sort keeps catalog order for equal chances.
    outcomes.sort_by(|a, b| {
        b.chance_percent
            .partial_cmp(&a.chance_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    outcomes
}
