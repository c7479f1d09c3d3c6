//! Origin-group resolution
//!
//! Trade-up candidates must share an origin group (a case/crate or a named
//! collection) with at least one input. The catalog exposes origins in
//! several shapes, so they are resolved once into canonical [`Source`]
//! values at this boundary; no other component branches on wire shape.
//!
//! An item may resolve to several sources at once (knives in particular
//! belong to many crates), so membership is always a set question:
//! [`belongs_to_source`] is the contract, never comparison of a single
//! resolved id.

use serde::{Deserialize, Serialize};

use crate::catalog::{Item, RawLabel};

/// Sentinel id used when an item carries no recognizable origin reference.
pub const UNKNOWN_SOURCE_ID: &str = "unknown";

/// Canonical origin group. Identity is by `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
}

impl Source {
    /// Sentinel source for items with no recognizable origin.
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN_SOURCE_ID.to_string(),
            name: "Unknown Source".to_string(),
        }
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Source {}

impl std::hash::Hash for Source {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn source_from_label(label: &RawLabel) -> Option<Source> {
    let id = label.id()?;
    let name = label.name().unwrap_or(id);
    Some(Source {
        id: id.to_string(),
        name: name.to_string(),
    })
}

/// Resolve an item's raw origin references into canonical sources.
///
/// The first rule yielding a non-empty result wins, but all entries of a
/// list field are collected rather than stopping at the first:
/// 1. the `crates` list (a physical case is always the trade-up grouping
///    when present),
/// 2. the `collections` list/object,
/// 3. the single `collection` field (object or bare string),
/// 4. the unknown-source sentinel.
///
/// Order follows the catalog; duplicates by id are dropped.
pub fn resolve_sources(item: &Item) -> Vec<Source> {
    let mut sources: Vec<Source> = item.crates.iter().filter_map(source_from_label).collect();

    if sources.is_empty() {
        if let Some(collections) = &item.collections {
            sources = collections
                .entries()
                .into_iter()
                .filter_map(source_from_label)
                .collect();
        }
    }

    if sources.is_empty() {
        if let Some(collection) = &item.collection {
            sources = source_from_label(collection).into_iter().collect();
        }
    }

    if sources.is_empty() {
        return vec![Source::unknown()];
    }

    let mut deduped: Vec<Source> = Vec::with_capacity(sources.len());
    for source in sources {
        if !deduped.contains(&source) {
            deduped.push(source);
        }
    }
    deduped
}

/// Whether `source_id` appears in the item's resolved source set.
pub fn belongs_to_source(item: &Item, source_id: &str) -> bool {
    resolve_sources(item).iter().any(|s| s.id == source_id)
}

/// Display name covering every source the item resolves to, joined with
/// " / ". Single-source items render as just that source's name.
pub fn display_source_name(item: &Item) -> String {
    let names: Vec<String> = resolve_sources(item).into_iter().map(|s| s.name).collect();
    names.join(" / ")
}
