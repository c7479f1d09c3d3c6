//! Item catalog model and loading
//!
//! The catalog is a remote JSON document whose schema this crate does not
//! control. Fields arrive in inconsistent shapes depending on item type:
//! rarity and category may be a bare string or an `{id, name}` object, and
//! origin references may be a single value, a single object, or an array of
//! objects. Everything here parses defensively; a malformed entry degrades
//! (unknown rarity, unknown source) instead of failing the whole load.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::rarity::Rarity;

/// Wear bounds used when the catalog omits them.
pub const DEFAULT_MIN_FLOAT: f64 = 0.06;
pub const DEFAULT_MAX_FLOAT: f64 = 0.80;

/// Errors that can occur while loading a catalog document
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog document is not a JSON array")]
    NotAnArray,
}

/// A catalog field that may arrive as a bare string or an `{id, name}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLabel {
    Text(String),
    Object {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl RawLabel {
    /// Identifier, falling back to the name (a bare string is both).
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Object { id, name } => id.as_deref().or(name.as_deref()),
        }
    }

    /// Display name, falling back to the identifier.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Object { id, name } => name.as_deref().or(id.as_deref()),
        }
    }
}

/// An origin field that may be a single reference or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOrigins {
    Many(Vec<RawLabel>),
    One(RawLabel),
}

impl RawOrigins {
    /// View the field as a slice of references regardless of wire shape.
    pub fn entries(&self) -> Vec<&RawLabel> {
        match self {
            Self::Many(list) => list.iter().collect(),
            Self::One(single) => vec![single],
        }
    }
}

/// Immutable catalog record for one tradable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Standard rarity tier. Knives and gloves usually omit this.
    #[serde(default)]
    pub rarity: Option<RawLabel>,

    /// Item category (e.g. "Rifles", "Knives", "Gloves").
    #[serde(default)]
    pub category: Option<RawLabel>,

    #[serde(default = "default_min_float")]
    pub min_float: f64,

    #[serde(default = "default_max_float")]
    pub max_float: f64,

    /// Cases/crates this item drops from. Takes precedence over collections
    /// when resolving the trade-up grouping.
    #[serde(default)]
    pub crates: Vec<RawLabel>,

    /// Named collections (list or single object, depending on item type).
    #[serde(default)]
    pub collections: Option<RawOrigins>,

    /// Legacy single-collection field (object or bare string).
    #[serde(default)]
    pub collection: Option<RawLabel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_min_float() -> f64 {
    DEFAULT_MIN_FLOAT
}

fn default_max_float() -> f64 {
    DEFAULT_MAX_FLOAT
}

impl Item {
    /// Parsed standard rarity tier, or `None` when absent/unrecognized.
    pub fn rarity_tier(&self) -> Option<Rarity> {
        self.rarity
            .as_ref()
            .and_then(|r| r.name())
            .and_then(Rarity::from_catalog_name)
    }

    /// Category display name, if present.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.name())
    }

    /// Rarity display name as the catalog spells it, if present.
    pub fn rarity_name(&self) -> Option<&str> {
        self.rarity.as_ref().and_then(|r| r.name())
    }

    /// Whether this item can come out of a Covert trade-up. Knives and
    /// gloves carry no standard rarity; Contraband items (e.g. the Howl)
    /// count as well.
    pub fn is_gold_eligible(&self) -> bool {
        matches!(self.category_name(), Some("Knives") | Some("Gloves"))
            || self.rarity_name() == Some("Contraband")
    }

    /// Midpoint of the wear range, the default float for a fresh input slot.
    pub fn default_float(&self) -> f64 {
        (self.min_float + self.max_float) / 2.0
    }

    /// Clamp a float into this item's wear bounds.
    pub fn clamp_float(&self, value: f64) -> f64 {
        value.max(self.min_float).min(self.max_float)
    }
}

/// Load a catalog from a JSON string.
///
/// The document must be a JSON array. Entries that fail to deserialize are
/// dropped silently; the schema is not ours and a handful of malformed
/// records must not take down the rest of the catalog.
pub fn load_catalog_json(json: &str) -> Result<Vec<Item>, CatalogError> {
    let document: serde_json::Value = serde_json::from_str(json)?;

    let entries = match document {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(CatalogError::NotAnArray),
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<Item>(entry).ok())
        .collect())
}

/// Load a catalog from a JSON file on disk.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<Item>, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    load_catalog_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_as_object() {
        let item: Item = serde_json::from_str(
            r##"{
                "id": "skin-1",
                "name": "AK-47 | Redline",
                "rarity": {"id": "rarity_classified", "name": "Classified", "color": "#d32ce6"},
                "min_float": 0.10,
                "max_float": 0.70
            }"##,
        )
        .unwrap();
        assert_eq!(item.rarity_tier(), Some(Rarity::Classified));
    }

    #[test]
    fn test_rarity_as_string() {
        let item: Item = serde_json::from_str(
            r#"{"id": "skin-2", "name": "P250 | Sand Dune", "rarity": "Consumer Grade"}"#,
        )
        .unwrap();
        assert_eq!(item.rarity_tier(), Some(Rarity::ConsumerGrade));
    }

    #[test]
    fn test_missing_rarity_degrades_to_none() {
        let item: Item =
            serde_json::from_str(r#"{"id": "skin-3", "name": "Karambit | Fade"}"#).unwrap();
        assert_eq!(item.rarity_tier(), None);
        assert_eq!(item.rarity_name(), None);
    }

    #[test]
    fn test_missing_float_bounds_use_defaults() {
        let item: Item = serde_json::from_str(r#"{"id": "skin-4", "name": "Test"}"#).unwrap();
        assert_eq!(item.min_float, DEFAULT_MIN_FLOAT);
        assert_eq!(item.max_float, DEFAULT_MAX_FLOAT);
    }

    #[test]
    fn test_collections_single_object() {
        let item: Item = serde_json::from_str(
            r#"{
                "id": "skin-5",
                "name": "Test",
                "collections": {"id": "set_dust_2", "name": "The Dust 2 Collection"}
            }"#,
        )
        .unwrap();
        let collections = item.collections.as_ref().unwrap();
        assert_eq!(collections.entries().len(), 1);
        assert_eq!(collections.entries()[0].id(), Some("set_dust_2"));
    }

    #[test]
    fn test_collection_as_bare_string() {
        let item: Item =
            serde_json::from_str(r#"{"id": "skin-6", "name": "Test", "collection": "Dust"}"#)
                .unwrap();
        let collection = item.collection.as_ref().unwrap();
        assert_eq!(collection.id(), Some("Dust"));
        assert_eq!(collection.name(), Some("Dust"));
    }

    #[test]
    fn test_gold_eligibility() {
        let knife: Item = serde_json::from_str(
            r#"{"id": "k", "name": "Knife", "category": {"id": "csgo_type_knife", "name": "Knives"}}"#,
        )
        .unwrap();
        assert!(knife.is_gold_eligible());

        let glove: Item =
            serde_json::from_str(r#"{"id": "g", "name": "Glove", "category": "Gloves"}"#).unwrap();
        assert!(glove.is_gold_eligible());

        let howl: Item = serde_json::from_str(
            r#"{"id": "h", "name": "M4A4 | Howl", "rarity": "Contraband", "category": "Rifles"}"#,
        )
        .unwrap();
        assert!(howl.is_gold_eligible());

        let rifle: Item = serde_json::from_str(
            r#"{"id": "r", "name": "Rifle", "rarity": "Covert", "category": "Rifles"}"#,
        )
        .unwrap();
        assert!(!rifle.is_gold_eligible());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let catalog = load_catalog_json(
            r#"[
                {"id": "ok-1", "name": "Fine", "rarity": "Restricted"},
                {"id": "bad-1", "name": "Broken", "rarity": 42},
                {"id": "ok-2", "name": "Also Fine"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "ok-1");
        assert_eq!(catalog[1].id, "ok-2");
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        assert!(matches!(
            load_catalog_json(r#"{"error": "rate limited"}"#),
            Err(CatalogError::NotAnArray)
        ));
    }

    #[test]
    fn test_clamp_and_default_float() {
        let item: Item = serde_json::from_str(
            r#"{"id": "skin-7", "name": "Test", "min_float": 0.1, "max_float": 0.5}"#,
        )
        .unwrap();
        assert_eq!(item.default_float(), 0.3);
        assert_eq!(item.clamp_float(0.9), 0.5);
        assert_eq!(item.clamp_float(0.0), 0.1);
        assert_eq!(item.clamp_float(0.25), 0.25);
    }
}
