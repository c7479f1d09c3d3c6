//! # tradeup
//!
//! CS2 trade-up outcome engine.
//!
//! This library provides functionality to:
//! - Parse the public skins catalog despite its polymorphic field shapes
//! - Resolve an item's origin groups (cases/crates or collections)
//! - Walk the rarity-tier ladder, including the terminal Gold tier
//! - Compute every possible trade-up outcome with exact probabilities
//! - Compute deterministic result wear floats
//!
//! The engine is pure and synchronous: it never mutates its arguments, does
//! no I/O beyond the catalog file helpers, and is safe to call repeatedly
//! from independent call sites.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = tradeup::load_catalog_json(
//!     r#"[
//!         {"id": "in", "name": "MP9 | Black Sand", "rarity": "Mil-Spec Grade",
//!          "min_float": 0.0, "max_float": 1.0,
//!          "collections": [{"id": "prisma", "name": "The Prisma Collection"}]},
//!         {"id": "out", "name": "AUG | Momentum", "rarity": "Restricted",
//!          "min_float": 0.0, "max_float": 0.9,
//!          "collections": [{"id": "prisma", "name": "The Prisma Collection"}]}
//!     ]"#,
//! )?;
//!
//! let inputs: Vec<tradeup::InputSlot> = (0..10)
//!     .map(|_| tradeup::InputSlot::new(catalog[0].clone(), 0.5))
//!     .collect();
//!
//! let outcomes = tradeup::possible_outcomes(&inputs, &catalog);
//! assert_eq!(outcomes.len(), 1);
//! assert_eq!(outcomes[0].chance_percent, 100.0);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod outcome;
pub mod rarity;
pub mod source;
pub mod wear;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{
    load_catalog_file, load_catalog_json, CatalogError, Item, RawLabel, RawOrigins,
    DEFAULT_MAX_FLOAT, DEFAULT_MIN_FLOAT,
};
#[doc(inline)]
pub use outcome::{possible_outcomes, InputSlot, OutcomeCandidate};
#[doc(inline)]
pub use rarity::{rarity_info, Rarity, RarityInfo, RARITY_TABLE};
#[doc(inline)]
pub use source::{
    belongs_to_source, display_source_name, resolve_sources, Source, UNKNOWN_SOURCE_ID,
};
#[doc(inline)]
pub use wear::{denormalize, normalize, outcome_float, TradeUpError};
