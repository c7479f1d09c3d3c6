//! CLI argument definitions for tradeup
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod catalog;
mod core;

pub use catalog::CatalogCommand;
pub use core::{Cli, Commands};
