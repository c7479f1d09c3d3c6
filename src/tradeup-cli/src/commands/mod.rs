//! Command handlers

pub mod catalog;
pub mod configure;
pub mod outcomes;
pub mod search;
