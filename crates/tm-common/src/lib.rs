//! Shared utilities for the topic-modelling corpus crates.
//!
//! This crate provides common utilities used across the workspace,
//! including Polars DataFrame helpers.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_optional_string, any_to_string, format_numeric, has_column};
