//! Corpus transformations for topic-modelling preparation.
//!
//! This crate provides the table and token transformations of the toolkit:
//!
//! - **lccn**: publication reference, date and name extraction from file names
//! - **distribution**: record counts per day, month or year and title
//! - **dictionary**: token dictionaries with gensim-compatible pruning
//!
//! Every operation is a pure function of its arguments: inputs are passed
//! explicitly and the result is returned as a new value.

pub mod dictionary;
pub mod distribution;
pub mod error;
pub mod lccn;

pub use dictionary::Dictionary;
pub use distribution::time_distribution;
pub use error::{Result, TransformError};
pub use lccn::{extract_lccn_metadata, extract_lccn_metadata_from_pairs};
