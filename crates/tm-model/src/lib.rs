//! Corpus data model for topic-modelling preparation.
//!
//! Types shared by the ingestion, transformation and CLI crates:
//!
//! - **columns**: well-known column names of corpus and derived tables
//! - **enums**: `Periodicity` for time-bucketed distributions
//! - **options**: `FilterExtremes` pruning bounds for token dictionaries
//! - **reference**: `ReferenceMap` from publication codes to display names

pub mod columns;
pub mod enums;
pub mod error;
pub mod options;
pub mod reference;

pub use enums::Periodicity;
pub use error::{ModelError, Result};
pub use options::FilterExtremes;
pub use reference::ReferenceMap;
