//! Corpus ingestion utilities.
//!
//! This crate loads text corpora into Polars DataFrames and moves tables
//! between CSV files and memory.
//!
//! # Features
//!
//! - **Corpus onboarding**: build a `file_name`/`content` table from the
//!   `.txt` files of a zip archive or a directory
//! - **Zenodo**: download a zip archive published on Zenodo and onboard it
//! - **CSV I/O**: read and write tables with a header row
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tm_ingest::{read_corpus_dir, write_csv_table};
//!
//! let mut corpus = read_corpus_dir(Path::new("data/newspapers"))?;
//! write_csv_table(&mut corpus, Path::new("corpus.csv"))?;
//! ```

mod corpus;
mod csv;
mod error;
mod zenodo;

// === Error Types ===
pub use error::{IngestError, Result};

// === Corpus Onboarding ===
pub use corpus::{corpus_frame, read_corpus_dir, read_corpus_zip};

// === CSV I/O ===
pub use csv::{read_csv_table, write_csv, write_csv_table};

// === Zenodo ===
pub use zenodo::{ZenodoClient, fetch_zenodo_corpus, zenodo_file_url};
