use std::path::PathBuf;

use polars::prelude::DataFrame;
use tm_model::Periodicity;

#[derive(Debug)]
pub struct OnboardResult {
    pub source: String,
    pub output: PathBuf,
    pub files: usize,
}

#[derive(Debug)]
pub struct LccnResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub with_date: usize,
    pub with_ref: usize,
    /// `None` when no reference map was supplied.
    pub with_name: Option<usize>,
}

#[derive(Debug)]
pub struct TimeDistResult {
    pub periodicity: Periodicity,
    pub records: usize,
    pub frame: DataFrame,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DictionaryResult {
    pub num_docs: u64,
    pub num_pos: u64,
    pub num_nnz: u64,
    pub tokens: usize,
    /// `None` when no pruning bound was given.
    pub removed: Option<usize>,
    pub most_common: Vec<(String, u64)>,
    pub output: Option<PathBuf>,
}
