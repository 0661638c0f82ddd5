//! Filename metadata extraction for LCCN-style corpora.
//!
//! Newspaper corpora digitised by the Library of Congress name their pages
//! after the publication LCCN and the issue date, e.g.
//! `sn85054967_1900-01-05_p1.txt`. This module derives three columns from
//! such file names:
//!
//! - `date`: the first underscore-delimited `YYYY-MM-DD` token
//! - `publication_ref`: the code immediately preceding that date
//! - `publication_name`: the display name of the code in a [`ReferenceMap`]
//!   (only when a map is supplied)
//!
//! A file name that does not follow the convention yields nulls; it is not
//! an error.

use std::sync::LazyLock;

use polars::prelude::{AnyValue, Column, DataFrame, DataType, NamedFrom, Series};
use regex::Regex;
use tracing::{debug, warn};

use tm_common::has_column;
use tm_model::ReferenceMap;
use tm_model::columns::{DATE, DERIVED_COLUMNS, PUBLICATION_NAME, PUBLICATION_REF};

use crate::error::{Result, TransformError};

static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+\d+)_\d{4}-\d{2}-\d{2}_").expect("Invalid publication reference regex")
});

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\d{4}-\d{2}-\d{2})_").expect("Invalid date regex"));

/// Extract the publication reference code from a file name.
///
/// # Examples
///
/// ```
/// use tm_transform::lccn::extract_publication_ref;
///
/// assert_eq!(extract_publication_ref("sn85054967_1900-01-05_p1.txt"), Some("sn85054967"));
/// assert_eq!(extract_publication_ref("no_pattern_here.txt"), None);
/// ```
pub fn extract_publication_ref(file_name: &str) -> Option<&str> {
    REFERENCE_PATTERN
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the underscore-delimited `YYYY-MM-DD` token from a file name.
///
/// # Examples
///
/// ```
/// use tm_transform::lccn::extract_date;
///
/// assert_eq!(extract_date("sn85054967_1900-01-05_p1.txt"), Some("1900-01-05"));
/// assert_eq!(extract_date("1900-01-05.txt"), None);
/// ```
pub fn extract_date(file_name: &str) -> Option<&str> {
    DATE_PATTERN
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Augment a corpus table with metadata parsed from a file-name column.
///
/// The original columns are kept in order and `date`, `publication_ref` and,
/// when `reference_map` is given, `publication_name` are appended. Input
/// columns already named like a derived column are replaced.
///
/// # Errors
///
/// - [`TransformError::MissingColumn`] if `filename_column` does not exist
/// - [`TransformError::ColumnConflict`] if `filename_column` carries a derived column name
/// - [`TransformError::ExtractionFailure`] if the column does not hold strings
///
/// No partial output is produced on error.
pub fn extract_lccn_metadata(
    records: &DataFrame,
    filename_column: &str,
    reference_map: Option<&ReferenceMap>,
) -> Result<DataFrame> {
    if !has_column(records, filename_column) {
        return Err(TransformError::MissingColumn {
            column: filename_column.to_string(),
        });
    }
    if DERIVED_COLUMNS.contains(&filename_column) {
        return Err(TransformError::ColumnConflict {
            column: filename_column.to_string(),
        });
    }
    let column = records.column(filename_column)?;
    let file_names = file_name_values(column, filename_column)?;

    let mut dates: Vec<Option<String>> = Vec::with_capacity(file_names.len());
    let mut refs: Vec<Option<String>> = Vec::with_capacity(file_names.len());
    for file_name in &file_names {
        dates.push(file_name.and_then(extract_date).map(str::to_string));
        refs.push(
            file_name
                .and_then(extract_publication_ref)
                .map(str::to_string),
        );
    }

    let names: Option<Vec<Option<String>>> = reference_map.map(|map| {
        refs.iter()
            .map(|code| {
                code.as_deref()
                    .and_then(|code| map.name_for(code))
                    .map(str::to_string)
            })
            .collect()
    });

    debug!(
        rows = file_names.len(),
        dates = dates.iter().flatten().count(),
        publication_refs = refs.iter().flatten().count(),
        publication_names = names.as_ref().map(|n| n.iter().flatten().count()),
        "extracted filename metadata"
    );

    let mut columns: Vec<Column> = Vec::with_capacity(records.width() + DERIVED_COLUMNS.len());
    for col in records.get_columns() {
        if DERIVED_COLUMNS.contains(&col.name().as_str()) {
            warn!(column = %col.name(), "replacing existing column with extracted metadata");
        } else {
            columns.push(col.clone());
        }
    }
    columns.push(Column::from(Series::new(DATE.into(), dates)));
    columns.push(Column::from(Series::new(PUBLICATION_REF.into(), refs)));
    if let Some(names) = names {
        columns.push(Column::from(Series::new(PUBLICATION_NAME.into(), names)));
    }

    Ok(DataFrame::new(columns)?)
}

/// Like [`extract_lccn_metadata`], taking the reference map as raw
/// `(references, names)` sequences.
///
/// # Errors
///
/// Returns [`TransformError::MalformedMapping`] before any row is processed
/// when the sequences differ in length.
pub fn extract_lccn_metadata_from_pairs(
    records: &DataFrame,
    filename_column: &str,
    reference_map: Option<(Vec<String>, Vec<String>)>,
) -> Result<DataFrame> {
    let map = reference_map
        .map(|(refs, names)| ReferenceMap::new(refs, names))
        .transpose()?;
    extract_lccn_metadata(records, filename_column, map.as_ref())
}

fn file_name_values<'a>(column: &'a Column, name: &str) -> Result<Vec<Option<&'a str>>> {
    match column.dtype() {
        DataType::String => Ok(column.str()?.into_iter().collect()),
        DataType::Null => Ok(vec![None; column.len()]),
        other => Err(TransformError::ExtractionFailure {
            row: first_non_null_row(column),
            column: name.to_string(),
            reason: format!("expected string file names, found {other} values"),
        }),
    }
}

fn first_non_null_row(column: &Column) -> usize {
    (0..column.len())
        .find(|&idx| !matches!(column.get(idx), Ok(AnyValue::Null)))
        .unwrap_or(0)
}
