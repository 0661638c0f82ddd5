//! CSV table reading and writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a CSV file with a header row.
///
/// Every column is read as text; corpus tables hold file names, dates and
/// labels that must not be reinterpreted as numbers.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV table"
    );
    Ok(df)
}

/// Write a table as CSV with a header row to any writer.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: &mut W) -> Result<()> {
    CsvWriter::new(writer).include_header(true).finish(df)?;
    Ok(())
}

/// Write a table to a CSV file, replacing any existing file.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(df, &mut file).map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        "wrote CSV table"
    );
    Ok(())
}
