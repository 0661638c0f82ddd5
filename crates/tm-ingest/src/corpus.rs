//! Corpus onboarding from text files.
//!
//! A corpus table has one row per `.txt` file: `file_name` holds the base
//! name of the file and `content` its UTF-8 text.

use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info};

use tm_model::columns::{CONTENT, FILE_NAME};

use crate::error::{IngestError, Result};

const TEXT_EXTENSION: &str = ".txt";

/// Build a corpus table from parallel file names and contents.
pub fn corpus_frame(file_names: Vec<String>, contents: Vec<String>) -> Result<DataFrame> {
    let columns = vec![
        Column::from(Series::new(FILE_NAME.into(), file_names)),
        Column::from(Series::new(CONTENT.into(), contents)),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Read every `.txt` entry of a zip archive into a corpus table.
///
/// Entries keep their archive order; directories and other files are skipped.
pub fn read_corpus_zip<R: Read + Seek>(reader: R) -> Result<DataFrame> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut file_names = Vec::new();
    let mut contents = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        if entry.is_dir() || !name.ends_with(TEXT_EXTENSION) {
            debug!(entry = %name, "skipping non-text archive entry");
            continue;
        }

        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|source| IngestError::EntryRead {
                entry: name.clone(),
                source,
            })?;
        let content =
            String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 { name: name.clone() })?;

        file_names.push(base_name(&name));
        contents.push(content);
    }

    info!(files = file_names.len(), "loaded corpus from archive");
    corpus_frame(file_names, contents)
}

/// Read the `.txt` files directly inside a directory into a corpus table.
///
/// Rows are sorted by file name.
pub fn read_corpus_dir(dir: &Path) -> Result<DataFrame> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_text = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(TEXT_EXTENSION));
        if path.is_file() && is_text {
            paths.push(path);
        }
    }
    paths.sort();

    let mut file_names = Vec::with_capacity(paths.len());
    let mut contents = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = fs::read(&path).map_err(|source| IngestError::FileRead {
            path: path.clone(),
            source,
        })?;
        let name = base_name(&path.to_string_lossy());
        let content =
            String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 { name: name.clone() })?;
        file_names.push(name);
        contents.push(content);
    }

    info!(
        dir = %dir.display(),
        files = file_names.len(),
        "loaded corpus from directory"
    );
    corpus_frame(file_names, contents)
}

fn base_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_folders() {
        assert_eq!(
            base_name("corpus/sn85054967/sn85054967_1900-01-05_p1.txt"),
            "sn85054967_1900-01-05_p1.txt"
        );
        assert_eq!(base_name("plain.txt"), "plain.txt");
    }
}
