//! Integration tests for filename metadata extraction.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use proptest::prelude::*;

use tm_model::ReferenceMap;
use tm_transform::lccn::{extract_date, extract_publication_ref};
use tm_transform::{TransformError, extract_lccn_metadata, extract_lccn_metadata_from_pairs};

fn corpus(file_names: &[&str]) -> DataFrame {
    let contents: Vec<String> = (0..file_names.len()).map(|i| format!("text {i}")).collect();
    DataFrame::new(vec![
        Column::from(Series::new("file_name".into(), file_names)),
        Column::from(Series::new("content".into(), contents)),
    ])
    .unwrap()
}

fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn patriota_map() -> ReferenceMap {
    ReferenceMap::new(
        vec!["sn85054967".to_string()],
        vec!["Il_Patriota".to_string()],
    )
    .unwrap()
}

#[test]
fn extracts_reference_and_date() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let out = extract_lccn_metadata(&df, "file_name", None).unwrap();

    assert_eq!(strings(&out, "date"), vec![Some("1900-01-05".to_string())]);
    assert_eq!(
        strings(&out, "publication_ref"),
        vec![Some("sn85054967".to_string())]
    );
}

#[test]
fn resolves_publication_name_from_map() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let map = patriota_map();
    let out = extract_lccn_metadata(&df, "file_name", Some(&map)).unwrap();

    assert_eq!(
        strings(&out, "publication_name"),
        vec![Some("Il_Patriota".to_string())]
    );
}

#[test]
fn unmatched_file_names_yield_nulls() {
    let df = corpus(&["no_pattern_here.txt", "sn93053873_1912-03-04_p2.txt"]);
    let map = patriota_map();
    let out = extract_lccn_metadata(&df, "file_name", Some(&map)).unwrap();

    assert_eq!(
        strings(&out, "date"),
        vec![None, Some("1912-03-04".to_string())]
    );
    assert_eq!(
        strings(&out, "publication_ref"),
        vec![None, Some("sn93053873".to_string())]
    );
    // Second row has a reference, but it is not in the map.
    assert_eq!(strings(&out, "publication_name"), vec![None, None]);
}

#[test]
fn derived_columns_follow_original_columns() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let map = patriota_map();

    let without_map = extract_lccn_metadata(&df, "file_name", None).unwrap();
    assert_eq!(
        names(&without_map),
        ["file_name", "content", "date", "publication_ref"]
    );

    let with_map = extract_lccn_metadata(&df, "file_name", Some(&map)).unwrap();
    assert_eq!(
        names(&with_map),
        [
            "file_name",
            "content",
            "date",
            "publication_ref",
            "publication_name"
        ]
    );
}

#[test]
fn preserves_row_order_and_original_values() {
    let files = [
        "b1_1901-01-01_p1.txt",
        "a1_1900-01-01_p1.txt",
        "c1_1902-01-01_p1.txt",
    ];
    let df = corpus(&files);
    let out = extract_lccn_metadata(&df, "file_name", None).unwrap();

    assert_eq!(out.height(), 3);
    assert_eq!(
        strings(&out, "file_name"),
        files.iter().map(|f| Some(f.to_string())).collect::<Vec<_>>()
    );
    assert_eq!(
        strings(&out, "publication_ref"),
        vec![
            Some("b1".to_string()),
            Some("a1".to_string()),
            Some("c1".to_string())
        ]
    );
}

#[test]
fn missing_column_fails() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let err = extract_lccn_metadata(&df, "path", None).unwrap_err();
    assert!(matches!(err, TransformError::MissingColumn { ref column } if column == "path"));
}

#[test]
fn unequal_mapping_fails_without_output() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let err = extract_lccn_metadata_from_pairs(
        &df,
        "file_name",
        Some((
            vec!["sn85054967".to_string(), "sn93053873".to_string()],
            vec!["Il_Patriota".to_string()],
        )),
    )
    .unwrap_err();
    assert!(matches!(err, TransformError::MalformedMapping { .. }));
}

#[test]
fn pairs_without_map_omit_name_column() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let out = extract_lccn_metadata_from_pairs(&df, "file_name", None).unwrap();
    assert!(out.column("publication_name").is_err());
}

#[test]
fn empty_map_adds_null_name_column() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt"]);
    let out =
        extract_lccn_metadata_from_pairs(&df, "file_name", Some((Vec::new(), Vec::new())))
            .unwrap();
    assert_eq!(strings(&out, "publication_name"), vec![None]);
}

#[test]
fn non_string_column_is_extraction_failure() {
    let df = DataFrame::new(vec![Column::from(Series::new(
        "file_name".into(),
        [None, Some(42i64)],
    ))])
    .unwrap();
    let err = extract_lccn_metadata(&df, "file_name", None).unwrap_err();
    match err {
        TransformError::ExtractionFailure { row, column, .. } => {
            assert_eq!(row, 1);
            assert_eq!(column, "file_name");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn null_file_names_yield_nulls() {
    let df = DataFrame::new(vec![Column::from(Series::new(
        "file_name".into(),
        [Some("sn85054967_1900-01-05_p1.txt"), None],
    ))])
    .unwrap();
    let out = extract_lccn_metadata(&df, "file_name", None).unwrap();
    assert_eq!(
        strings(&out, "date"),
        vec![Some("1900-01-05".to_string()), None]
    );
}

#[test]
fn rerun_replaces_derived_columns() {
    let df = corpus(&["sn85054967_1900-01-05_p1.txt", "no_pattern_here.txt"]);
    let map = patriota_map();
    let once = extract_lccn_metadata(&df, "file_name", Some(&map)).unwrap();
    let twice = extract_lccn_metadata(&once, "file_name", None).unwrap();

    assert_eq!(
        names(&twice),
        ["file_name", "content", "date", "publication_ref"]
    );
    assert_eq!(strings(&twice, "date"), strings(&once, "date"));
    assert_eq!(
        strings(&twice, "publication_ref"),
        strings(&once, "publication_ref")
    );
}

#[test]
fn file_name_column_with_derived_name_is_rejected() {
    let df = DataFrame::new(vec![
        Column::from(Series::new(
            "date".into(),
            vec!["sn85054967_1900-01-05_p1.txt"],
        )),
        Column::from(Series::new("content".into(), vec!["text"])),
    ])
    .unwrap();

    for column in ["date", "publication_ref", "publication_name"] {
        let renamed = {
            let mut renamed = df.clone();
            renamed.rename("date", column.into()).unwrap();
            renamed
        };
        let err = extract_lccn_metadata(&renamed, column, Some(&patriota_map())).unwrap_err();
        assert!(
            matches!(err, TransformError::ColumnConflict { column: ref c } if c == column),
            "unexpected error for {column}: {err}"
        );
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn replaced_user_column_is_logged() {
    let df = DataFrame::new(vec![
        Column::from(Series::new(
            "file_name".into(),
            vec!["sn85054967_1900-01-05_p1.txt"],
        )),
        Column::from(Series::new("publication_name".into(), vec!["Keep me"])),
    ])
    .unwrap();
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, || {
        extract_lccn_metadata(&df, "file_name", None).unwrap()
    });

    assert_eq!(names(&out), ["file_name", "date", "publication_ref"]);
    let rendered = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(rendered.contains("WARN"), "no warning in {rendered:?}");
    assert!(rendered.contains("publication_name"), "column missing in {rendered:?}");
}

proptest! {
    #[test]
    fn conforming_names_capture_exact_tokens(
        code in "[a-z]{1,4}[0-9]{1,10}",
        year in 1800u32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        page in 1u32..50,
    ) {
        let date = format!("{year:04}-{month:02}-{day:02}");
        let file_name = format!("{code}_{date}_p{page}.txt");
        prop_assert_eq!(extract_publication_ref(&file_name), Some(code.as_str()));
        prop_assert_eq!(extract_date(&file_name), Some(date.as_str()));
    }

    #[test]
    fn names_without_underscores_have_no_metadata(name in "[a-zA-Z0-9.\\-]{0,40}") {
        prop_assert_eq!(extract_publication_ref(&name), None);
        prop_assert_eq!(extract_date(&name), None);
    }

    #[test]
    fn extraction_is_idempotent(files in prop::collection::vec("[a-z0-9_\\-]{0,30}", 1..20)) {
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let df = corpus(&refs);
        let once = extract_lccn_metadata(&df, "file_name", None).unwrap();
        let twice = extract_lccn_metadata(&once, "file_name", None).unwrap();
        prop_assert_eq!(strings(&once, "date"), strings(&twice, "date"));
        prop_assert_eq!(
            strings(&once, "publication_ref"),
            strings(&twice, "publication_ref")
        );
    }
}
