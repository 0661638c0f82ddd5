//! Integration tests for time-bucketed distributions.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use tm_model::Periodicity;
use tm_transform::{TransformError, time_distribution};

fn augmented(rows: &[(Option<&str>, &str)]) -> DataFrame {
    let dates: Vec<Option<&str>> = rows.iter().map(|(date, _)| *date).collect();
    let titles: Vec<&str> = rows.iter().map(|(_, title)| *title).collect();
    DataFrame::new(vec![
        Column::from(Series::new("date".into(), dates)),
        Column::from(Series::new("publication_name".into(), titles)),
    ])
    .unwrap()
}

fn sample() -> DataFrame {
    augmented(&[
        (Some("1900-01-05"), "Il_Patriota"),
        (Some("1900-01-05"), "Il_Patriota"),
        (Some("1900-01-20"), "Il_Patriota"),
        (Some("1900-02-01"), "Cronaca_Sovversiva"),
        (Some("1901-03-01"), "Il_Patriota"),
    ])
}

fn i32_values(df: &DataFrame, name: &str) -> Vec<Option<i32>> {
    df.column(name).unwrap().i32().unwrap().into_iter().collect()
}

fn i64_values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name).unwrap().i64().unwrap().into_iter().collect()
}

fn str_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
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

#[test]
fn groups_by_day() {
    let dist = time_distribution(&sample(), Periodicity::Day, "date", "publication_name").unwrap();

    assert_eq!(names(&dist), ["date", "publication_name", "count"]);
    assert_eq!(
        str_values(&dist, "date"),
        vec![
            Some("1900-01-05".to_string()),
            Some("1900-01-20".to_string()),
            Some("1900-02-01".to_string()),
            Some("1901-03-01".to_string()),
        ]
    );
    assert_eq!(
        i64_values(&dist, "count"),
        vec![Some(2), Some(1), Some(1), Some(1)]
    );
}

#[test]
fn groups_by_month() {
    let dist =
        time_distribution(&sample(), Periodicity::Month, "date", "publication_name").unwrap();

    assert_eq!(names(&dist), ["month", "year", "publication_name", "count"]);
    assert_eq!(i32_values(&dist, "year"), vec![Some(1900), Some(1900), Some(1901)]);
    assert_eq!(i32_values(&dist, "month"), vec![Some(1), Some(2), Some(3)]);
    assert_eq!(i64_values(&dist, "count"), vec![Some(3), Some(1), Some(1)]);
}

#[test]
fn groups_by_year_and_title() {
    let dist =
        time_distribution(&sample(), Periodicity::Year, "date", "publication_name").unwrap();

    assert_eq!(names(&dist), ["year", "publication_name", "count"]);
    assert_eq!(
        i32_values(&dist, "year"),
        vec![Some(1900), Some(1900), Some(1901)]
    );
    assert_eq!(
        str_values(&dist, "publication_name"),
        vec![
            Some("Cronaca_Sovversiva".to_string()),
            Some("Il_Patriota".to_string()),
            Some("Il_Patriota".to_string()),
        ]
    );
    assert_eq!(i64_values(&dist, "count"), vec![Some(1), Some(3), Some(1)]);
}

#[test]
fn missing_dates_form_a_trailing_null_group() {
    let df = augmented(&[
        (None, "Il_Patriota"),
        (Some("1900-01-05"), "Il_Patriota"),
        (Some(""), "Il_Patriota"),
    ]);
    let dist = time_distribution(&df, Periodicity::Year, "date", "publication_name").unwrap();

    assert_eq!(i32_values(&dist, "year"), vec![Some(1900), None]);
    assert_eq!(i64_values(&dist, "count"), vec![Some(1), Some(2)]);
}

#[test]
fn invalid_date_is_reported_with_row() {
    let df = augmented(&[
        (Some("1900-01-05"), "Il_Patriota"),
        (Some("05/01/1900"), "Il_Patriota"),
    ]);
    let err = time_distribution(&df, Periodicity::Day, "date", "publication_name").unwrap_err();
    match err {
        TransformError::InvalidDate { row, column, value } => {
            assert_eq!(row, 1);
            assert_eq!(column, "date");
            assert_eq!(value, "05/01/1900");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_columns_fail() {
    let err = time_distribution(&sample(), Periodicity::Day, "when", "publication_name")
        .unwrap_err();
    assert!(matches!(err, TransformError::MissingColumn { ref column } if column == "when"));

    let err = time_distribution(&sample(), Periodicity::Day, "date", "title").unwrap_err();
    assert!(matches!(err, TransformError::MissingColumn { ref column } if column == "title"));
}

#[test]
fn title_named_like_output_key_conflicts() {
    let err = time_distribution(&sample(), Periodicity::Day, "date", "date").unwrap_err();
    assert!(matches!(err, TransformError::ColumnConflict { .. }));
}

#[test]
fn empty_table_yields_empty_distribution() {
    let df = augmented(&[]);
    let dist = time_distribution(&df, Periodicity::Month, "date", "publication_name").unwrap();
    assert_eq!(dist.height(), 0);
    assert_eq!(names(&dist), ["month", "year", "publication_name", "count"]);
}
