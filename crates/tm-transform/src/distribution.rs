//! Time-bucketed corpus distributions.
//!
//! Counts corpus records per (period, label) pair, where the period is a
//! day, a month or a year taken from a `YYYY-MM-DD` date column and the label
//! is a caller-chosen title column (publication name or reference).
//!
//! Output layouts:
//!
//! | periodicity | columns                              |
//! |-------------|--------------------------------------|
//! | `day`       | `date`, `<title>`, `count`           |
//! | `month`     | `month`, `year`, `<title>`, `count`  |
//! | `year`      | `year`, `<title>`, `count`           |

use chrono::{Datelike, NaiveDate};
use polars::prelude::{
    Column, DataFrame, DataType, Expr, IntoLazy, NamedFrom, Series, SortMultipleOptions, col, len,
};
use tracing::info;

use tm_common::{any_to_optional_string, has_column};
use tm_model::Periodicity;
use tm_model::columns::{COUNT, DATE, MONTH, YEAR};

use crate::error::{Result, TransformError};

/// Date format accepted in the date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Aggregate a corpus table into record counts per period and title.
///
/// Null or blank dates are grouped under a null period. Rows are sorted by
/// period (oldest first) and then title, with nulls last.
///
/// # Errors
///
/// - [`TransformError::MissingColumn`] if the date or title column is absent
/// - [`TransformError::ColumnConflict`] if the title column is named like an output key
/// - [`TransformError::InvalidDate`] if a non-empty date is not `YYYY-MM-DD`
pub fn time_distribution(
    records: &DataFrame,
    periodicity: Periodicity,
    date_column: &str,
    title_column: &str,
) -> Result<DataFrame> {
    for name in [date_column, title_column] {
        if !has_column(records, name) {
            return Err(TransformError::MissingColumn {
                column: name.to_string(),
            });
        }
    }
    let key_names = period_key_names(periodicity);
    if key_names.contains(&title_column) || title_column == COUNT {
        return Err(TransformError::ColumnConflict {
            column: title_column.to_string(),
        });
    }

    let dates = parse_dates(records.column(date_column)?, date_column)?;
    let mut columns = period_columns(periodicity, &dates);
    columns.push(records.column(title_column)?.clone());
    let keyed = DataFrame::new(columns)?;

    let group_by: Vec<Expr> = key_names
        .iter()
        .copied()
        .chain([title_column])
        .map(col)
        .collect();
    // Month output lists `month` before `year` but orders chronologically.
    let sort_by: Vec<Expr> = match periodicity {
        Periodicity::Month => vec![col(YEAR), col(MONTH), col(title_column)],
        _ => group_by.clone(),
    };

    let distribution = keyed
        .lazy()
        .group_by(group_by)
        .agg([len().cast(DataType::Int64).alias(COUNT)])
        .sort_by_exprs(
            sort_by,
            SortMultipleOptions::default().with_nulls_last(true),
        )
        .collect()?;

    info!(
        periodicity = %periodicity,
        rows = records.height(),
        groups = distribution.height(),
        "computed time distribution"
    );
    Ok(distribution)
}

fn period_key_names(periodicity: Periodicity) -> &'static [&'static str] {
    match periodicity {
        Periodicity::Day => &[DATE],
        Periodicity::Month => &[MONTH, YEAR],
        Periodicity::Year => &[YEAR],
    }
}

fn period_columns(periodicity: Periodicity, dates: &[Option<NaiveDate>]) -> Vec<Column> {
    let years = || -> Vec<Option<i32>> { dates.iter().map(|d| d.map(|d| d.year())).collect() };
    match periodicity {
        Periodicity::Day => {
            let days: Vec<Option<String>> = dates
                .iter()
                .map(|d| d.map(|d| d.format(DATE_FORMAT).to_string()))
                .collect();
            vec![Column::from(Series::new(DATE.into(), days))]
        }
        Periodicity::Month => {
            let months: Vec<Option<i32>> = dates
                .iter()
                .map(|d| d.and_then(|d| i32::try_from(d.month()).ok()))
                .collect();
            vec![
                Column::from(Series::new(MONTH.into(), months)),
                Column::from(Series::new(YEAR.into(), years())),
            ]
        }
        Periodicity::Year => vec![Column::from(Series::new(YEAR.into(), years()))],
    }
}

fn parse_dates(column: &Column, name: &str) -> Result<Vec<Option<NaiveDate>>> {
    let mut dates = Vec::with_capacity(column.len());
    for row in 0..column.len() {
        let Some(raw) = any_to_optional_string(column.get(row)?) else {
            dates.push(None);
            continue;
        };
        let parsed = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
            TransformError::InvalidDate {
                row,
                column: name.to_string(),
                value: raw.clone(),
            }
        })?;
        dates.push(Some(parsed));
    }
    Ok(dates)
}
