//! Type-safe enumerations for corpus aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Bucket size for time-based corpus distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    /// One bucket per calendar date.
    Day,
    /// One bucket per (year, month).
    Month,
    /// One bucket per year.
    Year,
}

impl Periodicity {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Day => "day",
            Periodicity::Month => "month",
            Periodicity::Year => "year",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Periodicity::Day),
            "month" => Ok(Periodicity::Month),
            "year" => Ok(Periodicity::Year),
            _ => Err(ModelError::UnknownPeriodicity {
                value: s.to_string(),
            }),
        }
    }
}
