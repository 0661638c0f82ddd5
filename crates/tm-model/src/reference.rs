//! Publication reference map.
//!
//! A reference map is a user-supplied 1:1 table from publication reference
//! codes (e.g. LCCN `sn85054967`) to human-readable publication names. It is
//! exchanged in the nested form `[[refs...], [names...]]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ModelError, Result};

/// Lookup table from publication reference code to display name.
///
/// Duplicate codes keep the last name supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct ReferenceMap {
    refs: Vec<String>,
    names: Vec<String>,
    lookup: HashMap<String, String>,
}

impl ReferenceMap {
    /// Build a map from two parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedMapping`] when the sequences differ in length.
    pub fn new(refs: Vec<String>, names: Vec<String>) -> Result<Self> {
        if refs.len() != names.len() {
            return Err(ModelError::MalformedMapping {
                reason: format!(
                    "{} reference codes but {} publication names",
                    refs.len(),
                    names.len()
                ),
            });
        }
        let mut lookup = HashMap::with_capacity(refs.len());
        for (code, name) in refs.iter().zip(&names) {
            if let Some(previous) = lookup.insert(code.clone(), name.clone()) {
                warn!(
                    code = %code,
                    previous = %previous,
                    name = %name,
                    "duplicate reference code, keeping last name"
                );
            }
        }
        Ok(Self {
            refs,
            names,
            lookup,
        })
    }

    /// Build a map from the nested `[[refs...], [names...]]` form.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedMapping`] unless exactly two equal-length
    /// inner lists are given.
    pub fn from_nested(nested: Vec<Vec<String>>) -> Result<Self> {
        let count = nested.len();
        let mut lists = nested.into_iter();
        match (lists.next(), lists.next(), lists.next()) {
            (Some(refs), Some(names), None) => Self::new(refs, names),
            _ => Err(ModelError::MalformedMapping {
                reason: format!("expected 2 lists (references, names), found {count}"),
            }),
        }
    }

    /// Look up the display name for a reference code.
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.lookup.get(code).map(String::as_str)
    }

    /// Number of entries as supplied (duplicates included).
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns true when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Number of distinct reference codes.
    pub fn distinct_len(&self) -> usize {
        self.lookup.len()
    }
}

impl TryFrom<Vec<Vec<String>>> for ReferenceMap {
    type Error = ModelError;

    fn try_from(value: Vec<Vec<String>>) -> Result<Self> {
        Self::from_nested(value)
    }
}

impl From<ReferenceMap> for Vec<Vec<String>> {
    fn from(map: ReferenceMap) -> Self {
        vec![map.refs, map.names]
    }
}
