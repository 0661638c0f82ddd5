//! Options for token dictionary pruning.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Bounds for removing very rare and very common tokens from a dictionary.
///
/// Every bound is optional. An unset bound does not constrain the result:
/// `no_below` behaves as 0, `no_above` as 1.0, and `keep_n` as unlimited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterExtremes {
    /// Keep tokens contained in at least this many documents.
    pub no_below: Option<u64>,
    /// Keep tokens contained in at most this fraction of documents.
    pub no_above: Option<f64>,
    /// Keep only this many tokens, most frequent by document count first.
    pub keep_n: Option<usize>,
    /// Tokens kept regardless of the frequency bounds.
    #[serde(default)]
    pub keep_tokens: Vec<String>,
}

impl FilterExtremes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bounds gensim applies when `filter_extremes` is called without arguments.
    pub fn gensim_defaults() -> Self {
        Self {
            no_below: Some(5),
            no_above: Some(0.5),
            keep_n: Some(100_000),
            keep_tokens: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_no_below(mut self, no_below: u64) -> Self {
        self.no_below = Some(no_below);
        self
    }

    #[must_use]
    pub fn with_no_above(mut self, no_above: f64) -> Self {
        self.no_above = Some(no_above);
        self
    }

    #[must_use]
    pub fn with_keep_n(mut self, keep_n: usize) -> Self {
        self.keep_n = Some(keep_n);
        self
    }

    #[must_use]
    pub fn with_keep_tokens(mut self, tokens: Vec<String>) -> Self {
        self.keep_tokens = tokens;
        self
    }

    /// True when no bound is configured, so filtering would remove nothing.
    pub fn is_noop(&self) -> bool {
        self.no_below.is_none() && self.no_above.is_none() && self.keep_n.is_none()
    }

    /// Check that the configured bounds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOption`] when `no_above` is not a fraction in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if let Some(no_above) = self.no_above
            && !(0.0..=1.0).contains(&no_above)
        {
            return Err(ModelError::InvalidOption {
                name: "no_above".to_string(),
                reason: format!("{no_above} is not a fraction between 0 and 1"),
            });
        }
        Ok(())
    }
}
