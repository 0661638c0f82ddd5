//! Token dictionaries for topic modelling.
//!
//! A [`Dictionary`] maps every distinct token of a tokenised corpus to a
//! dense integer id and tracks how often it occurs (collection frequency,
//! `cf`) and in how many documents (document frequency, `df`). Id assignment
//! and pruning follow gensim's `corpora.Dictionary`, so dictionaries built
//! here line up with models trained by gensim-based tooling.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info};

use tm_model::FilterExtremes;
use tm_model::columns::{CF, DF, KEY, WORD};

use crate::error::Result;

/// Mapping between tokens and integer ids with frequency statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    tokens: Vec<String>,
    token2id: HashMap<String, u32>,
    cfs: Vec<u64>,
    dfs: Vec<u64>,
    num_docs: u64,
    num_pos: u64,
    num_nnz: u64,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from tokenised documents.
    pub fn from_documents<D, S>(documents: &[D]) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.add_documents(documents);
        dictionary
    }

    /// Add documents, assigning ids to unseen tokens.
    ///
    /// Within a document, new tokens receive ids in lexicographic order.
    pub fn add_documents<D, S>(&mut self, documents: &[D])
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        for document in documents {
            let document = document.as_ref();
            let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
            for token in document {
                *counts.entry(token.as_ref()).or_insert(0) += 1;
            }
            for (token, count) in &counts {
                let id = match self.token2id.get(*token).copied() {
                    Some(id) => id,
                    None => self.insert_token(token),
                };
                let idx = id as usize;
                self.cfs[idx] += count;
                self.dfs[idx] += 1;
            }
            self.num_docs += 1;
            self.num_pos += document.len() as u64;
            self.num_nnz += counts.len() as u64;
        }
        debug!(
            documents = documents.len(),
            tokens = self.len(),
            "added documents to dictionary"
        );
    }

    fn insert_token(&mut self, token: &str) -> u32 {
        let id = u32::try_from(self.tokens.len()).unwrap_or(u32::MAX);
        self.tokens.push(token.to_string());
        self.token2id.insert(token.to_string(), id);
        self.cfs.push(0);
        self.dfs.push(0);
        id
    }

    /// Number of tokens in the dictionary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of documents processed.
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    /// Total number of tokens processed.
    pub fn num_pos(&self) -> u64 {
        self.num_pos
    }

    /// Sum over documents of the number of distinct tokens.
    pub fn num_nnz(&self) -> u64 {
        self.num_nnz
    }

    /// Id of a token, if known.
    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.token2id.get(token).copied()
    }

    /// Token for an id, if in range.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Ids in ascending order.
    pub fn keys(&self) -> Vec<u32> {
        (0..self.tokens.len())
            .map(|idx| u32::try_from(idx).unwrap_or(u32::MAX))
            .collect()
    }

    /// Tokens in id order.
    pub fn words(&self) -> &[String] {
        &self.tokens
    }

    /// Collection frequencies in id order.
    pub fn cfs(&self) -> &[u64] {
        &self.cfs
    }

    /// Document frequencies in id order.
    pub fn dfs(&self) -> &[u64] {
        &self.dfs
    }

    /// Remove tokens that are too rare or too common.
    ///
    /// A token survives when `no_below <= df <= floor(no_above * num_docs)` or
    /// when it is listed in `keep_tokens`. Survivors are ranked by document
    /// frequency and cut to `keep_n`; the remaining ids are renumbered keeping
    /// their relative order. Returns the number of removed tokens.
    ///
    /// # Errors
    ///
    /// Returns an error when `no_above` is outside `[0, 1]`.
    pub fn filter_extremes(&mut self, options: &FilterExtremes) -> Result<usize> {
        options.validate()?;
        let no_below = options.no_below.unwrap_or(0);
        let no_above_abs = match options.no_above {
            // Truncation matches gensim's `int(no_above * num_docs)`.
            Some(fraction) => (fraction * self.num_docs as f64) as u64,
            None => self.num_docs,
        };
        let keep: HashSet<u32> = options
            .keep_tokens
            .iter()
            .filter_map(|token| self.id_of(token))
            .collect();

        let mut good: Vec<u32> = self
            .keys()
            .into_iter()
            .filter(|id| {
                let df = self.dfs[*id as usize];
                (no_below <= df && df <= no_above_abs) || keep.contains(id)
            })
            .collect();
        good.sort_by_key(|id| Reverse(self.dfs[*id as usize]));
        if let Some(keep_n) = options.keep_n {
            good.truncate(keep_n);
        }

        let before = self.len();
        self.retain_ids(&good.into_iter().collect());
        let removed = before - self.len();
        info!(
            removed,
            kept = self.len(),
            no_below,
            no_above_abs,
            keep_n = options.keep_n,
            "filtered dictionary extremes"
        );
        Ok(removed)
    }

    fn retain_ids(&mut self, keep: &HashSet<u32>) {
        let mut tokens = Vec::with_capacity(keep.len());
        let mut cfs = Vec::with_capacity(keep.len());
        let mut dfs = Vec::with_capacity(keep.len());
        for (idx, token) in self.tokens.drain(..).enumerate() {
            let id = u32::try_from(idx).unwrap_or(u32::MAX);
            if keep.contains(&id) {
                tokens.push(token);
                cfs.push(self.cfs[idx]);
                dfs.push(self.dfs[idx]);
            }
        }
        self.token2id = tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (token.clone(), u32::try_from(idx).unwrap_or(u32::MAX)))
            .collect();
        self.tokens = tokens;
        self.cfs = cfs;
        self.dfs = dfs;
    }

    /// Most frequent tokens by collection frequency, ties broken by id.
    pub fn most_common(&self, n: Option<usize>) -> Vec<(String, u64)> {
        let mut ranked: Vec<(usize, u64)> = self.cfs.iter().copied().enumerate().collect();
        ranked.sort_by_key(|(idx, cf)| (Reverse(*cf), *idx));
        if let Some(n) = n {
            ranked.truncate(n);
        }
        ranked
            .into_iter()
            .map(|(idx, cf)| (self.tokens[idx].clone(), cf))
            .collect()
    }

    /// Convert a document into a sparse bag of words `(id, count)`, sorted by id.
    ///
    /// Tokens not in the dictionary are ignored.
    pub fn doc2bow<S: AsRef<str>>(&self, document: &[S]) -> Vec<(u32, u64)> {
        let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
        for token in document {
            if let Some(id) = self.id_of(token.as_ref()) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        counts.into_iter().collect()
    }

    /// Dictionary as a table with `key`, `word`, `cf`, `df` columns in id order.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let columns = vec![
            Column::from(Series::new(KEY.into(), self.keys())),
            Column::from(Series::new(WORD.into(), self.tokens.as_slice())),
            Column::from(Series::new(CF.into(), self.cfs.as_slice())),
            Column::from(Series::new(DF.into(), self.dfs.as_slice())),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_sorted_order_within_document() {
        let dictionary = Dictionary::from_documents(&[vec!["zebra", "apple", "mango"]]);
        assert_eq!(dictionary.id_of("apple"), Some(0));
        assert_eq!(dictionary.id_of("mango"), Some(1));
        assert_eq!(dictionary.id_of("zebra"), Some(2));
    }

    #[test]
    fn retain_ids_compacts() {
        let mut dictionary = Dictionary::from_documents(&[vec!["a", "b", "c"]]);
        dictionary.retain_ids(&[0, 2].into_iter().collect());
        assert_eq!(dictionary.words(), ["a".to_string(), "c".to_string()]);
        assert_eq!(dictionary.id_of("c"), Some(1));
        assert_eq!(dictionary.id_of("b"), None);
    }
}
