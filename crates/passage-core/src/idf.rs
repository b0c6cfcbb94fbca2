//! Inverse document frequency over an arbitrary collection

use crate::error::RankError;
use crate::types::Collection;
use std::collections::{HashMap, HashSet};

/// Token -> IDF weight, scoped to the collection it was computed from.
///
/// There is no entry for tokens that never occurred in that collection, and a
/// table built from one collection must not be used to score another.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    collection_size: usize,
    weights: HashMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    /// Weight lookup that treats an unknown token as a contract violation
    pub fn weight(&self, token: &str) -> Result<f64, RankError> {
        self.get(token)
            .ok_or_else(|| RankError::MissingTermWeight(token.to_string()))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of items in the source collection
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Entries by descending weight, ties ordered by token
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Compute `idf(t) = ln(N / df(t))` for every token in `collection`.
///
/// `df(t)` counts items containing `t` at least once, so repeated occurrences
/// inside one item do not lower its weight. Fails with
/// [`RankError::InvalidInput`] on an empty collection.
pub fn compute_idfs(collection: &Collection) -> Result<IdfTable, RankError> {
    let doc_count = collection.len();
    if doc_count == 0 {
        return Err(RankError::InvalidInput(
            "cannot compute IDF over an empty collection".to_string(),
        ));
    }

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for (_, tokens) in collection.iter() {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in unique {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }

    let weights: HashMap<String, f64> = doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), (doc_count as f64 / df as f64).ln()))
        .collect();

    tracing::debug!(
        items = doc_count,
        vocabulary = weights.len(),
        "computed IDF table"
    );

    Ok(IdfTable {
        collection_size: doc_count,
        weights,
    })
}
