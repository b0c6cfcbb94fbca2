//! Document and sentence ranking against a query

use crate::error::RankError;
use crate::idf::IdfTable;
use crate::types::{Collection, Query};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A ranked item with the components of its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub id: String,
    /// Summed TF-IDF (documents) or summed IDF (sentences)
    pub score: f64,
    /// Fraction of the item's tokens that are query tokens (sentences only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_density: Option<f64>,
}

/// Rank documents by `Σ tf(t) * idf(t)` over query tokens present in each document.
///
/// `idfs` is authoritative: it is used as given and never rebuilt from
/// `documents`, so callers must pass a table computed over the same documents.
/// A query token that occurs in a document but has no weight in `idfs` fails
/// with [`RankError::MissingTermWeight`]. Equal scores keep collection order.
pub fn rank_files(
    query: &Query,
    documents: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<ScoredItem>, RankError> {
    let mut scored = Vec::with_capacity(documents.len());

    for (id, tokens) in documents.iter() {
        let tf = term_frequencies(tokens);
        let mut score = 0.0;
        for term in query.iter() {
            if let Some(&count) = tf.get(term) {
                score += count as f64 * idfs.weight(term)?;
            }
        }
        scored.push(ScoredItem {
            id: id.to_string(),
            score,
            term_density: None,
        });
    }

    // sort_by is stable: ties stay in collection order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(n);

    tracing::debug!(
        documents = documents.len(),
        returned = scored.len(),
        "ranked documents"
    );
    Ok(scored)
}

/// Identifiers of the top `n` documents, see [`rank_files`].
pub fn top_files(
    query: &Query,
    documents: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    Ok(rank_files(query, documents, idfs, n)?
        .into_iter()
        .map(|item| item.id)
        .collect())
}

/// Rank sentences by summed IDF of matching query tokens, then by query-term density.
///
/// Density counts every token of the sentence, repeats included. Sentences
/// equal on both keys keep collection order.
pub fn rank_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<ScoredItem>, RankError> {
    let mut scored = Vec::with_capacity(sentences.len());

    for (id, tokens) in sentences.iter() {
        let mut matching_idf = 0.0;
        for term in query.iter() {
            if tokens.iter().any(|t| t == term) {
                matching_idf += idfs.weight(term)?;
            }
        }

        let matches = tokens.iter().filter(|t| query.contains(t)).count();
        // Collection never holds empty items
        let density = matches as f64 / tokens.len() as f64;

        scored.push(ScoredItem {
            id: id.to_string(),
            score: matching_idf,
            term_density: Some(density),
        });
    }

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.term_density
                    .partial_cmp(&a.term_density)
                    .unwrap_or(Ordering::Equal)
            })
    });
    scored.truncate(n);

    tracing::debug!(
        sentences = sentences.len(),
        returned = scored.len(),
        "ranked sentences"
    );
    Ok(scored)
}

/// Text of the top `n` sentences, see [`rank_sentences`].
pub fn top_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    Ok(rank_sentences(query, sentences, idfs, n)?
        .into_iter()
        .map(|item| item.id)
        .collect())
}

fn term_frequencies(tokens: &[String]) -> HashMap<&str, usize> {
    let mut tf: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0) += 1;
    }
    tf
}
