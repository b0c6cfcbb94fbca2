//! Errors surfaced by the ranking engine

/// Failures of IDF computation and ranking.
///
/// Every variant is deterministic given the same inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// The input cannot produce a well-defined IDF table (e.g. an empty collection).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A token needed for scoring has no entry in the supplied IDF table.
    #[error("no IDF weight for term: {0}")]
    MissingTermWeight(String),
}
