//! Collections and queries shared by both ranking stages

use std::collections::{BTreeSet, HashMap};

/// Insertion-ordered mapping from item identifier to its token sequence.
///
/// Used for whole documents (keyed by file name) and for sentences (keyed by
/// the sentence text itself). Items with no tokens are never stored, so every
/// entry has a non-zero length. Insertion order is the tie-break order used by
/// the rankers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    items: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns `false` (and stores nothing) when `tokens` is empty.
    ///
    /// Re-inserting an existing identifier replaces its tokens in place, so
    /// duplicate sentences collapse into a single entry at their first position.
    pub fn insert(&mut self, id: impl Into<String>, tokens: Vec<String>) -> bool {
        if tokens.is_empty() {
            return false;
        }

        let id = id.into();
        match self.positions.get(&id) {
            Some(&pos) => self.items[pos].1 = tokens,
            None => {
                self.positions.insert(id.clone(), self.items.len());
                self.items.push((id, tokens));
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Token sequence of one item
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.positions
            .get(id)
            .map(|&pos| self.items[pos].1.as_slice())
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.items
            .iter()
            .map(|(id, tokens)| (id.as_str(), tokens.as_slice()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|(id, _)| id.as_str())
    }
}

impl<I: Into<String>> FromIterator<(I, Vec<String>)> for Collection {
    fn from_iter<T: IntoIterator<Item = (I, Vec<String>)>>(iter: T) -> Self {
        let mut collection = Collection::new();
        for (id, tokens) in iter {
            collection.insert(id, tokens);
        }
        collection
    }
}

/// Deduplicated set of query tokens.
///
/// Ordered so that score sums are always accumulated in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_collection_skips_empty_items() {
        let mut collection = Collection::new();
        assert!(!collection.insert("empty.txt", Vec::new()));
        assert!(collection.insert("a.txt", tokens(&["cat"])));
        assert_eq!(collection.len(), 1);
        assert!(!collection.contains("empty.txt"));
    }

    #[test]
    fn test_collection_preserves_insertion_order() {
        let collection: Collection = vec![
            ("z.txt", tokens(&["one"])),
            ("a.txt", tokens(&["two"])),
            ("m.txt", tokens(&["three"])),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = collection.ids().collect();
        assert_eq!(ids, vec!["z.txt", "a.txt", "m.txt"]);
    }

    #[test]
    fn test_duplicate_id_keeps_first_position() {
        let mut collection = Collection::new();
        collection.insert("The cat sat.", tokens(&["cat", "sat"]));
        collection.insert("A dog ran.", tokens(&["dog", "ran"]));
        collection.insert("The cat sat.", tokens(&["cat", "sat"]));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.ids().next(), Some("The cat sat."));
        assert_eq!(collection.get("The cat sat."), Some(tokens(&["cat", "sat"]).as_slice()));
    }

    #[test]
    fn test_query_deduplicates() {
        let query: Query = ["cat", "dog", "cat"].into_iter().collect();
        assert_eq!(query.len(), 2);
        assert!(query.contains("cat"));
        assert!(!query.contains("fox"));
        assert_eq!(query.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }
}
