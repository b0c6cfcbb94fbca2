//! Two-stage lookup: best documents first, then best sentences inside them

use crate::config::Config;
use crate::error::RankError;
use crate::idf::compute_idfs;
use crate::rank::{rank_files, rank_sentences, ScoredItem};
use crate::types::{Collection, Query};
use serde::Serialize;
use std::collections::HashMap;

/// Turns raw text into normalized tokens
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits a passage of text into sentences
pub trait SentenceSplitter {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Result of one lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answer {
    pub files: Vec<String>,
    pub sentences: Vec<String>,
}

/// Result of one lookup with per-stage scores
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredAnswer {
    pub files: Vec<ScoredItem>,
    pub sentences: Vec<ScoredItem>,
}

pub struct Pipeline<T, S> {
    tokenizer: T,
    splitter: S,
    config: Config,
}

impl<T: Tokenizer, S: SentenceSplitter> Pipeline<T, S> {
    pub fn new(tokenizer: T, splitter: S, config: Config) -> Self {
        Self {
            tokenizer,
            splitter,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenize `(name, text)` documents; documents with no tokens are dropped.
    pub fn tokenize_corpus(&self, files: &[(String, String)]) -> Collection {
        let mut collection = Collection::new();
        for (name, text) in files {
            if !collection.insert(name.as_str(), self.tokenizer.tokenize(text)) {
                tracing::warn!(document = %name, "skipping document with no tokens");
            }
        }
        collection
    }

    pub fn query(&self, text: &str) -> Query {
        self.tokenizer.tokenize(text).into_iter().collect()
    }

    /// Sentence collection for the given documents, keyed by sentence text.
    ///
    /// Each document is split into passages on newlines, then into sentences.
    pub fn sentences_of(&self, names: &[String], texts: &HashMap<&str, &str>) -> Collection {
        let mut sentences = Collection::new();
        for name in names {
            let Some(text) = texts.get(name.as_str()) else {
                continue;
            };
            for passage in text.split('\n') {
                for sentence in self.splitter.split(passage) {
                    let tokens = self.tokenizer.tokenize(&sentence);
                    sentences.insert(sentence, tokens);
                }
            }
        }
        sentences
    }

    /// Run both stages over `files` for `query`.
    pub fn answer(&self, files: &[(String, String)], query: &Query) -> Result<Answer, RankError> {
        let scored = self.answer_scored(files, query)?;
        Ok(Answer {
            files: scored.files.into_iter().map(|item| item.id).collect(),
            sentences: scored.sentences.into_iter().map(|item| item.id).collect(),
        })
    }

    /// Same as [`Pipeline::answer`], keeping the score components of each stage.
    ///
    /// A query with no tokens, or a corpus where no document has tokens left
    /// after tokenization, yields an empty answer instead of ranking every
    /// item at zero and returning the first sentence of the first file.
    pub fn answer_scored(
        &self,
        files: &[(String, String)],
        query: &Query,
    ) -> Result<ScoredAnswer, RankError> {
        if query.is_empty() {
            tracing::warn!("query has no searchable terms");
            return Ok(ScoredAnswer::default());
        }

        let documents = self.tokenize_corpus(files);
        if documents.is_empty() {
            tracing::warn!(files = files.len(), "no document has searchable terms");
            return Ok(ScoredAnswer::default());
        }
        let file_idfs = compute_idfs(&documents)?;
        let top = rank_files(query, &documents, &file_idfs, self.config.file_matches)?;

        let texts: HashMap<&str, &str> = files
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
            .collect();
        let names: Vec<String> = top.iter().map(|item| item.id.clone()).collect();
        let sentences = self.sentences_of(&names, &texts);
        if sentences.is_empty() {
            return Ok(ScoredAnswer {
                files: top,
                sentences: Vec::new(),
            });
        }

        // Document frequency is scoped to the narrowed sentence set
        let sentence_idfs = compute_idfs(&sentences)?;
        let best = rank_sentences(
            query,
            &sentences,
            &sentence_idfs,
            self.config.sentence_matches,
        )?;

        tracing::debug!(
            files = top.len(),
            sentences = sentences.len(),
            "answered query"
        );
        Ok(ScoredAnswer {
            files: top,
            sentences: best,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Whitespace;

    impl Tokenizer for Whitespace {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace()
                .map(|w| {
                    w.trim_matches(|c: char| !c.is_alphanumeric())
                        .to_lowercase()
                })
                .filter(|w| !w.is_empty() && w != "the")
                .collect()
        }
    }

    struct Periods;

    impl SentenceSplitter for Periods {
        fn split(&self, text: &str) -> Vec<String> {
            text.split_inclusive('.')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }
    }

    fn files(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_answer_picks_file_then_sentence() {
        let pipeline = Pipeline::new(Whitespace, Periods, Config::new());
        let corpus = files(&[
            ("cats.txt", "Cats purr. The cat sat on a mat.\nCats sleep a lot."),
            ("dogs.txt", "Dogs bark. The dog ran."),
        ]);

        let query = pipeline.query("Where did the cat sit?");
        let answer = pipeline.answer(&corpus, &query).unwrap();

        assert_eq!(answer.files, vec!["cats.txt"]);
        assert_eq!(answer.sentences, vec!["The cat sat on a mat."]);
    }

    #[test]
    fn test_empty_query_gives_empty_answer() {
        let pipeline = Pipeline::new(Whitespace, Periods, Config::new());
        let corpus = files(&[("a.txt", "some text.")]);

        let answer = pipeline.answer(&corpus, &pipeline.query("the")).unwrap();
        assert_eq!(answer, Answer::default());
    }

    #[test]
    fn test_scored_answer_keeps_components() {
        let pipeline = Pipeline::new(Whitespace, Periods, Config::new());
        let corpus = files(&[
            ("cats.txt", "The cat sat. Dogs bark."),
            ("dogs.txt", "Dogs bark loudly."),
        ]);

        let scored = pipeline
            .answer_scored(&corpus, &pipeline.query("cat"))
            .unwrap();
        assert_eq!(scored.files.len(), 1);
        assert!((scored.files[0].score - 2.0f64.ln()).abs() < 1e-12);
        assert_eq!(scored.sentences[0].id, "The cat sat.");
        assert_eq!(scored.sentences[0].term_density, Some(0.5));
    }

    #[test]
    fn test_corpus_without_terms_gives_empty_answer() {
        let pipeline = Pipeline::new(Whitespace, Periods, Config::new());
        let query = pipeline.query("cat");

        assert_eq!(pipeline.answer(&[], &query).unwrap(), Answer::default());

        let corpus = files(&[("a.txt", "The. The the."), ("b.txt", "...")]);
        let scored = pipeline.answer_scored(&corpus, &query).unwrap();
        assert_eq!(scored, ScoredAnswer::default());
    }

    #[test]
    fn test_duplicate_sentences_collapse() {
        let pipeline = Pipeline::new(Whitespace, Periods, Config::new());
        let corpus = files(&[("a.txt", "Cats purr.\nCats purr.")]);
        let names = vec!["a.txt".to_string()];
        let texts: HashMap<&str, &str> = corpus
            .iter()
            .map(|(n, t)| (n.as_str(), t.as_str()))
            .collect();

        let sentences = pipeline.sentences_of(&names, &texts);
        assert_eq!(sentences.len(), 1);
    }
}
