//! TF-IDF ranking engine for two-stage passage retrieval

mod config;
mod error;
mod idf;
mod pipeline;
mod rank;
mod types;

pub use config::Config;
pub use error::RankError;
pub use idf::{compute_idfs, IdfTable};
pub use pipeline::{Answer, Pipeline, ScoredAnswer, SentenceSplitter, Tokenizer};
pub use rank::{rank_files, rank_sentences, top_files, top_sentences, ScoredItem};
pub use types::{Collection, Query};
