//! Corpus loading, sentence splitting and tokenization feeding the ranking engine

mod loader;
mod sentences;
mod stopwords;
mod tokenizer;

pub use loader::load_corpus;
pub use sentences::UnicodeSentenceSplitter;
pub use stopwords::Stopwords;
pub use tokenizer::{StopwordTokenizer, TokenizerConfig};
