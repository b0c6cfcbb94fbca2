//! Sentence splitting on Unicode sentence boundaries

use passage_core::SentenceSplitter;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text at UAX #29 sentence boundaries, trimming whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
