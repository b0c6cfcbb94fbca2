#![allow(dead_code)]

use passage_core::{Collection, Config, Pipeline, Query};
use passage_corpus::{StopwordTokenizer, UnicodeSentenceSplitter};
use std::path::Path;

pub fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn collection(items: &[(&str, &[&str])]) -> Collection {
    items
        .iter()
        .map(|(id, words)| (*id, tokens(words)))
        .collect()
}

pub fn query(words: &[&str]) -> Query {
    words.iter().copied().collect()
}

pub fn sample_pipeline(config: Config) -> Pipeline<StopwordTokenizer, UnicodeSentenceSplitter> {
    Pipeline::new(StopwordTokenizer::default(), UnicodeSentenceSplitter, config)
}

pub fn write_corpus(dir: &Path, documents: &[(&str, &str)]) {
    for (name, text) in documents {
        std::fs::write(dir.join(name), text).unwrap();
    }
}

pub fn sample_corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "python.txt",
            "Python is a high-level programming language.\n\
             Python was created by Guido van Rossum and first released in 1991.\n\
             Its design philosophy emphasizes code readability.",
        ),
        (
            "neural_network.txt",
            "A neural network is a model inspired by the brain.\n\
             Neural networks learn weights using backpropagation. \
             Training a network requires labelled data.",
        ),
        (
            "probability.txt",
            "Probability measures how likely an event is to occur.\n\
             Bayes' theorem describes the probability of an event based on prior knowledge.",
        ),
    ]
}
