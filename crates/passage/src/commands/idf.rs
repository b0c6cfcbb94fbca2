use passage_core::{compute_idfs, IdfTable, Pipeline};
use passage_corpus::{load_corpus, StopwordTokenizer, UnicodeSentenceSplitter};

use crate::cli::IdfArgs;
use crate::settings::Settings;

pub fn run(args: &IdfArgs) -> anyhow::Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    let files = load_corpus(&args.corpus)?;

    let pipeline = Pipeline::new(
        StopwordTokenizer::new(&settings.tokenizer),
        UnicodeSentenceSplitter,
        settings.ranking,
    );
    let documents = pipeline.tokenize_corpus(&files);
    let idfs = compute_idfs(&documents)?;

    println!("{}", serde_json::to_string_pretty(&render(&idfs, args.top))?);
    Ok(())
}

fn render(idfs: &IdfTable, top: Option<usize>) -> serde_json::Value {
    let terms: Vec<serde_json::Value> = idfs
        .ranked()
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|(term, idf)| serde_json::json!({ "term": term, "idf": idf }))
        .collect();

    serde_json::json!({
        "documents": idfs.collection_size(),
        "vocabulary": idfs.len(),
        "terms": terms,
    })
}
