use std::io::{BufRead, Write};

use passage_core::{Pipeline, SentenceSplitter, Tokenizer};
use passage_corpus::{load_corpus, StopwordTokenizer, UnicodeSentenceSplitter};

use crate::cli::QueryArgs;
use crate::settings::Settings;

pub fn run(args: &QueryArgs) -> anyhow::Result<()> {
    let settings =
        Settings::load(args.config.as_deref())?.with_matches(args.files, args.sentences);
    let files = load_corpus(&args.corpus)?;

    let pipeline = Pipeline::new(
        StopwordTokenizer::new(&settings.tokenizer),
        UnicodeSentenceSplitter,
        settings.ranking,
    );

    let text = match &args.query {
        Some(q) => q.clone(),
        None => prompt_query(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let stdout = std::io::stdout();
    write_answer(&mut stdout.lock(), &pipeline, &files, &text, args.scores)
}

fn prompt_query(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<String> {
    write!(output, "Query: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn write_answer<T: Tokenizer, S: SentenceSplitter>(
    out: &mut impl Write,
    pipeline: &Pipeline<T, S>,
    files: &[(String, String)],
    text: &str,
    scores: bool,
) -> anyhow::Result<()> {
    let query = pipeline.query(text);

    if scores {
        let scored = pipeline.answer_scored(files, &query)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&scored)?)?;
    } else {
        let answer = pipeline.answer(files, &query)?;
        for sentence in &answer.sentences {
            writeln!(out, "{sentence}")?;
        }
    }
    Ok(())
}
