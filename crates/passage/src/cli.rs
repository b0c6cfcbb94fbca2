use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "passage")]
#[command(version)]
#[command(about = "Find the sentence that answers a question in a folder of documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a query from a corpus directory
    Query(QueryArgs),

    /// Print the document-level IDF table as JSON
    Idf(IdfArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Directory of .txt documents
    pub corpus: PathBuf,

    /// Query text (prompts on stdin if omitted)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of top documents searched for sentences
    #[arg(long)]
    pub files: Option<usize>,

    /// Number of sentences printed
    #[arg(long)]
    pub sentences: Option<usize>,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print ranked files and sentences with their scores as JSON
    #[arg(long)]
    pub scores: bool,
}

#[derive(Args, Debug)]
pub struct IdfArgs {
    /// Directory of .txt documents
    pub corpus: PathBuf,

    /// Only print the K highest weights
    #[arg(long)]
    pub top: Option<usize>,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
