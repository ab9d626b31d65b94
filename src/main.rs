//! # tfidf-qa
//!
//! Answers questions from a directory of `.txt` documents.
//!
//! ```bash
//! # interactive prompt
//! tfidf-qa ./corpus
//!
//! # one query, two documents, three sentences
//! tfidf-qa ./corpus --query "What are the properties of a neural network?" --files 2 --sentences 3
//! ```
//!
//! Answers go to stdout, one sentence per line. Logs and the interactive
//! prompt go to stderr; logging is controlled with `RUST_LOG` (default `info`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tfidf_qa::{config::Config, loader::load_corpus, Answerer, UnicodeSegmenter};

#[derive(Parser)]
#[command(
    name = "tfidf-qa",
    version,
    about = "Answer questions from a corpus of text documents using TF-IDF ranking"
)]
struct Cli {
    /// Directory containing the `.txt` documents.
    corpus: PathBuf,

    /// Answer a single query and exit instead of prompting.
    #[arg(long, short)]
    query: Option<String>,

    /// Number of documents to extract sentences from.
    #[arg(long)]
    files: Option<usize>,

    /// Number of sentences to report.
    #[arg(long)]
    sentences: Option<usize>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the selected documents and their TF-IDF scores to stderr.
    #[arg(long)]
    show_scores: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(files) = cli.files {
        config.retrieval.file_matches = files;
    }
    if let Some(sentences) = cli.sentences {
        config.retrieval.sentence_matches = sentences;
    }
    config.validate()?;

    let load_start = Instant::now();
    let texts = load_corpus(&cli.corpus)?;
    info!(
        documents = texts.len(),
        corpus = %cli.corpus.display(),
        elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0,
        "corpus loaded"
    );

    let answerer = Answerer::new(
        texts,
        config.normalizer.build(),
        UnicodeSegmenter::default(),
        config.retrieval,
    )
    .with_context(|| format!("Failed to index corpus {}", cli.corpus.display()))?;
    let retrieval = answerer.retrieval();
    info!(
        file_matches = retrieval.file_matches,
        sentence_matches = retrieval.sentence_matches,
        "ready"
    );

    match cli.query {
        Some(query) => run_single_query(&answerer, &query, cli.show_scores)?,
        None => run_interactive(&answerer, cli.show_scores)?,
    }
    Ok(())
}

fn run_single_query(answerer: &Answerer, query: &str, show_scores: bool) -> Result<()> {
    let answer = answerer.answer(query)?;
    if show_scores {
        eprint!("{}", answer.documents);
    }
    println!("{answer}");
    Ok(())
}

fn run_interactive(answerer: &Answerer, show_scores: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stderr = io::stderr();
    let mut lines = stdin.lock().lines();
    loop {
        // stdout carries answers only
        eprint!("Query: ");
        stderr.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read query")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        match answerer.answer(trimmed) {
            Ok(answer) => {
                if show_scores {
                    eprint!("{}", answer.documents);
                }
                println!("{answer}");
            }
            Err(e) => error!("{e}"),
        }
    }
    Ok(())
}
