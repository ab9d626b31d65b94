use std::fs;

use tempfile::TempDir;
use tfidf_qa::{config::Config, loader::load_corpus, Answerer, UnicodeSegmenter};

fn write_corpus(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn loads_only_txt_files_sorted_by_name() {
    let dir = write_corpus(&[
        ("b.txt", b"Second document."),
        ("a.txt", b"First document."),
        ("notes.md", b"Not part of the corpus."),
    ]);
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("c.txt"), "Nested document.").unwrap();

    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.keys().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
    assert_eq!(corpus["a.txt"], "First document.");
}

#[cfg(unix)]
#[test]
fn follows_symlinked_documents() {
    let dir = write_corpus(&[("a.txt", b"Local document.")]);
    let outside = tempfile::tempdir().unwrap();
    let target = outside.path().join("shared.txt");
    fs::write(&target, "Linked document.").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("b.txt")).unwrap();

    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.keys().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
    assert_eq!(corpus["b.txt"], "Linked document.");
}

#[test]
fn skips_files_that_are_not_utf8() {
    let dir = write_corpus(&[("good.txt", b"Readable text."), ("bad.txt", &[0xff, 0xfe, 0x00, 0x81])]);
    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.keys().collect::<Vec<_>>(), vec!["good.txt"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_corpus(&dir.path().join("absent")).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn answers_from_loaded_corpus() {
    let dir = write_corpus(&[
        (
            "python.txt",
            b"Python is a programming language.\nGuido van Rossum created Python in 1991. It emphasizes readability.",
        ),
        (
            "rust.txt",
            b"Rust is a systems programming language. Rust guarantees memory safety without a garbage collector.",
        ),
        ("cats.txt", b"Cats are small carnivorous mammals. They sleep most of the day."),
    ]);
    let corpus = load_corpus(dir.path()).unwrap();
    let config = Config::default();
    let answerer = Answerer::new(corpus, config.normalizer.build(), UnicodeSegmenter::default(), config.retrieval).unwrap();

    let answer = answerer.answer("Who created Python?").unwrap();
    assert_eq!(answer.documents.keys().collect::<Vec<_>>(), vec!["python.txt"]);
    assert_eq!(answer.sentences, vec!["Guido van Rossum created Python in 1991."]);

    let answer = answerer.answer("What does Rust guarantee about memory?").unwrap();
    assert_eq!(answer.documents.keys().collect::<Vec<_>>(), vec!["rust.txt"]);
    assert_eq!(answer.sentences, vec!["Rust guarantees memory safety without a garbage collector."]);
}

#[test]
fn configured_stopwords_change_ranking_input() {
    let dir = write_corpus(&[("a.txt", b"Chapter one. The cat sat."), ("b.txt", b"Chapter two. The dog ran.")]);
    let corpus = load_corpus(dir.path()).unwrap();
    let config = Config::parse("[normalizer]\nextra_stopwords = [\"chapter\"]\n").unwrap();
    let answerer = Answerer::new(corpus, config.normalizer.build(), UnicodeSegmenter::default(), config.retrieval).unwrap();

    assert!(answerer.index().idf().get("chapter").is_none());
    let answer = answerer.answer("chapter dog").unwrap();
    assert_eq!(answer.documents.keys().collect::<Vec<_>>(), vec!["b.txt"]);
    assert_eq!(answer.sentences, vec!["The dog ran."]);
}
