use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_qa::{config::RetrievalConfig, loader::RawCorpus, Answerer, Normalizer, StopwordNormalizer};

const WORDS: &[&str] = &[
    "river", "mountain", "engine", "protocol", "garden", "library", "network", "signal",
    "harbor", "crystal", "furnace", "lantern", "meadow", "compiler", "orbit", "canyon",
];

// deterministic pseudo text so runs are comparable
fn synthetic_corpus(docs: usize, sentences: usize) -> RawCorpus {
    let mut state = 0x2545_f491u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as usize
    };
    (0..docs)
        .map(|d| {
            let text = (0..sentences)
                .map(|_| {
                    let words: Vec<&str> = (0..12).map(|_| WORDS[next() % WORDS.len()]).collect();
                    format!("The {}.", words.join(" "))
                })
                .collect::<Vec<_>>()
                .join(" ");
            (format!("doc{d}.txt"), text)
        })
        .collect()
}

fn answer_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(200, 40);

    c.bench_function("normalize_document", |b| {
        let normalizer = StopwordNormalizer::english();
        let text = &corpus["doc0.txt"];
        b.iter(|| normalizer.normalize(text));
    });

    c.bench_function("index_corpus", |b| {
        b.iter(|| Answerer::english(corpus.clone(), RetrievalConfig::default()).unwrap());
    });

    let answerer = Answerer::english(corpus.clone(), RetrievalConfig { file_matches: 3, sentence_matches: 1 }).unwrap();
    c.bench_function("answer_query", |b| {
        b.iter(|| answerer.answer("Which compiler follows the orbit of the lantern?").unwrap());
    });
}

criterion_group!(benches, answer_benchmark);
criterion_main!(benches);
