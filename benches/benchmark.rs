//! Benchmarks for symmetric_summarizer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rustc_hash::FxHashSet;
use symmetric_summarizer::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = "\
Война началась летом, и война быстро изменила жизнь каждого жителя большого северного города. Жители города долго не верили, что война придёт к их домам и улицам.

Армия защищала город от врага много долгих месяцев, пока жители строили укрепления вокруг старого центра. Город выдержал осаду, но многие жители покинули свои дома навсегда. Почему война против северного города длилась так долго и кто отвечал за военные решения армии?

Война закончилась весной, и жители города вернулись к мирной жизни среди разрушенных улиц. Историки до сих пор изучают, как война изменила судьбу города и его жителей.
";

fn stemmed(text: &str) -> StemmedDocument {
    let segmenter = UnicodeSegmenter::new();
    let tokenizer = RegexTokenizer::new();
    let normalizer = SnowballNormalizer::new("ru");
    let stopwords = StopwordFilter::new("ru");

    let paragraphs = segmenter.segment(text).unwrap();
    RawDocument::new(paragraphs).map_sentences(|sentence| {
        tokenizer
            .tokenize(sentence)
            .into_iter()
            .filter(|t| !stopwords.is_stopword(t))
            .map(|t| StemmedToken::new(normalizer.normalize(&t).unwrap(), t))
            .collect::<StemmedSentence>()
    })
}

fn benchmark_segmentation(c: &mut Criterion) {
    let segmenter = UnicodeSegmenter::new();

    let mut group = c.benchmark_group("segment_by_size");
    for size in [1, 10, 50].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_term_weights(c: &mut Criterion) {
    let document = stemmed(&SAMPLE_TEXT.repeat(10));
    let proper_nouns = FxHashSet::default();

    c.bench_function("term_weights", |b| {
        b.iter(|| compute_term_weights(black_box(&document), &proper_nouns))
    });
}

fn benchmark_link_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_scores_parallel");
    for size in [1, 10, 50].iter() {
        let document = stemmed(&SAMPLE_TEXT.repeat(*size));
        let weights = compute_term_weights(&document, &FxHashSet::default());
        let frequencies = document.term_frequencies();

        group.bench_with_input(BenchmarkId::new("sequential", size), &frequencies, |b, f| {
            b.iter(|| scoring::symmetric_scores(&weights, black_box(f)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &frequencies, |b, f| {
            b.iter(|| scoring::symmetric_scores_parallel(&weights, black_box(f)))
        });
    }
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for parallel in [false, true] {
            let config = SummarizerConfig::default()
                .with_percentage(30)
                .with_parallel(parallel);
            let summarizer = Summarizer::new(config).unwrap();
            let id = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(id, size), &text, |b, text| {
                b.iter(|| summarizer.summarize(black_box(text)))
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_segmentation,
    benchmark_term_weights,
    benchmark_link_scores,
    benchmark_full_pipeline,
);
criterion_main!(benches);
