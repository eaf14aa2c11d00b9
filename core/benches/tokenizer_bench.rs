use criterion::{criterion_group, criterion_main, Criterion};
use search_core::normalize::normalize;
use search_core::tokenizer::words;

fn bench_tokenize(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. Mémoires? Don't!".repeat(200);
    c.bench_function("tokenize_normalize", |b| {
        b.iter(|| words(&text).filter_map(normalize).count())
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
