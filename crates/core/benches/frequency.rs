use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tally_sort_core::{DataKind, Handler, SortingMode};

fn sample_words() -> String {
    (0..20_000)
        .map(|i| format!("w{}", i % 257))
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_reports(c: &mut Criterion) {
    let input = sample_words();

    c.bench_function("words_by_count", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let summary = Handler::for_kind(DataKind::Word)
                .run(SortingMode::ByCount, black_box(input.as_bytes()), &mut out)
                .unwrap();
            black_box((summary, out));
        })
    });

    c.bench_function("words_natural", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let summary = Handler::for_kind(DataKind::Word)
                .run(SortingMode::Natural, black_box(input.as_bytes()), &mut out)
                .unwrap();
            black_box((summary, out));
        })
    });
}

criterion_group!(benches, benchmark_reports);
criterion_main!(benches);
