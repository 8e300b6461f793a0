//! Benchmarks for the summation pipeline

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use strcalc_core::Calculator;

/// Generate `count` comma/newline separated numbers
fn generate_numbers(count: usize) -> String {
    (0..count)
        .map(|i| (i % 1500).to_string())
        .collect::<Vec<_>>()
        .join(if count % 2 == 0 { "," } else { "\n" })
}

fn benchmark_default_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_delimiters");
    let calculator = Calculator::new();

    for count in [100, 10_000] {
        let text = generate_numbers(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{count}_numbers"), |b| {
            b.iter(|| calculator.sum(Some(black_box(text.as_str()))).unwrap());
        });
    }

    group.finish();
}

fn benchmark_custom_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom_delimiters");
    let calculator = Calculator::new();

    let body = (0..10_000)
        .map(|i| (i % 1000).to_string())
        .collect::<Vec<_>>()
        .join("***");
    let text = format!("//[***][%%]\n{body}");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("bracketed_10000", |b| {
        b.iter(|| calculator.sum(Some(black_box(text.as_str()))).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_default_delimiters,
    benchmark_custom_delimiters
);
criterion_main!(benches);
