// std imports
use std::hint::black_box;

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};

// local imports
use wildcard::{Expression, normalize};

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("normalize");

    c.bench_function("literal", |b| {
        b.iter(|| normalize(black_box("visual studio code")));
    });
    c.bench_function("canonical", |b| {
        b.iter(|| normalize(black_box("fire*fox?")));
    });
    c.bench_function("redundant", |b| {
        b.iter(|| normalize(black_box("fi***re??x*?fox*???")));
    });
    c.bench_function("rejected-ordering", |b| {
        b.iter(|| normalize(black_box("fire?*fox")));
    });
    c.bench_function("rejected-characters", |b| {
        b.iter(|| normalize(black_box("fire.fox")));
    });
    c.bench_function("expression-from-string", |b| {
        b.iter(|| Expression::try_from(black_box(String::from("fire*fox?"))));
    });

    c.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
