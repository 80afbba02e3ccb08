use criterion::{criterion_group, criterion_main, Criterion};
use parser::{parse, render, MAX_DEPTH};
use scanner::scan;

pub fn criterion_benchmark(c: &mut Criterion) {
    // Each clause is five levels tall, so the chain stays under the height limit.
    let clauses = MAX_DEPTH - 8;
    let source = (0..clauses)
        .map(|i| format!("(-{i}.5 * \"s{i}\" + !true) >= {i} // comment {i}\n"))
        .collect::<Vec<_>>()
        .join(" != ");

    c.bench_function("scan", |b| b.iter(|| scan(&source)));

    c.bench_function("scan and parse", |b| {
        b.iter(|| {
            let (tokens, errors) = scan(&source);
            assert!(errors.is_empty());
            parse(tokens).unwrap()
        })
    });

    c.bench_function("scan, parse and render", |b| {
        b.iter(|| {
            let (tokens, _) = scan(&source);
            render(&parse(tokens).unwrap())
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
