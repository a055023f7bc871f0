use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use mobilia::core::*;

fn build_lines(n: usize) -> Vec<LineItem> {
    (1..=n)
        .map(|i| {
            LineItemBuilder::new(format!("Furniture item {i}"), dec!(3), dec!(1250.75)).build()
        })
        .collect()
}

fn bench_totals(c: &mut Criterion) {
    let small = build_lines(10);
    let large = build_lines(1000);
    let config = DiscountConfig::new(10, 5, 7);

    c.bench_function("calculate_totals_10_lines", |b| {
        b.iter(|| calculate_totals(black_box(&small), black_box(&config)).unwrap())
    });

    c.bench_function("calculate_totals_1000_lines", |b| {
        b.iter(|| calculate_totals(black_box(&large), black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_totals);
criterion_main!(benches);
