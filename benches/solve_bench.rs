use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twentyfour::{DealConfig, DealSolver, solve_all};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("solve all deals of 4 cards 1..=10 -> 24", |b| {
        b.iter(|| {
            let mut solver = DealSolver::new();
            solve_all(&mut solver, black_box(&DealConfig::default()))
        })
    });

    c.bench_function("find witness 8 8 3 3 -> 24", |b| {
        b.iter(|| DealSolver::new().find_witness(black_box(&[8.0, 8.0, 3.0, 3.0]), black_box(24.0)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
