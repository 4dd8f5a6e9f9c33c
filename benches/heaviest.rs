use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pokefold::{heaviest_weight, Pokemon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ascending_team(len: usize) -> Vec<Pokemon> {
    // Strictly increasing weights: the running maximum moves every step.
    (0..len)
        .map(|i| Pokemon::new(format!("pokemon-{i}"), 1.0 + i as f64))
        .collect()
}

fn random_team(len: usize) -> Vec<Pokemon> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|i| Pokemon::new(format!("pokemon-{i}"), rng.random_range(1.0..10_000.0)))
        .collect()
}

fn bench_heaviest_fold(c: &mut Criterion) {
    for len in [10, 100, 1000] {
        let ascending = ascending_team(len);
        c.bench_function(&format!("fold/ascending_{len}"), |b| {
            b.iter(|| black_box(heaviest_weight(black_box(&ascending))))
        });

        let random = random_team(len);
        c.bench_function(&format!("fold/random_{len}"), |b| {
            b.iter(|| black_box(heaviest_weight(black_box(&random))))
        });
    }
}

fn bench_early_tie(c: &mut Criterion) {
    let mut team = ascending_team(1000);
    // Aborts at the second element, whatever follows.
    team[1].weight = team[0].weight;

    c.bench_function("fold/early_tie_1000", |b| {
        b.iter(|| black_box(heaviest_weight(black_box(&team))))
    });
}

criterion_group!(benches, bench_heaviest_fold, bench_early_tie);
criterion_main!(benches);
