//! Criterion benchmarks for the layout engine.
//!
//! Measures the energy pass (the per-step hot path) and short
//! end-to-end runs, on both the baseline and the compact backend.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_anneal::anneal::{Annealer, Schedule};
use graph_anneal::compact::CompactModel;
use graph_anneal::layout::{LayoutModel, Weights};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A ladder graph: two rails of `rungs` vertices with a rung between
/// each pair. Dense enough that every energy term stays busy.
fn ladder(rungs: u32) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for i in 0..rungs {
        edges.push((2 * i, 2 * i + 1));
        if i + 1 < rungs {
            edges.push((2 * i, 2 * (i + 1)));
            edges.push((2 * i + 1, 2 * (i + 1) + 1));
        }
    }
    edges
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");
    for &rungs in &[4u32, 8, 16] {
        let edges = ladder(rungs);
        let mut rng = StdRng::seed_from_u64(42);

        let mut baseline = LayoutModel::new(edges.clone());
        baseline.randomize(&mut rng);
        group.bench_with_input(BenchmarkId::new("baseline", rungs), &baseline, |b, m| {
            b.iter(|| black_box(m.energy()))
        });

        let (mut compact, _) = CompactModel::from_edges(&edges).unwrap();
        compact.randomize(&mut rng);
        group.bench_with_input(BenchmarkId::new("compact", rungs), &compact, |b, m| {
            b.iter(|| black_box(m.energy()))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let edges = ladder(6);
    let schedule = Schedule::default().with_steps(2_000).with_seed(42);

    let mut group = c.benchmark_group("anneal_2k_steps");
    group.bench_function("baseline", |b| {
        b.iter(|| {
            let mut model = LayoutModel::new(edges.clone()).with_weights(Weights::default());
            black_box(Annealer::run(&mut model, &schedule).unwrap().best_energy)
        })
    });
    group.bench_function("compact", |b| {
        b.iter(|| {
            let (model, _) = CompactModel::from_edges(&edges).unwrap();
            let mut model = model.with_weights(Weights::default());
            black_box(Annealer::run(&mut model, &schedule).unwrap().best_energy)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_energy, bench_anneal);
criterion_main!(benches);
