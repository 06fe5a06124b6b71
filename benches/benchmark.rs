// Ranking throughput benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use vecrank::{pairwise_similarity, rank_with, Candidate, MetricKind, RankOptions, Vector};

fn generate_random_vector(rng: &mut StdRng, dim: usize) -> Vector {
    let data: Vec<f64> = (0..dim).map(|_| rng.random_range(-1.0..1.0)).collect();
    Vector::new(data).unwrap()
}

fn generate_candidates(rng: &mut StdRng, n: usize, dim: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate::new(i as u64, generate_random_vector(rng, dim)))
        .collect()
}

fn benchmark_pairwise(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a = generate_random_vector(&mut rng, 768);
    let b = generate_random_vector(&mut rng, 768);

    let mut group = c.benchmark_group("pairwise");
    for metric in MetricKind::ALL {
        group.bench_function(metric.as_str(), |bench| {
            bench.iter(|| pairwise_similarity(black_box(&a), black_box(&b), metric).unwrap());
        });
    }
    group.finish();
}

fn benchmark_rank(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let query = generate_random_vector(&mut rng, 384);

    let sequential = RankOptions { parallel_threshold: usize::MAX };
    let parallel = RankOptions { parallel_threshold: 1 };

    let mut group = c.benchmark_group("rank");
    for size in [1_000, 10_000, 50_000] {
        let candidates = generate_candidates(&mut rng, size, 384);

        group.bench_with_input(BenchmarkId::new("sequential", size), &candidates, |b, candidates| {
            b.iter(|| {
                let results = rank_with(&query, black_box(candidates), MetricKind::Cosine, 10, &sequential).unwrap();
                black_box(results);
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &candidates, |b, candidates| {
            b.iter(|| {
                let results = rank_with(&query, black_box(candidates), MetricKind::Cosine, 10, &parallel).unwrap();
                black_box(results);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_pairwise, benchmark_rank);
criterion_main!(benches);
