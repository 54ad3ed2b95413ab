use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamsat::dimacs;
use hamsat::encoding::Encoder;
use hamsat::graph::Graph;

fn ring(n: u32) -> Graph {
    let edges = (1..=n).map(|v| (v, v % n + 1)).collect();
    Graph::new(n, edges).unwrap()
}

fn complete(n: u32) -> Graph {
    let mut edges = vec![];
    for u in 1..=n {
        for v in (u + 1)..=n {
            edges.push((u, v));
        }
    }
    Graph::new(n, edges).unwrap()
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    // Rings maximize the adjacency family, complete graphs eliminate it
    for n in [10, 20, 40] {
        let graph = ring(n);
        group.bench_function(BenchmarkId::new("ring", n), |b| {
            b.iter(|| Encoder::new(black_box(&graph)).encode())
        });

        let graph = complete(n);
        group.bench_function(BenchmarkId::new("complete", n), |b| {
            b.iter(|| Encoder::new(black_box(&graph)).encode())
        });
    }

    group.finish();
}

fn benchmark_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for n in [10, 20, 40] {
        let cnf = Encoder::new(&ring(n)).encode();
        group.bench_function(BenchmarkId::new("ring", n), |b| {
            b.iter(|| dimacs::to_string(black_box(&cnf)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_export);
criterion_main!(benches);
