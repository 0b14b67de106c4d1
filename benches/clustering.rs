use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;
use wordclust::{cluster, ClusterConfig, VectorSet};

fn random_vector_set(n: usize, d: usize) -> VectorSet {
    let data = Array2::random((n, d), Uniform::new(-1.0f32, 1.0));
    let words = (0..n).map(|i| format!("w{i}")).collect();
    VectorSet::new(words, data).unwrap()
}

fn benchmark_varying_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_vectors");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let d = 128;
    let k = 20;
    let vector_counts = [1_000, 5_000, 10_000];

    for n in vector_counts.iter() {
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let vectors = random_vector_set(n, d);
            let config = ClusterConfig::new(k).with_seed(42).with_max_iterations(5);

            b.iter(|| cluster(black_box(&vectors), &config).unwrap());
        });
    }
    group.finish();
}

fn benchmark_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_k");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n = 5_000;
    let d = 128;
    let cluster_counts = [10, 50, 100];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let vectors = random_vector_set(n, d);
            let config = ClusterConfig::new(k).with_seed(42).with_max_iterations(5);

            b.iter(|| cluster(black_box(&vectors), &config).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_varying_vectors, benchmark_varying_clusters);
criterion_main!(benches);
