// benches/swap_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use netorder::*;

fn benchmark_scalar(c: &mut Criterion) {
    c.bench_function("htonl", |b| b.iter(|| htonl(black_box(0x1234_5678))));
    c.bench_function("htons", |b| b.iter(|| htons(black_box(0x1234))));
}

fn benchmark_swap_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_slice_i32");

    for size in [1000, 10000, 100000].iter() {
        group.throughput(Throughput::Bytes((*size * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut data: Vec<i32> = (0..size as i32).collect();
            b.iter(|| swap_slice(black_box(data.as_mut_slice())));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_scalar, benchmark_swap_slice);
criterion_main!(benches);
