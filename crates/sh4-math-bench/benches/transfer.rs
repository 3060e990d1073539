use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sh4_math_bench::random_bytes;
use sh4_mem::{CacheLine, StoreQueue};

const SIZES: [usize; 4] = [32, 128, 1024, 16 * 1024];

fn copy_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mem/copy");

    for &n in &SIZES {
        let src = random_bytes(n);
        let mut dst = vec![0u8; n];
        group.throughput(Throughput::Bytes(n as u64));

        group.bench_with_input(BenchmarkId::new("sh4_mem", n), &n, |b, _| {
            b.iter(|| sh4_mem::copy(black_box(&mut dst), black_box(&src)))
        });

        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, _| {
            b.iter(|| black_box(&mut dst).copy_from_slice(black_box(&src)))
        });
    }

    group.finish();
}

fn copy_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("mem/lines");

    for &n in &SIZES {
        let words = n / 8;
        let src: Vec<u64> = (0..words as u64).collect();
        let mut lines = vec![CacheLine::default(); n / 32];
        group.throughput(Throughput::Bytes(n as u64));

        group.bench_with_input(BenchmarkId::new("copy32", n), &n, |b, _| {
            b.iter(|| sh4_mem::copy32(black_box(&mut lines), black_box(&src)))
        });

        let mut sq = StoreQueue::new();
        let mut dst = vec![0u32; n / 4];
        group.bench_with_input(BenchmarkId::new("store_queue", n), &n, |b, _| {
            b.iter(|| sq.copy32(black_box(&mut dst), black_box(&src)))
        });
    }

    group.finish();
}

criterion_group!(benches, copy_dispatch, copy_lines);
criterion_main!(benches);
