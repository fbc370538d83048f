use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use rowkv_types::internal::{BeF64, BeI64, Codec};

fn make_i64_cells(n: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut buf = Vec::with_capacity(8);
            BeI64::encode_into(&mut buf, &rng.random::<i64>()).unwrap();
            buf
        })
        .collect()
}

fn bench_encode_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("bei64_encode");
    for &n in &[1024usize, 65_536] {
        let mut rng = StdRng::seed_from_u64(42);
        let vals: Vec<i64> = (0..n).map(|_| rng.random::<i64>()).collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter_batched(
                || Vec::with_capacity(n * 8),
                |mut buf| {
                    for v in &vals {
                        BeI64::encode_into(&mut buf, v).unwrap();
                    }
                    black_box(buf)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_decode_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_decode");
    for &n in &[1024usize, 65_536] {
        let cells = make_i64_cells(n, 7);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("bei64", n), &n, |b, &_n| {
            b.iter(|| {
                let mut acc = 0i64;
                for cell in &cells {
                    acc = acc.wrapping_add(BeI64::decode(cell).unwrap());
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("bef64", n), &n, |b, &_n| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for cell in &cells {
                    // Same 8-byte frames, reinterpreted through the float codec.
                    acc += BeF64::decode(cell).unwrap();
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode_i64, bench_decode_cells);
criterion_main!(benches);
