//! Criterion benchmarks for the tiling engine.
//!
//! - recompute: `set_parameters` over every type with jittered parameters.
//! - fill: full placement walk for square boxes of growing size.
//! - colour lookups along a fill.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use isohedral::{all_types, IsohedralTiling, TilingTypeData, NUM_TYPES};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn jittered(data: &TilingTypeData, rng: &mut StdRng) -> Vec<f64> {
    data.default_params
        .iter()
        .map(|p| p + rng.gen_range(-0.05..0.05))
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    let mut tilings: Vec<_> = (0..NUM_TYPES)
        .map(|t| IsohedralTiling::new(t).unwrap())
        .collect();
    group.bench_function("set_parameters/all_types", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(42);
                all_types()
                    .iter()
                    .map(|d| jittered(d, &mut rng))
                    .collect::<Vec<_>>()
            },
            |params| {
                for (t, p) in tilings.iter_mut().zip(&params) {
                    t.set_parameters(p).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    // 3.3.3.3.3.3 with one aspect, and a twelve-aspect type
    for &ty in &[0usize, 68] {
        let tiling = IsohedralTiling::new(ty).unwrap();
        for &half in &[2.0f64, 8.0, 32.0] {
            let id = format!("type{ty}/half{half}");
            group.bench_with_input(BenchmarkId::new("walk", &id), &half, |b, &h| {
                b.iter(|| tiling.fill_box(-h, -h, h, h).iter().count())
            });
            group.bench_with_input(BenchmarkId::new("walk_and_colour", &id), &half, |b, &h| {
                b.iter(|| {
                    tiling
                        .fill_box(-h, -h, h, h)
                        .iter()
                        .map(|p| u32::from(tiling.colour(p.t1, p.t2, p.aspect)))
                        .sum::<u32>()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_recompute, bench_fill);
criterion_main!(benches);
