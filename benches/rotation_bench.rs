//! Criterion benchmarks for weekly allocation and full rotations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use duty_rotation::rotation::{RotationConfig, RotationRunner};
use duty_rotation::weekly::{AllocatorConfig, HighestSet, OverflowPolicy, WeeklyAllocator};
use duty_rotation::Capacities;

fn scenarios() -> Vec<(&'static str, Capacities)> {
    let mixed: [i64; 11] = [0, 1, 3, 4, 7, 8, 11, 5, 2, 9, 6];
    vec![
        ("uniform_11", Capacities::uniform(11).unwrap()),
        ("uniform_5", Capacities::uniform(5).unwrap()),
        ("mixed", Capacities::try_from(mixed).unwrap()),
    ]
}

fn bench_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_allocate");
    for (name, caps) in scenarios() {
        for policy in [OverflowPolicy::HighCapacity, OverflowPolicy::AllActive] {
            let config = AllocatorConfig::default().with_overflow(policy);
            group.bench_with_input(
                BenchmarkId::new(name, format!("{policy:?}")),
                &caps,
                |b, caps| {
                    b.iter(|| {
                        WeeklyAllocator::allocate_seeded(
                            black_box(caps),
                            &HighestSet::new(),
                            &config,
                            black_box(42),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_run");
    let config = RotationConfig::default().with_seed(42);
    for (name, caps) in scenarios() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &caps, |b, caps| {
            b.iter(|| RotationRunner::run(black_box(caps), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_week, bench_rotation);
criterion_main!(benches);
