use std::hint::black_box;

use clash_engine::{detect_clashes, Slot};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// A week of department slots: `n` slots spread over 5 days, 8 rooms and 12
/// teachers, hourly from 08:00, with every seventh slot shifted half an hour
/// so a share of them collide.
fn department_week(n: usize) -> Vec<Slot> {
    (0..n)
        .map(|i| {
            let hour = 8 + (i / 40) % 10;
            let minute = if i % 7 == 0 { 30 } else { 0 };
            let start = format!("{:02}:{:02}", hour, minute);
            let end = format!("{:02}:{:02}", hour + 1, minute);
            Slot::new(i as i64)
                .day((i % 5) as u8)
                .room((i % 8) as i64)
                .teacher((i % 12) as i64)
                .times(&start, &end)
        })
        .collect()
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_clashes");
    for n in [50usize, 200, 800] {
        let slots = department_week(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &slots, |b, slots| {
            b.iter(|| detect_clashes(black_box(slots)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
