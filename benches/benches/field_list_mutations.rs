// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_field_list::{FieldList, FieldListConfig};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn populated(n: usize) -> FieldList<u64> {
    FieldList::with_initial(
        FieldListConfig::new("rows").with_initial_count(n),
        |position| position as u64,
    )
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for &n in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("append_n{}", n), |b| {
            b.iter_batched(
                || FieldList::<u64>::new(FieldListConfig::new("rows")),
                |mut list| {
                    for i in 0..n {
                        list.add_with(i as u64);
                    }
                    black_box(list.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &n in &[100usize, 1_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("front_drain_n{}", n), |b| {
            b.iter_batched(
                || populated(n),
                |mut list| {
                    while !list.is_empty() {
                        list.remove(0);
                    }
                    black_box(list.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move");
    for &n in &[100usize, 1_000] {
        group.bench_function(format!("random_moves_n{}", n), |b| {
            b.iter_batched(
                || (populated(n), Rng::new(0xCAFE_F00D_DEAD_BEEF)),
                |(mut list, mut rng)| {
                    for _ in 0..256 {
                        let from = rng.below(n);
                        let to = rng.below(n);
                        list.move_field(from, to);
                    }
                    black_box(list.commit().moved.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");
    let n = 1_000;
    group.bench_function("after_mixed_edits_n1000", |b| {
        b.iter_batched(
            || {
                let mut list = populated(n);
                let _ = list.commit();
                list
            },
            |mut list| {
                list.remove(n / 2);
                list.move_field(0, n / 3);
                list.add();
                black_box(list.commit());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_remove, bench_move, bench_commit);
criterion_main!(benches);
