// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use randutil::{Generator, SystemEntropySource};

fn benchmark_int_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_range");
    let generator = Generator::new(SystemEntropySource {});

    // Power-of-two spans never reject; odd spans exercise the rejection zone.
    for (min, max) in [(0i64, 1i64), (0, 255), (1, 1_000), (i64::MIN, i64::MAX)].iter() {
        group.bench_with_input(format!("[{}, {}]", min, max), &(*min, *max), |b, &(min, max)| {
            b.iter(|| {
                generator
                    .int_range(black_box(min), black_box(max))
                    .expect("int_range failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_int_range);
criterion_main!(benches);
