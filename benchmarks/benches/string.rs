// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use randutil::{ALPHANUMERIC, ASCII, Generator, SystemEntropySource};

fn benchmark_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");
    let generator = Generator::new(SystemEntropySource {});

    for len in [16usize, 64, 256, 1024].iter() {
        group.throughput(Throughput::Elements(*len as u64));

        group.bench_with_input(format!("{} chars alphanumeric", len), len, |b, &len| {
            b.iter(|| {
                generator
                    .string(black_box(len), black_box(ALPHANUMERIC))
                    .expect("string failed");
            });
        });

        group.bench_with_input(format!("{} chars ascii", len), len, |b, &len| {
            b.iter(|| {
                generator
                    .string(black_box(len), black_box(ASCII))
                    .expect("string failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_string);
criterion_main!(benches);
