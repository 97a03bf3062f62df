/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fastlog::{SampleSuite, fast_log, fast_log2};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::log2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log2f(i as f32));
            }
        })
    });

    c.bench_function("system: log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::log2(i as f32));
            }
        })
    });

    c.bench_function("pxfm: f_log2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_log2f(i as f32));
            }
        })
    });

    c.bench_function("fastlog: log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(fast_log2(i as f32));
            }
        })
    });

    c.bench_function("system: ln", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::ln(i as f32));
            }
        })
    });

    c.bench_function("fastlog: ln", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(fast_log(i as f32));
            }
        })
    });

    let suite = SampleSuite::canonical();

    c.bench_function("system: log2 suite", |b| {
        b.iter(|| {
            for sample in suite {
                black_box(sample.x().log2());
            }
        })
    });

    c.bench_function("fastlog: log2 suite", |b| {
        b.iter(|| {
            for sample in suite {
                black_box(fast_log2(sample.x()));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
