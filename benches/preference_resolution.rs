// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use roamly::application::appearance::resolve_theme_mode;
use roamly::application::language::resolve_language;
use roamly::domain::language::Language;
use std::hint::black_box;

fn resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("preference_resolution");

    group.bench_function("language_from_storage", |b| {
        b.iter(|| resolve_language(black_box(Some("hi")), Vec::new, Language::DEFAULT));
    });

    group.bench_function("language_from_device", |b| {
        b.iter(|| {
            resolve_language(
                black_box(None),
                || vec!["de_DE.UTF-8".to_string(), "en-US".to_string()],
                Language::DEFAULT,
            )
        });
    });

    group.bench_function("theme_mode_invalid", |b| {
        b.iter(|| resolve_theme_mode(black_box(Some("  Sepia "))));
    });

    group.finish();
}

criterion_group!(benches, resolution_benchmark);
criterion_main!(benches);
