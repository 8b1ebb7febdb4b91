// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the scroll-driven visibility machinery.
//!
//! Measures:
//! - A single observer sweep over the fully registered page
//! - A simulated full-page scroll (sweep + fallback scan per step)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_vitrine::content;
use iced_vitrine::engine::reveal::RevealAnimator;
use iced_vitrine::engine::visibility::{Observer, ObserverOptions};
use iced_vitrine::engine::PageViewport;
use std::hint::black_box;
use std::time::Instant;

const WINDOW_HEIGHT: f32 = 800.0;

fn registered_observer() -> Observer {
    let mut observer = Observer::new(ObserverOptions::default());
    for group in content::REVEAL_GROUPS {
        for (id, bounds) in content::group_elements(group.group, group.count) {
            observer.observe(id, bounds);
        }
    }
    observer
}

fn bench_single_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");

    group.bench_function("sweep_full_page", |b| {
        let viewport = PageViewport::new(content::page_height() / 2.0, WINDOW_HEIGHT);
        b.iter(|| {
            let mut observer = registered_observer();
            black_box(observer.sweep(viewport));
        });
    });

    group.finish();
}

fn bench_scroll_through_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");

    group.bench_function("scroll_through_page", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut reveal = RevealAnimator::new();
            for table_row in content::REVEAL_GROUPS {
                reveal.register(
                    &content::group_elements(table_row.group, table_row.count),
                    table_row.kind,
                    table_row.stagger,
                );
            }
            let mut scroll_top = 0.0;
            while scroll_top <= content::page_height() {
                let viewport = PageViewport::new(scroll_top, WINDOW_HEIGHT);
                reveal.sweep(viewport, now);
                reveal.scan(viewport, now);
                scroll_top += WINDOW_HEIGHT / 4.0;
            }
            black_box(&reveal);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_sweep, bench_scroll_through_page);
criterion_main!(benches);
