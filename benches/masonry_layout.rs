// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the masonry grid.
//!
//! Measures the performance of:
//! - Column assignment for a growing gallery
//! - Visible range estimation on scroll
//! - Page normalization of a full API response

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::gallery::normalize::normalize_page;
use iced_gallery::gallery::ImageRecord;
use iced_gallery::ui::masonry::{distribute, ScrollMetrics};
use serde_json::json;
use std::hint::black_box;

/// Records with varied aspect ratios, like a real event gallery.
fn records(count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|n| {
            let mut record = ImageRecord::new(format!("b{n}"), format!("https://img.test/{n}.jpg"));
            record.width = Some(800);
            record.height = Some(400 + (n as u32 * 137) % 800);
            record
        })
        .collect()
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry_layout");

    for count in [40, 400, 2000] {
        let records = records(count);
        group.bench_with_input(BenchmarkId::new("distribute", count), &records, |b, records| {
            b.iter(|| black_box(distribute(black_box(records), 2)));
        });
    }

    group.finish();
}

fn bench_visible_range(c: &mut Criterion) {
    let metrics = ScrollMetrics {
        offset_y: 12_000.0,
        viewport_height: 800.0,
        content_height: 80_000.0,
    };

    c.bench_function("visible_range", |b| {
        b.iter(|| black_box(metrics.visible_range(black_box(2000), 24)));
    });
}

fn bench_normalize_page(c: &mut Criterion) {
    let list: Vec<_> = (0..40)
        .map(|n| {
            json!({
                "id": n,
                "high_url": format!("https://img.test/full/{n}.jpg"),
                "med_url": format!("https://img.test/med/{n}.jpg"),
                "name": format!("Photo {n}"),
                "width": 1200,
                "height": "800",
            })
        })
        .collect();
    let body = json!({ "data": { "image_list": list } });

    c.bench_function("normalize_page", |b| {
        b.iter(|| black_box(normalize_page(black_box(&body), 1_700_000_000_000)));
    });
}

criterion_group!(
    benches,
    bench_distribute,
    bench_visible_range,
    bench_normalize_page
);
criterion_main!(benches);
