// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog selection and lightbox navigation.
//!
//! Measures the per-frame cost of the queries the UI runs most often:
//! category filtering, the randomized picks, and wraparound navigation
//! over a filtered list.

use coast_gallery::catalog::model::{normalize, Photo, RawCatalog, RawPhoto};
use coast_gallery::catalog::selection::{self, SelectionEngine};
use coast_gallery::catalog::PhotoId;
use coast_gallery::gallery::{CategoryFilter, GalleryController, NavigationDirection};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["events", "programs", "campus", "marine-life"];

/// Builds a synthetic catalog in the service's wire shape.
fn synthetic_photos(count: usize) -> Vec<Photo> {
    let raw = RawCatalog {
        photos: (0..count)
            .map(|i| RawPhoto {
                id: format!("photo-{i}"),
                url: format!("/photos/photo-{i}.jpg"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                description: format!("Synthetic photo {i}"),
                width: 800 + (i as u32 % 5) * 200,
                height: 600 + (i as u32 % 3) * 300,
            })
            .collect(),
        categories: CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
    };
    normalize(raw, "https://img.example").photos
}

fn bench_category_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let photos = synthetic_photos(500);

    group.bench_function("photos_by_category", |b| {
        b.iter(|| {
            black_box(selection::photos_by_category(
                black_box(&photos),
                "events",
                None,
            ));
        });
    });

    group.bench_function("photo_by_id", |b| {
        let id = PhotoId::new("photo-400");
        b.iter(|| {
            black_box(selection::photo_by_id(black_box(&photos), &id));
        });
    });

    group.finish();
}

fn bench_randomized_picks(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let photos = synthetic_photos(500);
    let mut engine = SelectionEngine::with_rng(StdRng::seed_from_u64(97));

    group.bench_function("hero_photo", |b| {
        b.iter(|| {
            black_box(engine.hero_photo(black_box(&photos), Some("events")));
        });
    });

    group.bench_function("card_photos_6", |b| {
        b.iter(|| {
            black_box(engine.card_photos(black_box(&photos), "programs", 6));
        });
    });

    group.finish();
}

fn bench_lightbox_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");
    let photos = synthetic_photos(500);

    let mut controller = GalleryController::new();
    controller.set_filter(CategoryFilter::parse("events"), &photos);
    let first = controller.filtered_photos(&photos)[0].id.clone();
    controller.open_at(&photos, &first);

    group.bench_function("navigate_next", |b| {
        b.iter(|| {
            black_box(controller.navigate(NavigationDirection::Next, black_box(&photos)));
        });
    });

    group.bench_function("filtered_photos", |b| {
        b.iter(|| {
            black_box(controller.filtered_photos(black_box(&photos)));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_category_queries,
    bench_randomized_picks,
    bench_lightbox_navigation
);
criterion_main!(benches);
