// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures the performance of:
//! - Catalog refresh over a large gallery
//! - Lightbox navigation (next/previous)
//! - A full filter pass including hide completion and resync

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::catalog::{self, ImageRecord};
use iced_gallery::gallery::entry::{EntryId, GalleryEntry};
use iced_gallery::gallery::filter::{FilterControl, FilterController, FilterTimings, ALL_FILTER};
use iced_gallery::gallery::lightbox::{Lightbox, LightboxTimings, RenderEnv};
use iced_gallery::gallery::transition::Step;
use std::hint::black_box;
use std::time::Instant;

const GALLERY_SIZE: u32 = 1_000;
static CATEGORIES: [&str; 4] = ["nature", "city", "people", "night"];

fn gallery() -> Vec<GalleryEntry> {
    (0..GALLERY_SIZE)
        .map(|i| {
            GalleryEntry::new(
                EntryId(i),
                format!("images/{i:04}.jpg"),
                format!("Image {i}"),
                "",
                CATEGORIES[i as usize % CATEGORIES.len()],
            )
        })
        .collect()
}

fn controls() -> Vec<FilterControl> {
    std::iter::once(FilterControl::new(ALL_FILTER, "All"))
        .chain(CATEGORIES.iter().map(|c| FilterControl::new(*c, *c)))
        .collect()
}

fn bench_catalog_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let entries = gallery();

    group.bench_function("catalog_refresh", |b| {
        b.iter(|| black_box(catalog::refresh(black_box(&entries))));
    });

    group.finish();
}

fn bench_lightbox_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let entries = gallery();
    let env = RenderEnv {
        entries: &entries,
        locale: None,
    };
    let mut lightbox = Lightbox::new(LightboxTimings::default());
    let _ = lightbox.open(&ImageRecord::from(&entries[0]), &env);

    group.bench_function("navigate_next", |b| {
        b.iter(|| black_box(lightbox.next(&env)));
    });

    group.bench_function("navigate_previous", |b| {
        b.iter(|| black_box(lightbox.previous(&env)));
    });

    group.finish();
}

fn bench_filter_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("filter_pass", |b| {
        let mut entries = gallery();
        let mut filter = FilterController::new(controls(), FilterTimings::default());
        let mut targets = CATEGORIES.iter().chain(std::iter::once(&ALL_FILTER)).cycle();

        b.iter(|| {
            let target = targets.next().copied().unwrap_or(ALL_FILTER);
            let effects = filter.apply(target, &mut entries, Instant::now());
            for deferred in effects.deferred {
                match deferred.step {
                    Step::HideEntry { pass, entry } => {
                        filter.complete_hide(pass, entry, &mut entries);
                    }
                    Step::ResyncCatalog { pass } => {
                        black_box(filter.resync(pass, &entries));
                    }
                    _ => {}
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_refresh,
    bench_lightbox_navigation,
    bench_filter_pass
);
criterion_main!(benches);
