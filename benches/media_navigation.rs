// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for reel navigation.
//!
//! Measures the performance of:
//! - Index arithmetic (next/previous with wraparound)
//! - Playlist parsing into a validated collection
//! - Full navigation workflow (release old player + create new one)

use criterion::{criterion_group, criterion_main, Criterion};
use reel_viewer::application::port::{PlayerBackend, PlayerInstance, PlayerOptions, SurfaceId};
use reel_viewer::application::query::Navigator;
use reel_viewer::config::Config;
use reel_viewer::domain::error::{DisposeError, PlayerInitError};
use reel_viewer::domain::gesture::GestureIntent;
use reel_viewer::domain::media::{Collection, Item, ItemId, SourceUri};
use reel_viewer::media::parse_playlist;
use reel_viewer::viewer::ViewerController;
use std::fmt::Write;
use std::hint::black_box;

const REEL_LEN: u64 = 200;

struct NullPlayer {
    paused: bool,
}

impl PlayerInstance for NullPlayer {
    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn release(self: Box<Self>) -> Result<(), DisposeError> {
        Ok(())
    }
}

/// Backend whose players do nothing, isolating the controller's own cost.
struct NullBackend;

impl PlayerBackend for NullBackend {
    fn create(
        &mut self,
        _surface: SurfaceId,
        _source: &SourceUri,
        _options: PlayerOptions,
    ) -> Result<Box<dyn PlayerInstance>, PlayerInitError> {
        Ok(Box::new(NullPlayer { paused: false }))
    }
}

fn reel() -> Collection {
    let items = (0..REEL_LEN)
        .map(|i| {
            Item::new(
                ItemId::new(i),
                SourceUri::parse(&format!("https://cdn.example.com/{i}.mp4")).unwrap(),
            )
        })
        .collect();
    Collection::new(items).unwrap()
}

/// Benchmark navigation index arithmetic.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let navigator = Navigator::new(reel()).unwrap();
    let last = navigator.len() - 1;

    group.bench_function("next_wraparound", |b| {
        b.iter(|| black_box(navigator.next(black_box(last))));
    });

    group.bench_function("prev_wraparound", |b| {
        b.iter(|| black_box(navigator.prev(black_box(0))));
    });

    group.bench_function("full_cycle", |b| {
        b.iter(|| {
            let mut index = 0;
            for _ in 0..navigator.len() {
                index = navigator.step(index, GestureIntent::Advance);
            }
            black_box(index)
        });
    });

    group.finish();
}

/// Benchmark playlist parsing and validation.
fn bench_parse_playlist(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    let mut content = String::new();
    for i in 0..REEL_LEN {
        let _ = write!(
            content,
            "[[items]]\nid = {i}\nsource = \"https://cdn.example.com/{i}.mp4\"\n\n"
        );
    }

    group.bench_function("parse_playlist", |b| {
        b.iter(|| black_box(parse_playlist(black_box(&content)).unwrap()));
    });

    group.finish();
}

/// Benchmark the full swipe workflow: release the old player, create the next.
fn bench_switch_player(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");

    let mut controller = ViewerController::new(reel(), NullBackend, &Config::default()).unwrap();
    controller.attach_surface(SurfaceId::new(1));
    controller.select_item(0).unwrap();

    group.bench_function("advance_and_switch", |b| {
        b.iter(|| black_box(controller.gesture(GestureIntent::Advance).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_navigate,
    bench_parse_playlist,
    bench_switch_player
);
criterion_main!(benches);
