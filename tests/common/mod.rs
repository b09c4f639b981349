// SPDX-License-Identifier: MPL-2.0
//! Shared test doubles for integration tests.

#![allow(dead_code)]

use reel_viewer::application::port::{PlayerBackend, PlayerInstance, PlayerOptions, SurfaceId};
use reel_viewer::domain::error::{DisposeError, PlayerInitError};
use reel_viewer::domain::media::{Collection, Item, ItemId, SourceUri};
use std::sync::{Arc, Mutex};

/// Something the recording backend observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Created {
        source: String,
        surface: SurfaceId,
        options: PlayerOptions,
    },
    Played(String),
    Paused(String),
    Released(String),
}

#[derive(Debug, Default)]
struct Journal {
    events: Vec<PlayerEvent>,
    live: usize,
    max_live: usize,
}

/// Read side of the backend journal, kept by the test after the backend
/// has been moved into a controller.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    journal: Arc<Mutex<Journal>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<PlayerEvent> {
        self.journal.lock().unwrap().events.clone()
    }

    pub fn live(&self) -> usize {
        self.journal.lock().unwrap().live
    }

    pub fn max_live(&self) -> usize {
        self.journal.lock().unwrap().max_live
    }

    pub fn created(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PlayerEvent::Created { source, .. } => Some(source),
                _ => None,
            })
            .collect()
    }

    pub fn released(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PlayerEvent::Released(source) => Some(source),
                _ => None,
            })
            .collect()
    }
}

/// Backend double that journals every create, play, pause and release.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    recorder: Recorder,
    /// Sources whose creation fails.
    pub rejected: Vec<String>,
    /// Sources whose release fails.
    pub sticky: Vec<String>,
}

impl RecordingBackend {
    pub fn new() -> (Self, Recorder) {
        let backend = Self::default();
        let recorder = backend.recorder.clone();
        (backend, recorder)
    }

    pub fn rejecting(mut self, source: &str) -> Self {
        self.rejected.push(source.to_string());
        self
    }

    pub fn sticky(mut self, source: &str) -> Self {
        self.sticky.push(source.to_string());
        self
    }
}

impl PlayerBackend for RecordingBackend {
    fn create(
        &mut self,
        surface: SurfaceId,
        source: &SourceUri,
        options: PlayerOptions,
    ) -> Result<Box<dyn PlayerInstance>, PlayerInitError> {
        if self.rejected.iter().any(|s| s == source.as_str()) {
            return Err(PlayerInitError::UnsupportedSource(source.to_string()));
        }
        let mut journal = self.recorder.journal.lock().unwrap();
        journal.live += 1;
        journal.max_live = journal.max_live.max(journal.live);
        journal.events.push(PlayerEvent::Created {
            source: source.to_string(),
            surface,
            options,
        });
        Ok(Box::new(RecordingPlayer {
            source: source.to_string(),
            paused: !options.autoplay,
            fail_release: self.sticky.iter().any(|s| s == source.as_str()),
            journal: Arc::clone(&self.recorder.journal),
        }))
    }
}

struct RecordingPlayer {
    source: String,
    paused: bool,
    fail_release: bool,
    journal: Arc<Mutex<Journal>>,
}

impl PlayerInstance for RecordingPlayer {
    fn play(&mut self) {
        self.paused = false;
        self.journal
            .lock()
            .unwrap()
            .events
            .push(PlayerEvent::Played(self.source.clone()));
    }

    fn pause(&mut self) {
        self.paused = true;
        self.journal
            .lock()
            .unwrap()
            .events
            .push(PlayerEvent::Paused(self.source.clone()));
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn release(self: Box<Self>) -> Result<(), DisposeError> {
        let mut journal = self.journal.lock().unwrap();
        journal.live -= 1;
        journal.events.push(PlayerEvent::Released(self.source.clone()));
        if self.fail_release {
            Err(DisposeError::new(format!("{} kept its listeners", self.source)))
        } else {
            Ok(())
        }
    }
}

/// Builds a collection with ids 1..=N over the given sources.
pub fn collection(sources: &[&str]) -> Collection {
    let items = sources
        .iter()
        .enumerate()
        .map(|(i, s)| Item::new(ItemId::new(i as u64 + 1), SourceUri::parse(s).unwrap()))
        .collect();
    Collection::new(items).unwrap()
}
