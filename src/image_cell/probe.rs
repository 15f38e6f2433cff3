//! Background image loading.
//!
//! A terminal cannot draw the photos, so "loading" an image means checking
//! that the reference resolves: a successful GET for URLs, an existing file
//! for local paths. Results flow back to the cells as [`ImageEvent`]s.

use crate::error::Result;
use crate::fetch::build_client;
use crossbeam_channel::{Receiver, Sender};
use reqwest::blocking::Client;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

const PROBE_WORKERS: usize = 4;

/// Outcome of loading one image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEvent {
    /// The image reference that was loaded.
    pub uri: String,
    /// Whether the load succeeded.
    pub ok: bool,
}

/// Pool of workers that load image references.
#[derive(Debug)]
pub struct ImageProber {
    requests: Sender<String>,
    events: Receiver<ImageEvent>,
    pending: HashSet<String>,
}

impl ImageProber {
    /// Spawn the worker pool.
    pub fn spawn(timeout: Duration) -> Result<Self> {
        let client = build_client(timeout)?;
        let (requests, work) = crossbeam_channel::unbounded::<String>();
        let (results, events) = crossbeam_channel::unbounded();

        for id in 0..PROBE_WORKERS {
            let work = work.clone();
            let results = results.clone();
            let client = client.clone();
            std::thread::Builder::new()
                .name(format!("image-probe-{}", id))
                .spawn(move || {
                    for uri in work.iter() {
                        let ok = probe(&client, &uri);
                        if results.send(ImageEvent { uri, ok }).is_err() {
                            break;
                        }
                    }
                })?;
        }

        Ok(Self {
            requests,
            events,
            pending: HashSet::new(),
        })
    }

    /// Queue a load unless the same reference is already in flight.
    pub fn request(&mut self, uri: &str) {
        if self.pending.contains(uri) {
            return;
        }
        if self.requests.send(uri.to_string()).is_ok() {
            self.pending.insert(uri.to_string());
        }
    }

    /// Take every finished load without blocking.
    pub fn drain(&mut self) -> Vec<ImageEvent> {
        let events: Vec<ImageEvent> = self.events.try_iter().collect();
        for event in &events {
            self.pending.remove(&event.uri);
        }
        events
    }
}

fn probe(client: &Client, uri: &str) -> bool {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        match client.get(uri).send() {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    tracing::debug!("Image {} answered {}", uri, response.status());
                }
                ok
            },
            Err(e) => {
                tracing::debug!("Image {} failed: {}", uri, e);
                false
            },
        }
    } else {
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        Path::new(path).is_file()
    }
}
