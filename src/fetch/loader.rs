//! Background loading of the catalog collections.
//!
//! Every load is tagged with a generation number. Starting a new load
//! supersedes all older ones: an outdated worker stops before its second
//! request, and anything it already sent is dropped by the catalog state.

use super::CatalogFetcher;
use crate::catalog::{ImageRecord, Product};
use crate::error::{RamenError, Result};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Progress of a load, sent from the worker to the UI thread.
#[derive(Debug)]
pub enum FetchEvent {
    /// The image collection arrived (or failed).
    Images {
        /// Load generation.
        generation: u64,
        /// Fetch outcome.
        result: Result<Vec<ImageRecord>>,
    },
    /// The product collection arrived (or failed).
    Products {
        /// Load generation.
        generation: u64,
        /// Fetch outcome.
        result: Result<Vec<Product>>,
    },
    /// The worker is done with this generation.
    Finished {
        /// Load generation.
        generation: u64,
    },
}

impl FetchEvent {
    /// Generation this event belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            FetchEvent::Images { generation, .. }
            | FetchEvent::Products { generation, .. }
            | FetchEvent::Finished { generation } => *generation,
        }
    }
}

/// Runs catalog loads on worker threads.
pub struct Loader {
    fetcher: Arc<dyn CatalogFetcher>,
    latest: Arc<AtomicU64>,
    tx: Sender<FetchEvent>,
    rx: Receiver<FetchEvent>,
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("latest", &self.latest.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl Loader {
    /// Create a loader around a fetcher.
    pub fn new(fetcher: Arc<dyn CatalogFetcher>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            fetcher,
            latest: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        }
    }

    /// Start loading both collections for `generation`.
    pub fn start(&self, generation: u64) -> Result<()> {
        self.latest.store(generation, Ordering::SeqCst);

        let fetcher = Arc::clone(&self.fetcher);
        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();

        std::thread::Builder::new()
            .name(format!("catalog-fetch-{}", generation))
            .spawn(move || run_load(fetcher.as_ref(), &latest, &tx, generation))?;

        tracing::debug!("Started load generation {}", generation);
        Ok(())
    }

    /// Take every event that has arrived so far without blocking.
    pub fn drain(&self) -> Vec<FetchEvent> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<FetchEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(RamenError::Disconnected("catalog loader".to_string()))
            },
        }
    }
}

fn run_load(
    fetcher: &dyn CatalogFetcher,
    latest: &AtomicU64,
    tx: &Sender<FetchEvent>,
    generation: u64,
) {
    let superseded = || latest.load(Ordering::SeqCst) != generation;

    let images = fetcher.fetch_images();
    if let Err(ref e) = images {
        tracing::warn!("Image fetch failed (generation {}): {}", generation, e);
    }
    // A closed channel means the UI is gone; nothing left to do.
    if tx.send(FetchEvent::Images { generation, result: images }).is_err() {
        return;
    }

    if superseded() {
        tracing::debug!("Load generation {} superseded after images", generation);
        return;
    }

    let products = fetcher.fetch_products();
    if let Err(ref e) = products {
        tracing::warn!("Product fetch failed (generation {}): {}", generation, e);
    }
    if tx
        .send(FetchEvent::Products {
            generation,
            result: products,
        })
        .is_err()
    {
        return;
    }

    let _ = tx.send(FetchEvent::Finished { generation });
}
