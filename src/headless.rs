//! One-shot catalog loading without a terminal UI.
//!
//! Runs exactly the same load/filter/sort transitions the catalog screen
//! uses, then hands back the resulting state for printing.

use crate::catalog::{CatalogState, SortOrder};
use crate::error::Result;
use crate::fetch::{CatalogFetcher, FetchEvent, Loader};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Options for a one-shot listing.
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Brand search query.
    pub query: String,
    /// Optional rating sort applied after filtering.
    pub sort: Option<SortOrder>,
}

/// Load the catalog once and apply the listing options.
pub fn load_listing(fetcher: Arc<dyn CatalogFetcher>, options: &ListingOptions) -> Result<CatalogState> {
    let loader = Loader::new(fetcher);
    let mut state = CatalogState::new();
    let generation = state.begin_load();
    loader.start(generation)?;

    let mut rng = rand::thread_rng();
    while state.is_loading() {
        let Some(event) = loader.recv_timeout(POLL_INTERVAL)? else {
            continue;
        };
        match event {
            FetchEvent::Images { generation, result } => {
                state.receive_images(generation, result);
            },
            FetchEvent::Products { generation, result } => {
                state.receive_products(generation, result, &mut rng);
            },
            FetchEvent::Finished { generation } => {
                state.finish_load(generation);
            },
        }
    }

    state.set_query(&options.query);
    if let Some(order) = options.sort {
        state.sort(order);
    }
    Ok(state)
}
