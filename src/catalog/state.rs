//! Catalog screen state.
//!
//! All catalog data lives in one [`CatalogState`] record. Every change goes
//! through a transition method, and fetch results carry the generation of
//! the load that produced them so late answers from a superseded load are
//! dropped instead of overwriting newer data.

use super::{filter_by_brand, sort_by_stars, ImageRecord, Product, SortOrder};
use crate::error::Result;
use crate::image_cell::{ImageCell, ImageEvent};
use rand::seq::SliceRandom;
use rand::Rng;

/// A product together with the image cell drawn next to it.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    /// The product shown on this row.
    pub product: Product,
    /// The row's image.
    pub image: ImageCell,
}

impl AsRef<Product> for CatalogRow {
    fn as_ref(&self) -> &Product {
        &self.product
    }
}

/// State of the catalog screen.
#[derive(Debug, Default)]
pub struct CatalogState {
    full: Vec<CatalogRow>,
    filtered: Vec<CatalogRow>,
    images: Vec<ImageRecord>,
    query: String,
    sort: Option<SortOrder>,
    loading: bool,
    generation: u64,
    cursor: usize,
    scroll: usize,
}

impl CatalogState {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new load and return its generation.
    ///
    /// The full collection is cleared. Displayed rows stay on screen until
    /// the new products arrive, and the image pool is kept until replaced.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.full.clear();
        tracing::debug!("Catalog load generation {}", self.generation);
        self.generation
    }

    /// Apply the image collection. Returns false for stale results.
    pub fn receive_images(&mut self, generation: u64, result: Result<Vec<ImageRecord>>) -> bool {
        if !self.is_current(generation) {
            tracing::debug!("Dropping stale images from generation {}", generation);
            return false;
        }
        match result {
            Ok(images) => self.images = images,
            Err(e) => tracing::warn!("Keeping previous image pool: {}", e),
        }
        true
    }

    /// Apply the product collection. Returns false for stale results.
    ///
    /// The displayed rows become the whole collection and the query is
    /// cleared, so every load ends in the same state as a fresh mount. On
    /// failure the previous rows stay displayed. Each row gets an image drawn uniformly at random from the pool; the
    /// pick has nothing to do with which product the row shows.
    pub fn receive_products<R: Rng + ?Sized>(
        &mut self,
        generation: u64,
        result: Result<Vec<Product>>,
        rng: &mut R,
    ) -> bool {
        if !self.is_current(generation) {
            tracing::debug!("Dropping stale products from generation {}", generation);
            return false;
        }
        match result {
            Ok(products) => {
                self.full = products
                    .into_iter()
                    .map(|product| CatalogRow {
                        product,
                        image: ImageCell::new(pick_image(&self.images, rng)),
                    })
                    .collect();
                self.filtered = self.full.clone();
                self.query.clear();
                self.sort = None;
                self.cursor = 0;
                self.scroll = 0;
            },
            Err(e) => tracing::warn!("Keeping previously displayed rows: {}", e),
        }
        true
    }

    /// Finish a load. Only the latest generation clears the loading flag.
    pub fn finish_load(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Drop all data and view state, as when the screen is mounted anew.
    ///
    /// The generation keeps counting so results from an earlier mount are
    /// still recognised as stale.
    pub fn clear(&mut self) {
        self.full.clear();
        self.filtered.clear();
        self.images.clear();
        self.query.clear();
        self.sort = None;
        self.loading = false;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Replace the search query and recompute the filtered view.
    ///
    /// Filtering always starts from the full collection, so any previous
    /// sort order is discarded.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.filtered = filter_by_brand(&self.full, &self.query);
        self.sort = None;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Sort the filtered view by rating text.
    pub fn sort(&mut self, order: SortOrder) {
        let was_loading = std::mem::replace(&mut self.loading, true);
        sort_by_stars(&mut self.filtered, order);
        self.sort = Some(order);
        self.cursor = 0;
        self.scroll = 0;
        self.loading = was_loading;
    }

    /// Apply an image load result to every row showing that image.
    pub fn apply_image(&mut self, event: &ImageEvent) {
        for row in self.full.iter_mut().chain(self.filtered.iter_mut()) {
            row.image.apply(event);
        }
    }

    /// Image references of visible rows that still need loading.
    ///
    /// The returned rows are marked as requested.
    pub fn take_image_requests(&mut self, viewport_rows: usize) -> Vec<String> {
        let mut uris = Vec::new();
        for row in self
            .filtered
            .iter_mut()
            .skip(self.scroll)
            .take(viewport_rows)
        {
            if row.image.needs_load() {
                row.image.mark_requested();
                if let Some(uri) = row.image.source() {
                    uris.push(uri.to_string());
                }
            }
        }
        uris
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Rows currently displayed.
    pub fn rows(&self) -> &[CatalogRow] {
        &self.filtered
    }

    /// Products currently displayed, in display order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.filtered.iter().map(|row| &row.product)
    }

    /// Number of products in the full collection.
    pub fn total(&self) -> usize {
        self.full.len()
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sort order applied since the last filter, if any.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Whether a load is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Latest load generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    /// Go to the first row.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    /// Go to the last row.
    pub fn goto_last(&mut self) {
        self.cursor = self.filtered.len().saturating_sub(1);
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current scroll offset, in rows.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_rows {
            self.scroll = self.cursor.saturating_sub(viewport_rows - 1);
        }
    }
}

fn pick_image<R: Rng + ?Sized>(images: &[ImageRecord], rng: &mut R) -> Option<String> {
    images.choose(rng).map(|record| record.image.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RamenError;
    use crate::image_cell::ImagePhase;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn product(brand: &str, stars: &str) -> Product {
        Product::new(brand, format!("{} noodles", brand), "Japan", stars)
    }

    fn brands(state: &CatalogState) -> Vec<String> {
        state.products().map(|p| p.brand.clone()).collect()
    }

    fn stars(state: &CatalogState) -> Vec<String> {
        state.products().map(|p| p.stars.clone()).collect()
    }

    fn load(state: &mut CatalogState, images: Vec<ImageRecord>, products: Vec<Product>) -> u64 {
        let generation = state.begin_load();
        assert!(state.receive_images(generation, Ok(images)));
        assert!(state.receive_products(generation, Ok(products), &mut rng()));
        assert!(state.finish_load(generation));
        generation
    }

    fn io_error() -> RamenError {
        RamenError::Io(std::io::Error::new(std::io::ErrorKind::Other, "offline"))
    }

    #[test]
    fn test_search_sort_reset_scenario() {
        let mut state = CatalogState::new();
        load(
            &mut state,
            vec![ImageRecord::new("a.png")],
            vec![product("Nissin", "5"), product("Maruchan", "2")],
        );

        state.set_query("mar");
        assert_eq!(brands(&state), vec!["Maruchan"]);

        state.sort(SortOrder::Ascending);
        assert_eq!(brands(&state), vec!["Maruchan"]);

        state.set_query("");
        assert_eq!(brands(&state), vec!["Nissin", "Maruchan"]);
        assert_eq!(state.sort_order(), None);
    }

    #[test]
    fn test_sort_uses_text_order() {
        let mut state = CatalogState::new();
        load(
            &mut state,
            Vec::new(),
            vec![product("A", "2"), product("B", "NAN"), product("C", "10")],
        );

        state.sort(SortOrder::Ascending);
        assert_eq!(stars(&state), vec!["10", "2", "NAN"]);
        state.sort(SortOrder::Descending);
        assert_eq!(stars(&state), vec!["NAN", "2", "10"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_sort_applies_to_filtered_view_only() {
        let mut state = CatalogState::new();
        load(
            &mut state,
            Vec::new(),
            vec![product("Nissin", "5"), product("Nongshim", "1"), product("Mama", "3")],
        );

        state.set_query("n");
        state.sort(SortOrder::Ascending);
        assert_eq!(brands(&state), vec!["Nongshim", "Nissin"]);
        assert_eq!(state.total(), 3);
    }

    #[test]
    fn test_refresh_matches_fresh_mount() {
        let images = vec![ImageRecord::new("a.png")];
        let first = vec![product("Old", "1"), product("Stale", "2")];
        let second = vec![product("Nissin", "5"), product("Maruchan", "2")];

        let mut refreshed = CatalogState::new();
        load(&mut refreshed, images.clone(), first);
        load(&mut refreshed, images.clone(), second.clone());

        let mut fresh = CatalogState::new();
        load(&mut fresh, images, second);

        assert_eq!(brands(&refreshed), brands(&fresh));
        assert_eq!(refreshed.total(), 2);
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut state = CatalogState::new();
        let old = state.begin_load();
        let new = state.begin_load();

        assert!(state.receive_images(new, Ok(vec![ImageRecord::new("new.png")])));
        assert!(state.receive_products(new, Ok(vec![product("Nissin", "5")]), &mut rng()));

        assert!(!state.receive_products(old, Ok(vec![product("Old", "1")]), &mut rng()));
        assert!(!state.finish_load(old));
        assert!(state.is_loading());

        assert!(state.finish_load(new));
        assert!(!state.is_loading());
        assert_eq!(brands(&state), vec!["Nissin"]);
    }

    #[test]
    fn test_refresh_with_query_matches_fresh_mount() {
        let images = vec![ImageRecord::new("a.png")];
        let products = vec![product("Nissin", "5"), product("Maruchan", "2")];

        let mut refreshed = CatalogState::new();
        load(&mut refreshed, images.clone(), products.clone());
        refreshed.set_query("mar");
        refreshed.sort(SortOrder::Descending);
        load(&mut refreshed, images.clone(), products.clone());

        let mut fresh = CatalogState::new();
        load(&mut fresh, images, products);

        assert_eq!(brands(&refreshed), brands(&fresh));
        assert_eq!(brands(&refreshed), vec!["Nissin", "Maruchan"]);
        assert_eq!(refreshed.query(), fresh.query());
        assert_eq!(refreshed.sort_order(), None);
    }

    #[test]
    fn test_rows_stay_visible_until_products_arrive() {
        let mut state = CatalogState::new();
        load(&mut state, Vec::new(), vec![product("Old", "1"), product("Stale", "2")]);
        state.goto_last();

        let generation = state.begin_load();
        assert!(state.is_loading());
        assert_eq!(brands(&state), vec!["Old", "Stale"]);
        assert_eq!(state.total(), 0);
        assert_eq!(state.cursor(), 1);

        assert!(state.receive_images(generation, Ok(Vec::new())));
        assert_eq!(brands(&state), vec!["Old", "Stale"]);

        assert!(state.receive_products(generation, Ok(vec![product("Nissin", "5")]), &mut rng()));
        assert_eq!(brands(&state), vec!["Nissin"]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_failed_refresh_keeps_prior_rows_and_clears_loading() {
        let mut state = CatalogState::new();
        load(&mut state, Vec::new(), vec![product("Nissin", "5")]);

        let generation = state.begin_load();
        assert!(state.is_loading());
        assert!(state.receive_images(generation, Err(io_error())));
        assert!(state.receive_products(generation, Err(io_error()), &mut rng()));
        assert!(state.finish_load(generation));

        assert!(!state.is_loading());
        assert_eq!(brands(&state), vec!["Nissin"]);
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn test_failed_first_load_leaves_catalog_empty() {
        let mut state = CatalogState::new();
        let generation = state.begin_load();
        assert!(state.receive_products(generation, Err(io_error()), &mut rng()));
        assert!(state.finish_load(generation));
        assert!(state.rows().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_clear_resets_view_but_not_generation() {
        let mut state = CatalogState::new();
        let generation = load(&mut state, vec![ImageRecord::new("a.png")], vec![product("Nissin", "5")]);
        state.set_query("nis");

        state.clear();
        assert!(state.rows().is_empty());
        assert_eq!(state.total(), 0);
        assert_eq!(state.query(), "");
        assert_eq!(state.generation(), generation);

        let next = state.begin_load();
        assert!(!state.receive_products(generation, Ok(vec![product("Old", "1")]), &mut rng()));
        assert!(state.receive_products(next, Ok(vec![product("Maruchan", "2")]), &mut rng()));
        assert_eq!(state.rows()[0].image.phase(), ImagePhase::Error);
    }

    #[test]
    fn test_empty_image_pool_yields_error_cells() {
        let mut state = CatalogState::new();
        load(&mut state, Vec::new(), vec![product("Nissin", "5")]);
        assert_eq!(state.rows()[0].image.phase(), ImagePhase::Error);
        assert!(state.take_image_requests(10).is_empty());
    }

    #[test]
    fn test_row_images_come_from_pool() {
        let pool = vec![ImageRecord::new("a.png"), ImageRecord::new("b.png")];
        let mut state = CatalogState::new();
        load(
            &mut state,
            pool.clone(),
            (0..20).map(|i| product(&format!("Brand{}", i), "3")).collect(),
        );

        for row in state.rows() {
            let source = row.image.source().unwrap();
            assert!(pool.iter().any(|r| r.image == source));
            assert_eq!(row.image.phase(), ImagePhase::Placeholder);
        }
    }

    #[test]
    fn test_image_requests_cover_visible_rows_once() {
        let mut state = CatalogState::new();
        load(
            &mut state,
            vec![ImageRecord::new("a.png")],
            (0..10).map(|i| product(&format!("Brand{}", i), "3")).collect(),
        );

        let first = state.take_image_requests(3);
        assert_eq!(first.len(), 3);
        assert!(state.take_image_requests(3).is_empty());

        state.apply_image(&ImageEvent {
            uri: "a.png".to_string(),
            ok: true,
        });
        assert!(state
            .rows()
            .iter()
            .all(|row| row.image.phase() == ImagePhase::Loaded));

        state.set_query("brand");
        assert_eq!(state.rows()[0].image.phase(), ImagePhase::Loaded);
    }

    #[test]
    fn test_cursor_and_scroll() {
        let mut state = CatalogState::new();
        load(
            &mut state,
            Vec::new(),
            (0..10).map(|i| product(&format!("Brand{}", i), "3")).collect(),
        );

        state.goto_last();
        assert_eq!(state.cursor(), 9);
        state.adjust_scroll(4);
        assert_eq!(state.scroll(), 6);
        state.cursor_down();
        assert_eq!(state.cursor(), 9);

        state.goto_first();
        state.adjust_scroll(4);
        assert_eq!(state.scroll(), 0);
        state.cursor_up();
        assert_eq!(state.cursor(), 0);
    }
}
