//! Application state and logic.

use std::sync::Arc;

use crate::catalog::{CatalogState, SearchInput, SortOrder};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::fetch::{CatalogFetcher, FetchEvent, Loader};
use crate::image_cell::ImageProber;
use crate::shared::Theme;
use crate::sort_sheet::SortSheetState;

/// The screen currently on top of the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome screen.
    Landing,
    /// Searchable product list.
    Catalog,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Visible screen.
    pub screen: Screen,
    /// Catalog data and view state.
    pub catalog: CatalogState,
    /// Catalog search box.
    pub search: SearchInput,
    /// Sort action sheet.
    pub sort_sheet: SortSheetState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Number of cards that fit in the list, updated on every draw.
    pub viewport_rows: usize,
    loader: Loader,
    prober: Option<ImageProber>,
}

impl App {
    /// Create a new application instance on the landing screen.
    pub fn new(config: &CatalogConfig, fetcher: Arc<dyn CatalogFetcher>) -> Result<Self> {
        let prober = if config.probe_images {
            Some(ImageProber::spawn(config.timeout)?)
        } else {
            None
        };

        Ok(Self {
            screen: Screen::Landing,
            catalog: CatalogState::new(),
            search: SearchInput::new(),
            sort_sheet: SortSheetState::new(),
            status: "Welcome".to_string(),
            theme: Theme::GruvboxDark,
            viewport_rows: 0,
            loader: Loader::new(fetcher),
            prober,
        })
    }

    /// Navigate from the landing screen to a freshly mounted catalog.
    pub fn enter_catalog(&mut self) {
        self.screen = Screen::Catalog;
        self.search.clear();
        self.search.blur();
        self.sort_sheet.close();
        self.catalog.clear();
        self.start_load();
    }

    /// Pop the catalog off the navigation stack.
    pub fn back(&mut self) {
        self.screen = Screen::Landing;
        self.sort_sheet.close();
        self.search.blur();
        self.status = "Welcome".to_string();
    }

    /// Re-run the full load sequence (pull-to-refresh).
    ///
    /// The reloaded list is unfiltered, so the search box is emptied too.
    pub fn refresh(&mut self) {
        self.search.clear();
        self.search.blur();
        self.start_load();
    }

    fn start_load(&mut self) {
        let generation = self.catalog.begin_load();
        self.status = "Fetching items...".to_string();
        if let Err(e) = self.loader.start(generation) {
            tracing::error!("Could not start load: {}", e);
            self.catalog.finish_load(generation);
            self.status = "No items".to_string();
        }
    }

    /// Re-filter after the search text changed.
    pub fn search_changed(&mut self) {
        self.catalog.set_query(self.search.text());
        self.status = self.count_status();
    }

    /// Sort the visible rows by rating.
    pub fn apply_sort(&mut self, order: SortOrder) {
        self.catalog.sort(order);
        self.status = format!("{} ({} items)", order.label(), self.catalog.rows().len());
        tracing::debug!("Sorted {} rows {}", self.catalog.rows().len(), order.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Apply background results and queue image loads. Called every tick.
    pub fn tick(&mut self) {
        for event in self.loader.drain() {
            self.handle_fetch_event(event);
        }

        let Some(prober) = self.prober.as_mut() else {
            return;
        };
        for event in prober.drain() {
            self.catalog.apply_image(&event);
        }
        if self.screen == Screen::Catalog {
            for uri in self.catalog.take_image_requests(self.viewport_rows) {
                prober.request(&uri);
            }
        }
    }

    fn handle_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Images { generation, result } => {
                self.catalog.receive_images(generation, result);
            },
            FetchEvent::Products { generation, result } => {
                self.catalog
                    .receive_products(generation, result, &mut rand::thread_rng());
            },
            FetchEvent::Finished { generation } => {
                if self.catalog.finish_load(generation) {
                    self.status = self.count_status();
                    tracing::info!("Catalog ready: {} products", self.catalog.total());
                }
            },
        }
    }

    fn count_status(&self) -> String {
        let shown = self.catalog.rows().len();
        let total = self.catalog.total();
        if self.catalog.query().is_empty() {
            format!("{} items", total)
        } else {
            format!("{} of {} items match '{}'", shown, total, self.catalog.query())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageRecord, Product};
    use std::time::{Duration, Instant};

    struct FixedFetcher;

    impl CatalogFetcher for FixedFetcher {
        fn fetch_images(&self) -> Result<Vec<ImageRecord>> {
            Ok(vec![ImageRecord::new("bowl.png")])
        }

        fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(vec![
                Product::new("Nissin", "Cup Noodles", "Japan", "5"),
                Product::new("Maruchan", "Ramen Chicken", "USA", "2"),
            ])
        }
    }

    fn app() -> App {
        let config = CatalogConfig {
            probe_images: false,
            ..CatalogConfig::default()
        };
        App::new(&config, Arc::new(FixedFetcher)).unwrap()
    }

    fn wait_loaded(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.catalog.is_loading() && Instant::now() < deadline {
            app.tick();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.catalog.is_loading(), "load did not finish");
    }

    #[test]
    fn test_enter_catalog_loads_products() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Landing);

        app.enter_catalog();
        assert_eq!(app.screen, Screen::Catalog);
        assert!(app.catalog.is_loading());

        wait_loaded(&mut app);
        assert_eq!(app.catalog.rows().len(), 2);
        assert_eq!(app.status, "2 items");
    }

    #[test]
    fn test_search_and_sort_flow() {
        let mut app = app();
        app.enter_catalog();
        wait_loaded(&mut app);

        app.search.focus();
        for c in "MAR".chars() {
            app.search.input(c);
            app.search_changed();
        }
        assert_eq!(app.catalog.rows().len(), 1);
        assert_eq!(app.status, "1 of 2 items match 'MAR'");

        app.search.clear();
        app.search_changed();
        app.apply_sort(SortOrder::Ascending);
        let stars: Vec<&str> = app.catalog.products().map(|p| p.stars.as_str()).collect();
        assert_eq!(stars, vec!["2", "5"]);
    }

    #[test]
    fn test_back_and_reenter_remounts() {
        let mut app = app();
        app.enter_catalog();
        wait_loaded(&mut app);
        app.search.input('x');
        app.search_changed();
        assert!(app.catalog.rows().is_empty());

        app.back();
        assert_eq!(app.screen, Screen::Landing);

        app.enter_catalog();
        assert_eq!(app.search.text(), "");
        assert!(app.catalog.rows().is_empty());
        wait_loaded(&mut app);
        assert_eq!(app.catalog.rows().len(), 2);
    }

    #[test]
    fn test_refresh_clears_search_and_shows_all_rows() {
        let mut app = app();
        app.enter_catalog();
        wait_loaded(&mut app);

        app.search.focus();
        for c in "mar".chars() {
            app.search.input(c);
            app.search_changed();
        }
        assert_eq!(app.catalog.rows().len(), 1);

        app.refresh();
        assert_eq!(app.search.text(), "");
        assert!(!app.search.is_focused());
        assert_eq!(app.catalog.rows().len(), 1);

        wait_loaded(&mut app);
        assert_eq!(app.catalog.rows().len(), 2);
        assert_eq!(app.catalog.query(), "");
        assert_eq!(app.status, "2 items");
    }

    #[test]
    fn test_refresh_during_load_keeps_latest() {
        let mut app = app();
        app.enter_catalog();
        app.refresh();
        wait_loaded(&mut app);
        assert_eq!(app.catalog.generation(), 2);
        assert_eq!(app.catalog.rows().len(), 2);
    }
}
