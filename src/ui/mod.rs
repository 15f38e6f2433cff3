//! User interface rendering.

use crate::app::{App, Screen};
use crate::catalog::ui::{draw_header, draw_list};
use crate::landing::ui::draw_landing;
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use crate::sort_sheet::ui::draw_sort_sheet;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    match app.screen {
        Screen::Landing => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(f.area());

            draw_landing(f, chunks[0], &colors);
            draw_keymap(f, chunks[1], app, &colors);
        },
        Screen::Catalog => {
            // Header, list, status bar and key map bar
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(f.area());

            draw_header(f, chunks[0], &app.search, &colors);
            app.viewport_rows = draw_list(f, chunks[1], &mut app.catalog, &colors);
            draw_status(f, chunks[2], &app.status, &colors);
            draw_keymap(f, chunks[3], app, &colors);

            draw_sort_sheet(f, &app.sort_sheet, chunks[1], &colors);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageRecord, Product};
    use crate::config::CatalogConfig;
    use crate::fetch::CatalogFetcher;
    use crate::Result;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    struct NoFetch;

    impl CatalogFetcher for NoFetch {
        fn fetch_images(&self) -> Result<Vec<ImageRecord>> {
            Ok(Vec::new())
        }

        fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(Vec::new())
        }
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        let config = CatalogConfig {
            probe_images: false,
            ..CatalogConfig::default()
        };
        App::new(&config, Arc::new(NoFetch)).unwrap()
    }

    #[test]
    fn test_landing_screen_shows_welcome() {
        let mut app = app();
        let text = screen_text(&mut app);
        assert!(text.contains("Welcome to,"));
        assert!(text.contains("RAMEN RESTAURANT"));
        assert!(text.contains("Enter"));
    }

    #[test]
    fn test_sort_sheet_lists_both_actions() {
        let mut app = app();
        app.screen = Screen::Catalog;
        app.sort_sheet.open();
        let text = screen_text(&mut app);
        assert!(text.contains("Sort by rating Ascending"));
        assert!(text.contains("Sort by rating Descending"));
        assert!(text.contains("Search"));
    }
}
