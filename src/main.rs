//! Ramen - a terminal-based noodle catalog browser.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ramen::app::{App, Screen};
use ramen::catalog::ui::{empty_caption, format_row};
use ramen::catalog::SortOrder;
use ramen::config::{CatalogConfig, DEFAULT_IMAGES_URL, DEFAULT_PRODUCTS_URL, DEFAULT_TIMEOUT_SECS};
use ramen::fetch::{DataSource, RemoteCatalog};
use ramen::headless::{load_listing, ListingOptions};
use ramen::shared::Theme;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ramen")]
#[command(about = "A terminal-based noodle catalog browser", long_about = None)]
struct Args {
    /// Location of the image collection (URL or local JSON file)
    #[arg(long, default_value = DEFAULT_IMAGES_URL)]
    images_url: DataSource,

    /// Location of the product collection (URL or local JSON file)
    #[arg(long, default_value = DEFAULT_PRODUCTS_URL)]
    products_url: DataSource,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Do not load row images
    #[arg(long)]
    no_image_probe: bool,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Print the catalog once and exit instead of starting the UI
    #[arg(long)]
    print: bool,

    /// Brand search query for --print
    #[arg(long, requires = "print", default_value = "")]
    query: String,

    /// Rating sort for --print (asc or desc)
    #[arg(long, requires = "print")]
    sort: Option<SortOrder>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> CatalogConfig {
        CatalogConfig {
            images: self.images_url.clone(),
            products: self.products_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            probe_images: !self.no_image_probe && !self.print,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Ramen");
    }

    let config = args.config();
    let fetcher = Arc::new(RemoteCatalog::new(&config)?);

    if args.print {
        let options = ListingOptions {
            query: args.query.clone(),
            sort: args.sort,
        };
        let state = load_listing(fetcher, &options)?;
        let mut stdout = io::stdout().lock();
        if state.rows().is_empty() {
            writeln!(stdout, "{}", empty_caption(&state))?;
        }
        for row in state.rows() {
            writeln!(stdout, "{}", format_row(row))?;
        }
        return Ok(());
    }

    let mut app = App::new(&config, fetcher)?;
    if args.light {
        app.theme = Theme::GruvboxLight;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Ramen exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        app.tick();
        terminal.draw(|f| ramen::ui::draw(f, &mut app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Landing screen
        if app.screen == Screen::Landing {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
                (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                    app.enter_catalog();
                },
                (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                _ => {},
            }
            continue;
        }

        // Sort sheet - handle separately
        if app.sort_sheet.visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => app.sort_sheet.close(),
                KeyCode::Up | KeyCode::Char('k') => app.sort_sheet.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.sort_sheet.cursor_down(),
                KeyCode::Enter => {
                    let order = app.sort_sheet.choose();
                    app.apply_sort(order);
                },
                KeyCode::Char(c @ '1'..='2') => {
                    let index = usize::from(c as u8 - b'1');
                    if let Some(order) = app.sort_sheet.choose_index(index) {
                        app.apply_sort(order);
                    }
                },
                _ => {},
            }
            continue;
        }

        // Search box - handle separately
        if app.search.is_focused() {
            match (key.modifiers, key.code) {
                (_, KeyCode::Enter) | (_, KeyCode::Esc) => app.search.blur(),
                (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                    app.search.clear();
                    app.search_changed();
                },
                (_, KeyCode::Backspace) => {
                    app.search.backspace();
                    app.search_changed();
                },
                (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
                    app.search.input(c);
                    app.search_changed();
                },
                _ => {},
            }
            continue;
        }

        // Catalog screen
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Back to landing
            (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::NONE, KeyCode::Char('h'))
            | (KeyModifiers::NONE, KeyCode::Left) => {
                app.back();
            },

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.catalog.cursor_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.catalog.cursor_down();
            },

            // Vim navigation
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.catalog.goto_first();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                app.catalog.goto_last();
            },
            (KeyModifiers::CONTROL, KeyCode::Char('f')) | (KeyModifiers::NONE, KeyCode::PageDown) => {
                for _ in 0..app.viewport_rows.max(1) {
                    app.catalog.cursor_down();
                }
            },
            (KeyModifiers::CONTROL, KeyCode::Char('b')) | (KeyModifiers::NONE, KeyCode::PageUp) => {
                for _ in 0..app.viewport_rows.max(1) {
                    app.catalog.cursor_up();
                }
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                app.search.focus();
            },
            (KeyModifiers::NONE, KeyCode::Char('s')) | (KeyModifiers::NONE, KeyCode::Char('m')) => {
                app.sort_sheet.open();
            },
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                app.refresh();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                app.cycle_theme();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.status =
                    "Help: /=search, s=sort by rating, r=refresh, j/k=move, T=theme, Esc=back, q=quit"
                        .to_string();
            },

            _ => {},
        }
        pending_g = false;
    }
}
