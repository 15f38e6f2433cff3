//! Ramen - a terminal browser for a noodle product catalog.
//!
//! Ramen fetches two JSON collections (product records and a pool of image
//! references), then shows the products as a searchable, sortable list of
//! cards behind a small welcome screen.
//!
//! # Features
//!
//! - Search-as-you-type filtering by brand
//! - Sorting by rating (text order, ascending or descending)
//! - Pull-to-refresh style reloading with stale-result protection
//! - Per-row progressive image cells with placeholder and error states
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use ramen::catalog::{filter_by_brand, sort_by_stars, Product, SortOrder};
//!
//! let full = vec![
//!     Product::new("Nissin", "Cup Noodles", "Japan", "5"),
//!     Product::new("Maruchan", "Instant Lunch", "USA", "2"),
//! ];
//! let mut view = filter_by_brand(&full, "mar");
//! sort_by_stars(&mut view, SortOrder::Ascending);
//! assert_eq!(view[0].brand, "Maruchan");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod headless;
pub mod image_cell;
pub mod landing;
pub mod shared;
pub mod sort_sheet;
pub mod ui;

pub use error::{RamenError, Result};
