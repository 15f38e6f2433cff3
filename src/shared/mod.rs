//! Shared UI components.
//!
//! This module contains shared UI components used across both screens:
//! - Theme colors and styling
//! - Rating and text formatters
//! - Status bar and keymap bar widgets

mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

pub use formatters::{star_bar, truncate_to_width};
pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::{Theme, ThemeColors};
