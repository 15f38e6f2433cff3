//! Shared formatting utilities for UI components.

use crate::catalog::MAX_STARS;
use unicode_width::UnicodeWidthChar;

/// Render a five-star rating bar with `filled` stars lit.
pub fn star_bar(filled: u8) -> String {
    let filled = filled.min(MAX_STARS);
    let mut bar = "★".repeat(usize::from(filled));
    bar.push_str(&"☆".repeat(usize::from(MAX_STARS - filled)));
    bar
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
