//! Progressive image cell.
//!
//! Each catalog row owns one cell. The cell shows a placeholder until its
//! image reports a load result, then either the image or a warning glyph.
//! Results arrive from the [`probe::ImageProber`] worker.

pub mod probe;

pub use probe::{ImageEvent, ImageProber};

/// What a cell should draw right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePhase {
    /// Nothing has finished loading yet.
    Placeholder,
    /// The image loaded successfully.
    Loaded,
    /// The image failed to load.
    Error,
}

/// Per-row image state machine, keyed by its source reference.
#[derive(Debug, Clone, Default)]
pub struct ImageCell {
    source: Option<String>,
    load_ended: bool,
    error: bool,
    requested: bool,
}

impl ImageCell {
    /// Create a cell for the given source. A missing source is an error.
    pub fn new(source: Option<String>) -> Self {
        let source = source.filter(|s| !s.is_empty());
        let missing = source.is_none();
        Self {
            source,
            load_ended: missing,
            error: missing,
            requested: false,
        }
    }

    /// The image reference this cell displays.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Current display phase.
    ///
    /// The placeholder stays up until the first load-end event; after that
    /// an observed error always wins over the real image.
    pub fn phase(&self) -> ImagePhase {
        if !self.load_ended {
            ImagePhase::Placeholder
        } else if self.error {
            ImagePhase::Error
        } else {
            ImagePhase::Loaded
        }
    }

    /// Record that a load attempt finished, successfully or not.
    pub fn on_load_end(&mut self) {
        self.load_ended = true;
    }

    /// Record that the image failed to load.
    pub fn on_error(&mut self) {
        self.error = true;
    }

    /// Apply a probe result if it is for this cell's source.
    pub fn apply(&mut self, event: &ImageEvent) -> bool {
        if self.source.as_deref() != Some(event.uri.as_str()) {
            return false;
        }
        if !event.ok {
            self.on_error();
        }
        self.on_load_end();
        true
    }

    /// Whether the cell still needs its source loaded.
    pub fn needs_load(&self) -> bool {
        self.source.is_some() && !self.requested && !self.load_ended
    }

    /// Mark the load as requested so it is only issued once.
    pub fn mark_requested(&mut self) {
        self.requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(uri: &str, ok: bool) -> ImageEvent {
        ImageEvent {
            uri: uri.to_string(),
            ok,
        }
    }

    #[test]
    fn test_placeholder_until_load_end() {
        let mut cell = ImageCell::new(Some("a.png".to_string()));
        assert_eq!(cell.phase(), ImagePhase::Placeholder);
        assert!(cell.apply(&event("a.png", true)));
        assert_eq!(cell.phase(), ImagePhase::Loaded);
    }

    #[test]
    fn test_error_takes_precedence_afterwards() {
        let mut cell = ImageCell::new(Some("a.png".to_string()));
        cell.apply(&event("a.png", false));
        assert_eq!(cell.phase(), ImagePhase::Error);
        cell.apply(&event("a.png", true));
        assert_eq!(cell.phase(), ImagePhase::Error);
    }

    #[test]
    fn test_events_for_other_sources_are_ignored() {
        let mut cell = ImageCell::new(Some("a.png".to_string()));
        assert!(!cell.apply(&event("b.png", false)));
        assert_eq!(cell.phase(), ImagePhase::Placeholder);
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let cell = ImageCell::new(None);
        assert_eq!(cell.phase(), ImagePhase::Error);
        assert!(!cell.needs_load());

        let cell = ImageCell::new(Some(String::new()));
        assert_eq!(cell.phase(), ImagePhase::Error);
    }

    #[test]
    fn test_load_requested_once() {
        let mut cell = ImageCell::new(Some("a.png".to_string()));
        assert!(cell.needs_load());
        cell.mark_requested();
        assert!(!cell.needs_load());
    }
}
