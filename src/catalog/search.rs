//! Search box input state.

/// Search-as-you-type input for the catalog header.
#[derive(Debug)]
pub struct SearchInput {
    is_focused: bool,
    text: String,
}

impl SearchInput {
    /// Create an empty, unfocused search input.
    pub fn new() -> Self {
        Self {
            is_focused: false,
            text: String::new(),
        }
    }

    /// Check if the search box has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Give the search box keyboard focus.
    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// Release keyboard focus, keeping the text.
    pub fn blur(&mut self) {
        self.is_focused = false;
    }

    /// Add a character to the search text.
    pub fn input(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character from the search text.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Clear the search text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Get the current search text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}
