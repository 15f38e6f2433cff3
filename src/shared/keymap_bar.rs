//! Keymap help bar UI component.

use super::ThemeColors;
use crate::app::{App, Screen};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = match app.screen {
        Screen::Landing => "Enter:open catalog | T:theme | q:quit",
        Screen::Catalog if app.sort_sheet.visible => "jk/↑↓:choose | Enter:sort | 1/2:quick pick | Esc:close",
        Screen::Catalog if app.search.is_focused() => "Type to filter by brand | Ctrl-U:clear | Enter/Esc:done",
        Screen::Catalog => {
            "q:quit | jk:nav | /:search | s:sort | r:refresh | gg/G:top/bottom | T:theme | Esc:back"
        },
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.dim).bg(colors.bg));

    f.render_widget(paragraph, area);
}
