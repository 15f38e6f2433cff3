//! Sort sheet UI rendering.

use super::{SortSheetState, SORT_OPTIONS};
use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

const SHEET_HEIGHT: u16 = 6;

/// Draw the sheet anchored to the bottom of `area`.
pub fn draw_sort_sheet(f: &mut Frame<'_>, state: &SortSheetState, area: Rect, colors: &ThemeColors) {
    if !state.visible {
        return;
    }

    let height = SHEET_HEIGHT.min(area.height);
    let sheet = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };

    let items: Vec<ListItem<'_>> = SORT_OPTIONS
        .iter()
        .enumerate()
        .map(|(idx, order)| {
            let style = if idx == state.cursor() {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(format!("  {}", order.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" ━━━ ")
            .title_alignment(ratatui::layout::Alignment::Center)
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.surface)),
    );

    f.render_widget(Clear, sheet);
    f.render_widget(list, sheet);
}
