//! Landing screen UI rendering.

use super::{BOWL_ART, ENTER_LABEL, TITLE, WELCOME};
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Draw the welcome screen centered in `area`.
pub fn draw_landing(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let background = Block::default().style(Style::default().bg(colors.bg));
    f.render_widget(background, area);

    // art + blank + two text lines + blank + button
    let content_height = BOWL_ART.len() as u16 + 6;
    let top = area.height.saturating_sub(content_height) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(BOWL_ART.len() as u16 + 1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let art: Vec<Line<'_>> = BOWL_ART
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(colors.heading))))
        .collect();
    f.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[1]);

    let bold = Style::default().fg(colors.text).add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(Span::styled(WELCOME, bold)),
        Line::from(Span::styled(
            TITLE.to_uppercase(),
            bold.fg(colors.heading),
        )),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[2]);

    let width = (ENTER_LABEL.len() as u16 + 10).min(chunks[3].width);
    let button = Rect {
        x: chunks[3].x + (chunks[3].width - width) / 2,
        y: chunks[3].y,
        width,
        height: chunks[3].height,
    };
    let label = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            ENTER_LABEL,
            Style::default().fg(colors.cursor_fg).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().bg(colors.action));
    f.render_widget(label, button);
}
