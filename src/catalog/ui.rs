//! Catalog screen UI rendering.

use super::{CatalogRow, CatalogState, SearchInput};
use crate::image_cell::ImagePhase;
use crate::shared::{star_bar, truncate_to_width, ThemeColors};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Terminal lines taken by one product card, borders included.
pub const CARD_HEIGHT: u16 = 6;

const IMAGE_WIDTH: u16 = 14;

const FETCHING_ART: [&str; 4] = [r"   ~  ~  ~   ", r"  .-------.  ", r"  |  ...  |  ", r"  '-------'  "];

const EMPTY_ART: [&str; 4] = [r"   _______   ", r"  /       \  ", r" |  (x_x)  | ", r"  \_______/  "];

const FETCHING_CAPTION: &str = "Fetching Items";

const EMPTY_CAPTION: &str = "No Items Found";

/// Draw the search header for the catalog.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, search: &SearchInput, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(area);

    let border = if search.is_focused() {
        colors.heading
    } else {
        colors.border
    };
    let text = if search.text().is_empty() && !search.is_focused() {
        Span::styled("Search", Style::default().fg(colors.dim))
    } else {
        Span::styled(
            format!("{}{}", search.text(), if search.is_focused() { "▏" } else { "" }),
            Style::default().fg(colors.text),
        )
    };
    let searchbar = Paragraph::new(Line::from(vec![Span::raw("🔍 "), text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(searchbar, chunks[0]);

    let menu = Paragraph::new(vec![Line::from(""), Line::from("⋮")])
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.text).bg(colors.bg));
    f.render_widget(menu, chunks[1]);
}

/// Draw the product list, or the empty state when there is nothing to show.
pub fn draw_list(f: &mut Frame<'_>, area: Rect, state: &mut CatalogState, colors: &ThemeColors) -> usize {
    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), area);

    let viewport_rows = usize::from(area.height / CARD_HEIGHT).max(1);
    if state.rows().is_empty() {
        draw_empty(f, area, state, colors);
        return viewport_rows;
    }

    state.adjust_scroll(viewport_rows);
    let cursor = state.cursor();
    let scroll = state.scroll();

    for (slot, (idx, row)) in state
        .rows()
        .iter()
        .enumerate()
        .skip(scroll)
        .take(viewport_rows)
        .enumerate()
    {
        let card = Rect {
            x: area.x,
            y: area.y + slot as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(slot as u16 * CARD_HEIGHT)),
        };
        draw_card(f, card, row, idx == cursor, colors);
    }

    viewport_rows
}

fn draw_card(f: &mut Frame<'_>, area: Rect, row: &CatalogRow, selected: bool, colors: &ThemeColors) {
    let border = if selected { colors.cursor_bg } else { colors.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(IMAGE_WIDTH), Constraint::Min(1)])
        .split(inner);

    f.render_widget(image_glyph(row, colors), chunks[0]);

    let width = usize::from(chunks[1].width.saturating_sub(1));
    let product = &row.product;
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&product.variety, width),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&product.brand, width),
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            truncate_to_width(&product.origin(), width),
            Style::default().fg(colors.dim),
        )),
        Line::from(Span::styled(
            star_bar(product.filled_stars()),
            Style::default().fg(colors.star),
        ))
        .alignment(Alignment::Right),
    ];
    f.render_widget(Paragraph::new(lines), chunks[1]);
}

fn image_glyph(row: &CatalogRow, colors: &ThemeColors) -> Paragraph<'static> {
    let (glyph, caption, color) = match row.image.phase() {
        ImagePhase::Placeholder => ("🍜", "loading".to_string(), colors.dim),
        ImagePhase::Loaded => {
            let name = row
                .image
                .source()
                .and_then(|s| s.rsplit('/').next())
                .unwrap_or_default();
            ("▣", truncate_to_width(name, usize::from(IMAGE_WIDTH - 2)), colors.heading)
        },
        ImagePhase::Error => ("⚠", "no image".to_string(), colors.warning),
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(glyph, Style::default().fg(color))),
        Line::from(Span::styled(caption, Style::default().fg(colors.dim))),
    ])
    .alignment(Alignment::Center)
}

fn draw_empty(f: &mut Frame<'_>, area: Rect, state: &CatalogState, colors: &ThemeColors) {
    let art = if state.is_loading() { FETCHING_ART } else { EMPTY_ART };
    let caption = empty_caption(state);

    let mut lines: Vec<Line<'_>> = art
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(colors.heading))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        caption,
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )));

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

/// Caption shown when the list is empty, on screen and in `--print` output.
pub fn empty_caption(state: &CatalogState) -> &'static str {
    if state.is_loading() {
        FETCHING_CAPTION
    } else {
        EMPTY_CAPTION
    }
}

/// Plain-text rendering of one product, used by the `--print` mode.
pub fn format_row(row: &CatalogRow) -> String {
    let product = &row.product;
    format!(
        "{} | {} | {} | {} ({})",
        product.variety,
        product.brand,
        product.origin(),
        star_bar(product.filled_stars()),
        product.stars
    )
}
