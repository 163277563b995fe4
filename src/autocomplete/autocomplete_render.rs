//! Autocomplete dropdown rendering
//!
//! Draws whichever `DropdownView` the state calls for, directly below the
//! input field (or above it when the terminal is too short).

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{AutocompleteState, DropdownRow, DropdownView};
use crate::layout::DropdownRows;
use crate::theme;
use crate::widgets::popup;

// Dropdown display constants
const MIN_POPUP_WIDTH: u16 = 20;
const MAX_POPUP_WIDTH: u16 = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 5; // borders + row prefix + trailing space
const POPUP_OFFSET_X: u16 = 1;
const HIGHLIGHT_PREFIX: &str = "► ";
const NORMAL_PREFIX: &str = "  ";

pub const LOADING_TEXT: &str = "Loading…";
pub const NO_MATCH_TEXT: &str = "No match";

/// Where the dropdown was drawn, for hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedDropdown {
    pub area: Rect,
    pub rows: Option<DropdownRows>,
}

/// Render the dropdown anchored to the input field
pub fn render_dropdown(
    state: &AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
    max_visible: usize,
) -> Option<RenderedDropdown> {
    match DropdownView::from_state(state) {
        DropdownView::Hidden => None,
        DropdownView::Loading => Some(render_message(
            frame,
            input_area,
            LOADING_TEXT,
            Style::default().fg(theme::dropdown::LOADING),
        )),
        DropdownView::Error(message) => Some(render_message(
            frame,
            input_area,
            message,
            Style::default().fg(theme::dropdown::ERROR),
        )),
        DropdownView::NoMatch => Some(render_message(
            frame,
            input_area,
            NO_MATCH_TEXT,
            Style::default().fg(theme::dropdown::NO_MATCHES),
        )),
        DropdownView::List(rows) => Some(render_list(frame, input_area, &rows, max_visible)),
    }
}

/// First row to draw so the highlighted row stays in view
pub fn scroll_offset(highlighted: Option<usize>, visible_count: usize) -> usize {
    match highlighted {
        Some(i) if visible_count > 0 && i >= visible_count => i + 1 - visible_count,
        _ => 0,
    }
}

fn dropdown_block(title: Option<String>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::dropdown::BORDER))
        .style(Style::default().bg(theme::dropdown::BACKGROUND));
    match title {
        Some(title) => block.title(title),
        None => block,
    }
}

fn popup_width(content_width: usize) -> u16 {
    let width = (content_width as u16).saturating_add(POPUP_PADDING);
    width.clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH)
}

fn render_message(frame: &mut Frame, input_area: Rect, text: &str, style: Style) -> RenderedDropdown {
    let width = popup_width(text.width());
    let height = 1 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_near_anchor(input_area, frame.area(), width, height, POPUP_OFFSET_X);

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {}", text), style)))
        .block(dropdown_block(None));
    frame.render_widget(paragraph, area);

    RenderedDropdown { area, rows: None }
}

fn render_list(
    frame: &mut Frame,
    input_area: Rect,
    rows: &[DropdownRow<'_>],
    max_visible: usize,
) -> RenderedDropdown {
    let wanted = rows.len().min(max_visible.max(1));

    let max_name_width = rows
        .iter()
        .map(|r| r.suggestion.name.width())
        .max()
        .unwrap_or(0);
    let width = popup_width(max_name_width);
    let height = wanted as u16 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_near_anchor(input_area, frame.area(), width, height, POPUP_OFFSET_X);

    // A short terminal clips the popup; scroll within the rows that fit
    let visible_count = wanted.min(area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize);
    let highlighted = rows.iter().position(|r| r.highlighted);
    let offset = scroll_offset(highlighted, visible_count);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(offset)
        .take(visible_count)
        .map(|row| ListItem::new(row_line(row)))
        .collect();

    popup::clear_area(frame, area);
    let title = format!(" Suggestions ({}) ", rows.len());
    frame.render_widget(List::new(items).block(dropdown_block(Some(title))), area);

    let rows_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(POPUP_BORDER_HEIGHT),
    };
    RenderedDropdown {
        area,
        rows: Some(DropdownRows {
            area: rows_area,
            offset,
            count: visible_count,
        }),
    }
}

/// One suggestion with the matched text emphasized
fn row_line(row: &DropdownRow<'_>) -> Line<'static> {
    let name = row.suggestion.name.as_str();

    let (base, matched) = if row.highlighted {
        let base = Style::default()
            .fg(theme::dropdown::ITEM_SELECTED_FG)
            .bg(theme::dropdown::ITEM_SELECTED_BG)
            .add_modifier(theme::dropdown::ITEM_SELECTED_MODIFIER);
        (base, base.add_modifier(theme::dropdown::MATCH_MODIFIER))
    } else {
        let base = Style::default()
            .fg(theme::dropdown::ITEM_NORMAL_FG)
            .bg(theme::dropdown::BACKGROUND);
        let matched = base
            .fg(theme::dropdown::MATCH_FG)
            .add_modifier(theme::dropdown::MATCH_MODIFIER);
        (base, matched)
    };

    let prefix = if row.highlighted {
        HIGHLIGHT_PREFIX
    } else {
        NORMAL_PREFIX
    };
    let mut spans = vec![Span::styled(prefix, base)];

    match &row.emphasis {
        Some(range) => {
            let (before, rest) = name.split_at(range.start);
            let (hit, after) = rest.split_at(range.end - range.start);
            if !before.is_empty() {
                spans.push(Span::styled(before.to_string(), base));
            }
            spans.push(Span::styled(hit.to_string(), matched));
            if !after.is_empty() {
                spans.push(Span::styled(after.to_string(), base));
            }
        }
        None => spans.push(Span::styled(name.to_string(), base)),
    }
    spans.push(Span::styled(" ", base));

    Line::from(spans)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
