use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::autocomplete::autocomplete_render;
use crate::config::StrategyKind;
use crate::theme;

const INPUT_HEIGHT: u16 = 3;

const HELP_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "navigate"),
    ("Enter", "select"),
    ("Esc", "close"),
    ("Ctrl+C", "quit"),
];

impl App {
    /// Render the UI and record component regions for mouse handling
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(1),            // Title
            Constraint::Length(INPUT_HEIGHT), // Input field
            Constraint::Min(0),               // Room for the dropdown
            Constraint::Length(1),            // Help line
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);

        let input_area = layout[1];
        frame.render_widget(&self.input.textarea, input_area);
        self.layout_regions.input_field = Some(input_area);

        render_help_line(frame, layout[3]);

        // Dropdown last so it overlays the help line when it needs the room
        if let Some(rendered) = autocomplete_render::render_dropdown(
            &self.autocomplete,
            frame,
            input_area,
            self.max_visible(),
        ) {
            self.layout_regions.dropdown = Some(rendered.area);
            self.layout_regions.dropdown_rows = rendered.rows;
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.autocomplete.strategy_kind() {
            StrategyKind::Live => "live query",
            StrategyKind::Preload => "preload",
        };
        let title = Line::from(vec![
            Span::styled(" typeahead ", Style::default().fg(theme::input::TITLE)),
            Span::styled(format!("({})", mode), Style::default().fg(theme::help_line::DESCRIPTION)),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, description) in HELP_KEYS {
        spans.push(Span::styled(format!(" {}", key), Style::default().fg(theme::help_line::KEY)));
        spans.push(Span::styled(
            format!(" {} ", description),
            Style::default().fg(theme::help_line::DESCRIPTION),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
