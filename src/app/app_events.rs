use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tui_textarea::Input;

use super::app_state::App;
use super::mouse_click;
use crate::layout;

impl App {
    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Down => self.autocomplete.highlight_next(),
            KeyCode::Up => self.autocomplete.highlight_previous(),
            KeyCode::Enter => self.confirm(),
            KeyCode::Esc => {
                if self.autocomplete.is_visible() {
                    self.autocomplete.hide();
                } else {
                    self.should_quit = true;
                }
            }
            // Single-line input: swallow keys the textarea would turn into newlines or tabs
            KeyCode::Tab | KeyCode::BackTab => {}
            KeyCode::Char('m' | 'j') if ctrl => {}
            _ => {
                if self.input.textarea.input(Input::from(key)) {
                    self.sync_input();
                }
            }
        }
    }

    /// Handle mouse events; only pointer-down matters
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.is_mounted() {
            return;
        }
        if let MouseEventKind::Down(_) = mouse.kind {
            let region = layout::region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
