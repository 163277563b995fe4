use std::io::{self, Write};

use crate::autocomplete::AutocompleteState;
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::source::FetchWorker;
use crate::suggestion::Suggestion;

use super::input_state::InputState;
use super::mouse_capture::MouseCaptureGuard;

/// Called with the chosen name every time a selection completes
pub type SelectCallback = Box<dyn FnMut(&str)>;

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: AutocompleteState,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    max_visible: usize,
    worker: FetchWorker,
    on_select: SelectCallback,
    mouse_capture: Option<MouseCaptureGuard>,
}

impl App {
    pub fn new(config: &Config, worker: FetchWorker, on_select: SelectCallback) -> Self {
        Self {
            input: InputState::new(),
            autocomplete: AutocompleteState::new(config.source.strategy),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            max_visible: config.dropdown.max_visible,
            worker,
            on_select,
            mouse_capture: None,
        }
    }

    /// Mount against the real terminal
    pub fn mount(&mut self) -> io::Result<()> {
        self.mount_with(io::stdout())
    }

    /// Issue the mount-time fetch and start listening for pointer events
    ///
    /// Capture is released when the App is dropped.
    pub fn mount_with<W: Write + 'static>(&mut self, writer: W) -> io::Result<()> {
        if self.is_mounted() {
            return Ok(());
        }
        self.mouse_capture = Some(MouseCaptureGuard::acquire(writer)?);
        if let Some(request) = self.autocomplete.mount() {
            self.worker.send(request);
        }
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.mouse_capture.is_some()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Apply every finished fetch; returns true if any was accepted
    pub fn poll_responses(&mut self) -> bool {
        let mut applied = false;
        while let Some(response) = self.worker.try_recv() {
            applied |= self.autocomplete.apply_response(response);
        }
        applied
    }

    /// Push the textarea's current value into the autocomplete state
    pub fn sync_input(&mut self) {
        let text = self.input.query().to_string();
        if let Some(request) = self.autocomplete.on_input_changed(&text) {
            self.worker.send(request);
        }
    }

    /// Select a candidate by index (pointer selection)
    pub fn select_index(&mut self, index: usize) {
        if let Some(chosen) = self.autocomplete.select(index) {
            self.complete_selection(chosen);
        }
    }

    /// Select via Enter
    pub fn confirm(&mut self) {
        if let Some(chosen) = self.autocomplete.confirm() {
            self.complete_selection(chosen);
        }
    }

    fn complete_selection(&mut self, chosen: Suggestion) {
        log::debug!("Selected {} ({})", chosen.name, chosen.id);
        self.input.set_text(&chosen.name);
        (self.on_select)(&chosen.name);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
