use super::dropdown_view::DropdownView;
use crate::config::StrategyKind;
use crate::source::{FetchQuery, FetchRequest, FetchResponse, Lookup, Strategy};
use crate::suggestion::Suggestion;

/// Outcome of the most recent fetch attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Autocomplete state: input mirror, candidate set, highlight and fetch status
///
/// The state never performs I/O. Operations that need the network return a
/// `FetchRequest` for the caller to dispatch, and results come back through
/// `apply_response`.
#[derive(Debug)]
pub struct AutocompleteState {
    strategy: Strategy,
    input: String,
    candidates: Vec<Suggestion>,
    highlighted: Option<usize>,
    visible: bool,
    status: FetchStatus,
    next_request_id: u64,
    /// Only the response to this request is accepted
    awaited_request: Option<u64>,
}

impl AutocompleteState {
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            strategy: Strategy::new(kind),
            input: String::new(),
            candidates: Vec::new(),
            highlighted: None,
            visible: false,
            status: FetchStatus::Idle,
            next_request_id: 1,
            awaited_request: None,
        }
    }

    /// Request issued once when the widget is mounted (preload only)
    pub fn mount(&mut self) -> Option<FetchRequest> {
        let query = self.strategy.mount_query()?;
        Some(self.issue(query))
    }

    /// Record a new input value and decide how to answer it
    ///
    /// Returns a request only when the value actually changed, is non-empty,
    /// and the strategy needs the network for it.
    pub fn on_input_changed(&mut self, text: &str) -> Option<FetchRequest> {
        if text == self.input {
            return None;
        }
        self.input = text.to_string();

        if text.is_empty() {
            self.replace_candidates(Vec::new());
            self.visible = false;
            if self.strategy.kind() == StrategyKind::Live {
                self.awaited_request = None;
                self.status = FetchStatus::Idle;
            }
            return None;
        }

        match self.strategy.lookup(text) {
            Lookup::Remote(query) => Some(self.issue(query)),
            Lookup::Local(found) => {
                self.replace_candidates(found);
                self.visible = true;
                None
            }
            Lookup::Pending => {
                self.replace_candidates(Vec::new());
                self.visible = true;
                None
            }
        }
    }

    /// Fold a finished fetch into the state
    ///
    /// Returns false when the response was stale and ignored.
    pub fn apply_response(&mut self, response: FetchResponse) -> bool {
        if self.awaited_request != Some(response.request_id) {
            log::debug!(
                "Ignoring stale response {} (awaiting {:?})",
                response.request_id,
                self.awaited_request
            );
            return false;
        }
        self.awaited_request = None;

        match response.result {
            Ok(fetched) => {
                self.status = FetchStatus::Idle;
                let shown = self.strategy.absorb(&response.query, fetched, &self.input);
                self.replace_candidates(shown);
                self.visible = !self.input.is_empty();
            }
            Err(e) => {
                self.status = FetchStatus::Failed(e.to_string());
                self.replace_candidates(Vec::new());
            }
        }
        true
    }

    /// Arrow keys only move through rows the user can see
    pub fn highlight_next(&mut self) {
        if !DropdownView::shows_list(self) {
            return;
        }
        let len = self.candidates.len();
        self.highlighted = match self.highlighted {
            None if len > 0 => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            other => other,
        };
    }

    pub fn highlight_previous(&mut self) {
        if !DropdownView::shows_list(self) {
            return;
        }
        self.highlighted = match self.highlighted {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Enter: pick the highlighted entry, else the first, else just close
    ///
    /// Rows behind a loading, error or closed view are never picked.
    pub fn confirm(&mut self) -> Option<Suggestion> {
        if !DropdownView::shows_list(self) {
            self.hide();
            return None;
        }
        self.select(self.highlighted.unwrap_or(0))
    }

    /// Complete a selection of a displayed row; the input becomes its name
    pub fn select(&mut self, index: usize) -> Option<Suggestion> {
        if !DropdownView::shows_list(self) {
            return None;
        }
        let chosen = self.candidates.get(index)?.clone();
        self.input = chosen.name.clone();
        self.replace_candidates(Vec::new());
        self.visible = false;
        if self.strategy.kind() == StrategyKind::Live {
            self.awaited_request = None;
            self.status = FetchStatus::Idle;
        }
        Some(chosen)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn candidates(&self) -> &[Suggestion] {
        &self.candidates
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    fn issue(&mut self, query: FetchQuery) -> FetchRequest {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.awaited_request = Some(request_id);
        self.status = FetchStatus::Loading;
        FetchRequest { request_id, query }
    }

    /// Any replacement of the candidate set drops the highlight
    fn replace_candidates(&mut self, candidates: Vec<Suggestion>) {
        self.candidates = candidates;
        self.highlighted = None;
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
