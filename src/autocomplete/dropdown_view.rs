//! What the dropdown should show
//!
//! A pure function of the autocomplete state. Drawing lives in
//! `autocomplete_render`; this only picks one of the mutually exclusive
//! views.

use std::ops::Range;

use super::autocomplete_state::AutocompleteState;
use super::matcher::SuggestionMatcher;
use crate::config::StrategyKind;
use crate::suggestion::Suggestion;

/// One row of the populated dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRow<'a> {
    pub suggestion: &'a Suggestion,
    /// Byte range of the matched text within the name
    pub emphasis: Option<Range<usize>>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownView<'a> {
    Hidden,
    Loading,
    Error(&'a str),
    NoMatch,
    List(Vec<DropdownRow<'a>>),
}

impl<'a> DropdownView<'a> {
    pub fn from_state(state: &'a AutocompleteState) -> Self {
        if let Some(view) = Self::without_list(state) {
            return view;
        }

        let input = state.input();
        let rows = state
            .candidates()
            .iter()
            .enumerate()
            .map(|(i, suggestion)| DropdownRow {
                suggestion,
                emphasis: SuggestionMatcher::find_match(&suggestion.name, input),
                highlighted: state.highlighted() == Some(i),
            })
            .collect();

        DropdownView::List(rows)
    }

    /// Whether the candidate rows are what the user currently sees
    pub fn shows_list(state: &AutocompleteState) -> bool {
        DropdownView::without_list(state).is_none()
    }

    /// The view that takes the place of the list, if any
    fn without_list(state: &'a AutocompleteState) -> Option<Self> {
        let input = state.input();

        // Live-query reports fetch status even while the list is closed;
        // preload only once something has been typed.
        let status_shown = match state.strategy_kind() {
            StrategyKind::Live => true,
            StrategyKind::Preload => !input.is_empty(),
        };
        if status_shown {
            if state.is_loading() {
                return Some(DropdownView::Loading);
            }
            if let Some(message) = state.error() {
                return Some(DropdownView::Error(message));
            }
        }

        if !state.is_visible() || input.is_empty() {
            return Some(DropdownView::Hidden);
        }

        if state.candidates().is_empty() {
            return Some(DropdownView::NoMatch);
        }

        None
    }
}
