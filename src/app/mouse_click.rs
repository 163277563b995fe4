//! Mouse click handling
//!
//! A press on a dropdown row selects it; a press anywhere outside the
//! dropdown dismisses it.

use super::app_state::App;
use crate::layout::Region;

/// Handle a pointer-down for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::DropdownRow(index)) => app.select_index(index),
        // Border, title, or status view: nothing to do
        Some(Region::Dropdown) => {}
        Some(Region::InputField) | None => app.autocomplete.hide(),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
