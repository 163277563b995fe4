pub mod autocomplete_render;
mod autocomplete_state;
mod dropdown_view;
mod matcher;

pub use autocomplete_state::{AutocompleteState, FetchStatus};
pub use dropdown_view::{DropdownRow, DropdownView};
pub use matcher::SuggestionMatcher;
