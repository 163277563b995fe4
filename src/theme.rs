//! Color and modifier constants

pub mod input {
    use ratatui::style::Color;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const TITLE: Color = Color::Cyan;
}

pub mod dropdown {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const ITEM_NORMAL_FG: Color = Color::White;
    pub const ITEM_SELECTED_FG: Color = Color::Black;
    pub const ITEM_SELECTED_BG: Color = Color::Cyan;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const MATCH_FG: Color = Color::Yellow;
    pub const MATCH_MODIFIER: Modifier = Modifier::BOLD.union(Modifier::UNDERLINED);
    pub const LOADING: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
    pub const NO_MATCHES: Color = Color::DarkGray;
}

pub mod help_line {
    use ratatui::style::Color;

    pub const KEY: Color = Color::Cyan;
    pub const DESCRIPTION: Color = Color::DarkGray;
}
