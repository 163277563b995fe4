//! Layout module for tracking UI component regions
//!
//! Rendering records where components landed; mouse handling asks
//! `region_at()` which component is under the pointer.

use ratatui::layout::{Position, Rect};

/// Clickable regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// Dropdown row, as an index into the candidate set
    DropdownRow(usize),
    /// Dropdown border or status view
    Dropdown,
}

/// Rows of a rendered suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownRows {
    /// Inner area holding the rows
    pub area: Rect,
    /// Candidate index of the first visible row
    pub offset: usize,
    pub count: usize,
}

/// Where components were rendered in the last frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub dropdown: Option<Rect>,
    pub dropdown_rows: Option<DropdownRows>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Component at a screen position; the dropdown overlays everything else
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    let position = Position { x, y };

    if let Some(dropdown) = regions.dropdown
        && dropdown.contains(position)
    {
        if let Some(rows) = regions.dropdown_rows
            && rows.area.contains(position)
        {
            let row = (y - rows.area.y) as usize;
            if row < rows.count {
                return Some(Region::DropdownRow(rows.offset + row));
            }
        }
        return Some(Region::Dropdown);
    }

    if let Some(input) = regions.input_field
        && input.contains(position)
    {
        return Some(Region::InputField);
    }

    None
}
