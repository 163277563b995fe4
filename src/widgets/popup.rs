use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_y = anchor.y + anchor.height;
    let room_below = (frame_area.y + frame_area.height).saturating_sub(popup_y);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(room_below),
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Below the anchor when the full height fits there, otherwise whichever
/// side has more room
pub fn popup_near_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let below = popup_below_anchor(anchor, frame_area, width, height, x_offset);
    if below.height >= height {
        return below;
    }
    let above = popup_above_anchor(anchor, width, height, x_offset);
    if above.height > below.height { above } else { below }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
