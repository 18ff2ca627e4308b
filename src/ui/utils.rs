use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within the given display width, appending an
/// ellipsis when something was cut
pub fn truncate_by_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(ch);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Lay out `left` and `right` on one line of `width` columns, right text
/// flush right. The left text is truncated first when space is short.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let right_width = right.width();
    if right_width >= width {
        return truncate_by_width(right, width);
    }

    // Keep at least one column between the two
    let left_room = width - right_width;
    let left = truncate_by_width(left, left_room.saturating_sub(1));
    let gap = width - right_width - left.width();
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Render a buffer as plain text, one line per row
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
