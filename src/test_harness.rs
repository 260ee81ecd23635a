//! Shared helpers for whitebox tests.

use ratatui::buffer::Buffer;

/// Symbol of the cell at (`x`, `y`).
pub fn symbol_at(buffer: &Buffer, x: u16, y: u16) -> &str {
    buffer[(x, y)].symbol()
}

/// One row of the buffer as a string, trailing blanks kept.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Trailing spaces on each row are trimmed; blank rows are kept so vertical
/// placement stays visible.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| row_text(buffer, y).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
