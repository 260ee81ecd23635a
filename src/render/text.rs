//! Text drawing helpers shared by the widgets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Style used for widget titles.
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Draw `text` horizontally centered on `row` of `area`.
pub fn title_text(buf: &mut Buffer, area: Rect, row: u16, text: &str) {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let col = area.width.saturating_sub(width) / 2;
    text_at(buf, area, col, row, text, title_style());
}

/// Draw `text` at (`col`, `row`) relative to `area`, clipped to it.
///
/// Does nothing when the position lies outside `area`.
pub fn text_at(buf: &mut Buffer, area: Rect, col: u16, row: u16, text: &str, style: Style) {
    if row >= area.height || col >= area.width {
        return;
    }
    let max_width = usize::from(area.width - col);
    buf.set_stringn(area.x + col, area.y + row, text, max_width, style);
}

/// Human-readable byte count with binary prefixes.
///
/// ```
/// use hotspot_carousel::render::text::bytes2human;
///
/// assert_eq!(bytes2human(10000), "9.8K");
/// assert_eq!(bytes2human(100001221), "95.4M");
/// assert_eq!(bytes2human(512), "512B");
/// ```
pub fn bytes2human(n: u64) -> String {
    const SYMBOLS: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

    let n = u128::from(n);
    for (i, symbol) in SYMBOLS.iter().enumerate().rev() {
        let prefix = 1u128 << ((i + 1) * 10);
        if n >= prefix {
            return format!("{:.1}{}", n as f64 / prefix as f64, symbol);
        }
    }
    format!("{}B", n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::row_text;

    #[test]
    fn title_is_centered() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        title_text(&mut buf, area, 0, "Disk");
        assert_eq!(row_text(&buf, 0), "   Disk   ");
    }

    #[test]
    fn title_wider_than_area_is_clipped() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        title_text(&mut buf, area, 0, "Hostname");
        assert_eq!(row_text(&buf, 0), "Host");
    }

    #[test]
    fn text_outside_area_is_ignored() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        text_at(&mut buf, area, 0, 3, "x", Style::default());
        text_at(&mut buf, area, 9, 0, "x", Style::default());
        assert_eq!(row_text(&buf, 0), "    ");
    }

    #[test]
    fn text_respects_area_offset() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        text_at(&mut buf, Rect::new(2, 1, 4, 1), 1, 0, "ab", Style::default());
        assert_eq!(row_text(&buf, 1), "   ab ");
    }

    #[test]
    fn bytes2human_boundaries() {
        assert_eq!(bytes2human(0), "0B");
        assert_eq!(bytes2human(1023), "1023B");
        assert_eq!(bytes2human(1024), "1.0K");
        assert_eq!(bytes2human(1024 * 1024), "1.0M");
        assert_eq!(bytes2human(3 * 1024 * 1024 * 1024), "3.0G");
        assert_eq!(bytes2human(u64::MAX), "16.0E");
    }
}
