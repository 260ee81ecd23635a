//! Clock widget.

use super::BODY_ROW;
use crate::model::RenderError;
use crate::render::text::{text_at, title_text};
use crate::render::Render;
use chrono::{Local, NaiveDateTime};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Local wall-clock time and date.
pub fn render() -> impl Render {
    render_with(|| Local::now().naive_local())
}

/// Clock reading its time from `now`.
pub fn render_with<F>(mut now: F) -> impl Render
where
    F: FnMut() -> NaiveDateTime,
{
    move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
        let time = now();
        title_text(buf, area, 0, "Clock");
        centered(
            buf,
            area,
            BODY_ROW,
            &time.format("%H:%M:%S").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        centered(
            buf,
            area,
            BODY_ROW + 1,
            &time.format("%a %d %b").to_string(),
            Style::default(),
        );
        Ok(())
    }
}

fn centered(buf: &mut Buffer, area: Rect, row: u16, text: &str, style: Style) {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    text_at(buf, area, area.width.saturating_sub(width) / 2, row, text, style);
}
