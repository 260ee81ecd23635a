//! Memory widget.

use super::{BODY_ROW, MARGIN};
use crate::metrics::MetricsProvider;
use crate::model::RenderError;
use crate::render::text::{text_at, title_text};
use crate::render::Render;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::rc::Rc;

/// RAM and swap utilisation.
pub fn render(metrics: Rc<dyn MetricsProvider>) -> impl Render {
    move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
        let mem = metrics.memory();
        title_text(buf, area, 0, "Memory");
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW,
            &format!("Used: {:.1}%", mem.used_percent()),
            Style::default(),
        );
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW + 1,
            &format!("Swap: {:.1}%", mem.swap_percent()),
            Style::default(),
        );
        Ok(())
    }
}
