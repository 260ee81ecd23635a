//! Host name widget.

use super::{BODY_ROW, MARGIN};
use crate::metrics::MetricsProvider;
use crate::model::RenderError;
use crate::render::text::{text_at, title_text};
use crate::render::Render;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::rc::Rc;

/// "Hostname" title with the host name underneath.
pub fn render(metrics: Rc<dyn MetricsProvider>) -> impl Render {
    move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
        let hostname = metrics.hostname()?;
        title_text(buf, area, 0, "Hostname");
        text_at(buf, area, MARGIN, BODY_ROW, &hostname, Style::default());
        Ok(())
    }
}
