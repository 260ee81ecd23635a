//! Network traffic widget.

use super::{BODY_ROW, MARGIN};
use crate::metrics::MetricsProvider;
use crate::model::RenderError;
use crate::render::text::{bytes2human, text_at, title_text};
use crate::render::Render;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::rc::Rc;

/// Received and transmitted totals for `interface`, titled with its name.
///
/// Fails at render time if the interface does not exist.
pub fn stats(metrics: Rc<dyn MetricsProvider>, interface: String) -> impl Render {
    move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
        let io = metrics.net_io(&interface)?;
        title_text(buf, area, 0, &interface);
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW,
            &format!("Rx: {}", bytes2human(io.received)),
            Style::default(),
        );
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW + 1,
            &format!("Tx: {}", bytes2human(io.transmitted)),
            Style::default(),
        );
        Ok(())
    }
}
