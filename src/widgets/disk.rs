//! Disk widget.

use super::{BODY_ROW, MARGIN};
use crate::metrics::{MetricsProvider, ROOT_MOUNT};
use crate::model::RenderError;
use crate::render::text::{bytes2human, text_at, title_text};
use crate::render::Render;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::rc::Rc;

/// Usage of the root filesystem.
pub fn render(metrics: Rc<dyn MetricsProvider>) -> impl Render {
    move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
        let disk = metrics.disk_usage(ROOT_MOUNT)?;
        title_text(buf, area, 0, "Disk");
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW,
            &format!("Used: {:.1}%", disk.used_percent()),
            Style::default(),
        );
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW + 1,
            &format!("Free: {}", bytes2human(disk.available)),
            Style::default(),
        );
        Ok(())
    }
}
