//! Always-redraw hotspot and the buffer copy helpers it is built on.

use super::{Hotspot, Render};
use crate::model::RenderError;
use ratatui::{buffer::Buffer, layout::Rect};
use std::time::Instant;

/// Hotspot that repaints on every viewport refresh.
pub struct FnHotspot<R> {
    width: u16,
    height: u16,
    render: R,
}

impl<R: Render> FnHotspot<R> {
    /// Wrap `render` as a `width` x `height` hotspot.
    pub fn new(width: u16, height: u16, render: R) -> Self {
        Self {
            width,
            height,
            render,
        }
    }
}

impl<R: Render> Hotspot for FnHotspot<R> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn should_redraw(&self, _now: Instant) -> bool {
        true
    }

    fn paste_into(
        &mut self,
        canvas: &mut Buffer,
        xy: (u16, u16),
        _now: Instant,
    ) -> Result<(), RenderError> {
        paste(&mut self.render, self.width, self.height, canvas, xy)
    }
}

/// Render into a fresh `width` x `height` buffer, then blit it at `xy`.
pub(super) fn paste<R: Render + ?Sized>(
    render: &mut R,
    width: u16,
    height: u16,
    canvas: &mut Buffer,
    xy: (u16, u16),
) -> Result<(), RenderError> {
    let area = Rect::new(0, 0, width, height);
    let mut scratch = Buffer::empty(area);
    render.render(&mut scratch, area)?;
    blit(&scratch, canvas, xy);
    Ok(())
}

/// Copy every cell of `src` into `dst` with its origin at `xy`.
///
/// Cells falling outside `dst` are dropped.
pub fn blit(src: &Buffer, dst: &mut Buffer, (x, y): (u16, u16)) {
    let src_area = src.area;
    let dst_area = dst.area;
    for row in 0..src_area.height {
        let ty = u32::from(y) + u32::from(row);
        if ty >= u32::from(dst_area.bottom()) {
            break;
        }
        for col in 0..src_area.width {
            let tx = u32::from(x) + u32::from(col);
            if tx >= u32::from(dst_area.right()) {
                break;
            }
            let cell = src[(src_area.x + col, src_area.y + row)].clone();
            // tx/ty are bounded by dst_area, which fits in u16
            dst[(tx as u16, ty as u16)] = cell;
        }
    }
}

/// Copy `window` out of `src` into a new buffer anchored at the origin.
///
/// `window` must lie inside `src.area`.
pub fn crop(src: &Buffer, window: Rect) -> Buffer {
    let mut out = Buffer::empty(Rect::new(0, 0, window.width, window.height));
    for row in 0..window.height {
        for col in 0..window.width {
            out[(col, row)] = src[(window.x + col, window.y + row)].clone();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{row_text, symbol_at};
    use ratatui::style::Style;

    fn letter(ch: &'static str) -> impl FnMut(&mut Buffer, Rect) -> Result<(), RenderError> {
        move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    buf[(x, y)].set_symbol(ch);
                }
            }
            Ok(())
        }
    }

    #[test]
    fn fn_hotspot_always_redraws() {
        let hotspot = FnHotspot::new(2, 2, letter("a"));
        let now = Instant::now();
        assert!(hotspot.should_redraw(now));
        assert!(hotspot.should_redraw(now));
    }

    #[test]
    fn paste_into_writes_at_offset() {
        let mut canvas = Buffer::empty(Rect::new(0, 0, 6, 2));
        let mut hotspot = FnHotspot::new(2, 2, letter("x"));
        hotspot
            .paste_into(&mut canvas, (3, 0), Instant::now())
            .unwrap();

        assert_eq!(symbol_at(&canvas, 2, 0), " ");
        assert_eq!(symbol_at(&canvas, 3, 0), "x");
        assert_eq!(symbol_at(&canvas, 4, 1), "x");
        assert_eq!(symbol_at(&canvas, 5, 0), " ");
    }

    #[test]
    fn paste_starts_from_blank_background() {
        let mut canvas = Buffer::empty(Rect::new(0, 0, 4, 1));
        canvas.set_string(0, 0, "zzzz", Style::default());
        let mut hotspot = FnHotspot::new(
            4,
            1,
            |buf: &mut Buffer, _area: Rect| -> Result<(), RenderError> {
                buf.set_string(0, 0, "ab", Style::default());
                Ok(())
            },
        );
        hotspot
            .paste_into(&mut canvas, (0, 0), Instant::now())
            .unwrap();

        assert_eq!(row_text(&canvas, 0), "ab  ");
    }

    #[test]
    fn render_error_leaves_canvas_untouched() {
        let mut canvas = Buffer::empty(Rect::new(0, 0, 3, 1));
        canvas.set_string(0, 0, "abc", Style::default());
        let mut hotspot = FnHotspot::new(
            3,
            1,
            |_buf: &mut Buffer, _area: Rect| -> Result<(), RenderError> {
                Err(crate::model::MetricsError::HostnameUnavailable.into())
            },
        );

        assert!(hotspot
            .paste_into(&mut canvas, (0, 0), Instant::now())
            .is_err());
        assert_eq!(symbol_at(&canvas, 1, 0), "b");
    }

    #[test]
    fn blit_clips_at_destination_edge() {
        let mut src = Buffer::empty(Rect::new(0, 0, 3, 1));
        src.set_string(0, 0, "123", Style::default());
        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 1));
        blit(&src, &mut dst, (2, 0));
        assert_eq!(row_text(&dst, 0), "  12");
    }

    #[test]
    fn crop_extracts_window() {
        let mut src = Buffer::empty(Rect::new(0, 0, 5, 2));
        src.set_string(0, 1, "abcde", Style::default());
        let out = crop(&src, Rect::new(1, 1, 3, 1));
        assert_eq!(out.area, Rect::new(0, 0, 3, 1));
        assert_eq!(row_text(&out, 0), "bcd");
    }
}
