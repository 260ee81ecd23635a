//! CPU load widget.

use super::{BODY_ROW, MARGIN};
use crate::metrics::MetricsProvider;
use crate::model::RenderError;
use crate::render::text::{text_at, title_text};
use crate::render::Render;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use std::collections::VecDeque;
use std::rc::Rc;

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Overall utilisation, a bar per CPU, and a sparkline of recent samples.
///
/// Keeps one sample per render, as many as fit across the cell.
pub struct CpuLoad {
    metrics: Rc<dyn MetricsProvider>,
    history: VecDeque<u8>,
}

impl CpuLoad {
    /// Widget reading from `metrics`, with an empty history.
    pub fn new(metrics: Rc<dyn MetricsProvider>) -> Self {
        Self {
            metrics,
            history: VecDeque::new(),
        }
    }

    /// Recorded samples, oldest first, as whole percentages.
    pub fn history(&self) -> impl Iterator<Item = u8> + '_ {
        self.history.iter().copied()
    }

    fn record(&mut self, percent: f32, capacity: usize) {
        self.history.push_back(clamp_percent(percent));
        while self.history.len() > capacity {
            self.history.pop_front();
        }
    }
}

impl Render for CpuLoad {
    fn render(&mut self, buf: &mut Buffer, area: Rect) -> Result<(), RenderError> {
        let usage = self.metrics.cpu_load();
        let load = self.metrics.load_average();
        let inner_width = area.width.saturating_sub(2 * MARGIN);
        self.record(usage.global, usize::from(inner_width));

        title_text(buf, area, 0, "CPU Load");
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW,
            &format!("{:>3}%  {:.2}", clamp_percent(usage.global), load.one),
            Style::default(),
        );

        // Bars fill the rows between the summary and the sparkline.
        let last_row = area.height.saturating_sub(1);
        let bar_width = usize::from(inner_width.saturating_sub(3));
        for (i, percent) in usage.per_cpu.iter().enumerate() {
            let row = BODY_ROW + 1 + i as u16;
            if row >= last_row {
                break;
            }
            text_at(
                buf,
                area,
                MARGIN,
                row,
                &format!("{} {}", i % 10, bar(*percent, bar_width)),
                Style::default().fg(Color::Green),
            );
        }

        if last_row > BODY_ROW {
            let spark: String = self.history.iter().map(|&p| spark_char(p)).collect();
            text_at(buf, area, MARGIN, last_row, &spark, Style::default().fg(Color::Cyan));
        }
        Ok(())
    }
}

fn clamp_percent(percent: f32) -> u8 {
    percent.round().clamp(0.0, 100.0) as u8
}

/// Horizontal bar `width` cells wide, filled in proportion to `percent`.
fn bar(percent: f32, width: usize) -> String {
    let filled = (usize::from(clamp_percent(percent)) * width + 50) / 100;
    let mut out = "█".repeat(filled);
    out.push_str(&"░".repeat(width - filled));
    out
}

fn spark_char(percent: u8) -> char {
    SPARK[usize::from(percent.min(100)) * (SPARK.len() - 1) / 100]
}
