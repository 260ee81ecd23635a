//! Uptime widget.

use super::{BODY_ROW, MARGIN};
use crate::metrics::MetricsProvider;
use crate::model::RenderError;
use crate::render::text::{text_at, title_text};
use crate::render::Render;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::rc::Rc;
use std::time::Duration;

/// Time since boot plus the load averages.
pub fn render(metrics: Rc<dyn MetricsProvider>) -> impl Render {
    move |buf: &mut Buffer, area: Rect| -> Result<(), RenderError> {
        let load = metrics.load_average();
        title_text(buf, area, 0, "Uptime");
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW,
            &format_uptime(metrics.uptime()),
            Style::default(),
        );
        text_at(
            buf,
            area,
            MARGIN,
            BODY_ROW + 1,
            &format!("{:.2} {:.2} {:.2}", load.one, load.five, load.fifteen),
            Style::default(),
        );
        Ok(())
    }
}

/// `H:MM:SS`, prefixed with `1 day, ` or `N days, ` once past a day.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_a_day() {
        assert_eq!(format_uptime(Duration::from_secs(62)), "0:01:02");
        assert_eq!(format_uptime(Duration::from_secs(86_399)), "23:59:59");
    }

    #[test]
    fn one_day_is_singular() {
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1 day, 1:01:01");
    }

    #[test]
    fn several_days() {
        assert_eq!(
            format_uptime(Duration::from_secs(3 * 86_400 + 7)),
            "3 days, 0:00:07"
        );
    }
}
