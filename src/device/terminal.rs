//! Terminal-backed panel.

use super::{check_frame_size, Device};
use crate::model::{DeviceError, PanelGeometry, Rotation};
use crossterm::{
    cursor::{Hide, Show},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, buffer::Buffer, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

/// Panel drawn at the top-left corner of a ratatui terminal.
///
/// Generic over backend so tests can use `TestBackend`. If the terminal is
/// smaller than the panel the frame is clipped.
pub struct TerminalDevice<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    panel: PanelGeometry,
}

impl TerminalDevice<CrosstermBackend<Stdout>> {
    /// Take over stdout: raw mode, alternate screen, hidden cursor.
    ///
    /// Pair with [`restore_terminal`] on every exit path.
    pub fn open(panel: PanelGeometry) -> Result<Self, DeviceError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!(
            width = panel.width(),
            height = panel.height(),
            rotate = panel.rotation().value(),
            "Terminal device opened"
        );
        Ok(Self::new(terminal, panel))
    }
}

impl<B> TerminalDevice<B>
where
    B: Backend,
{
    /// Wrap an already configured terminal.
    pub fn new(terminal: Terminal<B>, panel: PanelGeometry) -> Self {
        Self { terminal, panel }
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B> Device for TerminalDevice<B>
where
    B: Backend,
{
    fn rotate(&self) -> Rotation {
        self.panel.rotation()
    }

    fn width(&self) -> u16 {
        self.panel.width()
    }

    fn height(&self) -> u16 {
        self.panel.height()
    }

    fn display(&mut self, frame: &Buffer) -> Result<(), DeviceError> {
        check_frame_size(self, frame)?;
        self.terminal.draw(|f| {
            let target = f.area();
            let width = frame.area.width.min(target.width);
            let height = frame.area.height.min(target.height);
            let buf = f.buffer_mut();
            for y in 0..height {
                for x in 0..width {
                    buf[(target.x + x, target.y + y)] = frame[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }
}

/// Restore terminal to normal state.
///
/// Shows the cursor, disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Show)?;
    disable_raw_mode()?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}
