//! Interactive entry point: terminal panel, live metrics and key handling.

use crate::carousel::Carousel;
use crate::config::ResolvedConfig;
use crate::device::{restore_terminal, Device, TerminalDevice};
use crate::metrics::{MetricsProvider, SysinfoMetrics};
use crate::model::AppError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tracing::{error, info};

/// Whether `key` ends the program: `q`, `Esc` or Ctrl+C.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Wait up to `timeout` for terminal input; `true` if it was an interrupt key.
///
/// Other input ends the wait early and is discarded.
fn wait_for_interrupt(timeout: Duration) -> io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(is_interrupt(&key));
        }
    }
    Ok(false)
}

/// Run the carousel in the current terminal until interrupted.
///
/// Stops after `frame_limit` frames when given. The terminal is restored on
/// every exit path. Logging must be initialized by the caller.
///
/// # Errors
///
/// Terminal setup failures and the first widget, canvas or display error.
pub fn run(config: &ResolvedConfig, frame_limit: Option<u64>) -> Result<(), AppError> {
    let device = match TerminalDevice::open(config.panel()) {
        Ok(device) => device,
        Err(e) => {
            // Raw mode may already be on.
            let _ = restore_terminal();
            return Err(e.into());
        }
    };

    let metrics: Rc<dyn MetricsProvider> = Rc::new(SysinfoMetrics::new());
    let delay = config.frame_delay();
    let result = run_on(device, metrics, config, frame_limit, || {
        wait_for_interrupt(delay)
    });

    finish(result, restore_terminal())
}

/// Combine the run outcome with terminal restoration.
///
/// A carousel failure takes precedence over a restore failure; both are logged.
fn finish(result: Result<(), AppError>, restored: io::Result<()>) -> Result<(), AppError> {
    if let Err(e) = &result {
        error!(error = %e, "Carousel failed");
    }
    match (result, restored) {
        (Err(e), Err(restore)) => {
            error!(error = %restore, "Failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => Ok(restored?),
    }
}

/// Build the carousel on `device` and drive it with `should_stop` pacing frames.
///
/// # Errors
///
/// See [`Carousel::new`] and [`Carousel::drive`].
pub fn run_on<D, F>(
    device: D,
    metrics: Rc<dyn MetricsProvider>,
    config: &ResolvedConfig,
    frame_limit: Option<u64>,
    should_stop: F,
) -> Result<(), AppError>
where
    D: Device,
    F: FnMut() -> io::Result<bool>,
{
    let mut carousel = Carousel::new(device, metrics, &config.interfaces)?;
    let frames = carousel.drive(frame_limit, should_stop)?;
    info!(frames, "Carousel stopped");
    Ok(())
}
