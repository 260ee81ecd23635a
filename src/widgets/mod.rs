//! System-status widgets.
//!
//! Each widget is a [`Render`](crate::render::Render) implementation drawing
//! text into its cell. Most are closures built by a `render` function; the
//! CPU load widget is a struct because it keeps a history of samples.

pub mod clock;
pub mod cpu_load;
pub mod disk;
pub mod hostname;
pub mod memory;
pub mod network;
pub mod uptime;

pub use cpu_load::CpuLoad;

/// Left margin for body text, in cells.
pub const MARGIN: u16 = 1;

/// Row of the first body line, below the title.
pub const BODY_ROW: u16 = 2;

#[cfg(test)]
#[path = "widget_tests.rs"]
mod tests;
