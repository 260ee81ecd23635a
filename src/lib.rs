//! Hotspot carousel
//!
//! System status widgets on a small display, laid out as a strip wider (or
//! taller) than the panel and scrolled back and forth with a pause on every
//! widget boundary.
//!
//! Pure core: [`scroll`] and [`carousel`] layout. Impure shell: [`device`],
//! [`metrics`] and [`app`].

pub mod app;
pub mod carousel;
pub mod config;
pub mod device;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod render;
pub mod scroll;
pub mod widgets;

#[cfg(test)]
mod test_harness;
