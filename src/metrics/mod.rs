//! Host metrics consumed by the widgets.
//!
//! [`MetricsProvider`] is the seam between widgets and the operating system.
//! [`SysinfoMetrics`] answers from the live host; [`StaticMetrics`] answers
//! with fixed values so rendering can be tested deterministically.

mod fixed;
mod sysinfo_provider;

pub use fixed::StaticMetrics;
pub use sysinfo_provider::SysinfoMetrics;

use crate::model::MetricsError;
use std::time::Duration;

/// Mount point the disk widget reports on.
pub const ROOT_MOUNT: &str = "/";

/// CPU utilisation sample, percentages in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CpuUsage {
    /// Utilisation of each logical CPU.
    pub per_cpu: Vec<f32>,
    /// Utilisation across all CPUs.
    pub global: f32,
}

/// 1, 5 and 15 minute load averages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadAverage {
    /// One minute.
    pub one: f64,
    /// Five minutes.
    pub five: f64,
    /// Fifteen minutes.
    pub fifteen: f64,
}

/// RAM and swap usage in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    /// Total RAM.
    pub total: u64,
    /// RAM in use.
    pub used: u64,
    /// Total swap.
    pub swap_total: u64,
    /// Swap in use.
    pub swap_used: u64,
}

impl MemoryUsage {
    /// RAM in use as a percentage; 0 when total is 0.
    pub fn used_percent(&self) -> f64 {
        percent(self.used, self.total)
    }

    /// Swap in use as a percentage; 0 when there is no swap.
    pub fn swap_percent(&self) -> f64 {
        percent(self.swap_used, self.swap_total)
    }
}

/// Capacity of one mounted filesystem, in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiskUsage {
    /// Where the filesystem is mounted.
    pub mount_point: String,
    /// Filesystem size.
    pub total: u64,
    /// Space still available.
    pub available: u64,
}

impl DiskUsage {
    /// Bytes in use.
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }

    /// Space in use as a percentage; 0 when total is 0.
    pub fn used_percent(&self) -> f64 {
        percent(self.used(), self.total)
    }
}

/// Cumulative traffic on one network interface, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetIo {
    /// Bytes received since boot.
    pub received: u64,
    /// Bytes transmitted since boot.
    pub transmitted: u64,
}

/// Source of the host facts the widgets display.
///
/// Methods take `&self`; implementations that refresh cached state use
/// interior mutability. Providers are shared between widgets through `Rc`.
pub trait MetricsProvider {
    /// Names of the network interfaces present on the host.
    fn net_if_names(&self) -> Vec<String>;

    /// Traffic counters for `interface`.
    ///
    /// # Errors
    ///
    /// `MetricsError::UnknownInterface` if the interface does not exist.
    fn net_io(&self, interface: &str) -> Result<NetIo, MetricsError>;

    /// The host name.
    ///
    /// # Errors
    ///
    /// `MetricsError::HostnameUnavailable` if the OS does not report one.
    fn hostname(&self) -> Result<String, MetricsError>;

    /// Current CPU utilisation.
    fn cpu_load(&self) -> CpuUsage;

    /// System load averages.
    fn load_average(&self) -> LoadAverage;

    /// Time since boot.
    fn uptime(&self) -> Duration;

    /// RAM and swap usage.
    fn memory(&self) -> MemoryUsage;

    /// Usage of the filesystem mounted at `mount_point`, or of the first
    /// listed disk when nothing is mounted there.
    ///
    /// # Errors
    ///
    /// `MetricsError::NoDisks` if the host lists no disks at all.
    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage, MetricsError>;
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_percentages() {
        let mem = MemoryUsage {
            total: 200,
            used: 50,
            swap_total: 0,
            swap_used: 0,
        };
        assert_eq!(mem.used_percent(), 25.0);
        assert_eq!(mem.swap_percent(), 0.0);
    }

    #[test]
    fn disk_used_never_underflows() {
        let disk = DiskUsage {
            mount_point: "/".into(),
            total: 10,
            available: 20,
        };
        assert_eq!(disk.used(), 0);
        assert_eq!(disk.used_percent(), 0.0);
    }

    #[test]
    fn disk_percent() {
        let disk = DiskUsage {
            mount_point: "/".into(),
            total: 1000,
            available: 250,
        };
        assert_eq!(disk.used_percent(), 75.0);
    }
}
