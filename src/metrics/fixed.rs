//! Provider with canned answers.

use super::{CpuUsage, DiskUsage, LoadAverage, MemoryUsage, MetricsProvider, NetIo};
use crate::model::MetricsError;
use std::collections::BTreeMap;
use std::time::Duration;

/// Provider returning fixed values, for tests, benchmarks and demos.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMetrics {
    /// Interfaces and their counters.
    pub interfaces: BTreeMap<String, NetIo>,
    /// Reported host name; `None` reports `HostnameUnavailable`.
    pub hostname: Option<String>,
    /// CPU sample returned on every call.
    pub cpu: CpuUsage,
    /// Load averages.
    pub load: LoadAverage,
    /// Uptime.
    pub uptime: Duration,
    /// Memory usage.
    pub memory: MemoryUsage,
    /// Disks; the first is used when the requested mount is missing.
    pub disks: Vec<DiskUsage>,
}

impl Default for StaticMetrics {
    fn default() -> Self {
        let mut interfaces = BTreeMap::new();
        interfaces.insert(
            "eth0".to_string(),
            NetIo {
                received: 3 * 1024 * 1024,
                transmitted: 512 * 1024,
            },
        );
        interfaces.insert("lo".to_string(), NetIo::default());

        Self {
            interfaces,
            hostname: Some("raspberrypi".to_string()),
            cpu: CpuUsage {
                per_cpu: vec![10.0, 30.0],
                global: 20.0,
            },
            load: LoadAverage {
                one: 0.5,
                five: 0.25,
                fifteen: 0.1,
            },
            uptime: Duration::from_secs(90_061),
            memory: MemoryUsage {
                total: 1024,
                used: 256,
                swap_total: 512,
                swap_used: 0,
            },
            disks: vec![DiskUsage {
                mount_point: "/".to_string(),
                total: 32 * 1024 * 1024 * 1024,
                available: 8 * 1024 * 1024 * 1024,
            }],
        }
    }
}

impl StaticMetrics {
    /// Replace the interface table with `names`, all with zero traffic.
    pub fn with_interfaces<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = names
            .into_iter()
            .map(|name| (name.into(), NetIo::default()))
            .collect();
        self
    }
}

impl MetricsProvider for StaticMetrics {
    fn net_if_names(&self) -> Vec<String> {
        self.interfaces.keys().cloned().collect()
    }

    fn net_io(&self, interface: &str) -> Result<NetIo, MetricsError> {
        self.interfaces
            .get(interface)
            .copied()
            .ok_or_else(|| MetricsError::UnknownInterface(interface.to_string()))
    }

    fn hostname(&self) -> Result<String, MetricsError> {
        self.hostname.clone().ok_or(MetricsError::HostnameUnavailable)
    }

    fn cpu_load(&self) -> CpuUsage {
        self.cpu.clone()
    }

    fn load_average(&self) -> LoadAverage {
        self.load
    }

    fn uptime(&self) -> Duration {
        self.uptime
    }

    fn memory(&self) -> MemoryUsage {
        self.memory
    }

    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage, MetricsError> {
        self.disks
            .iter()
            .find(|disk| disk.mount_point == mount_point)
            .or_else(|| self.disks.first())
            .cloned()
            .ok_or(MetricsError::NoDisks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_interface_is_an_error() {
        let metrics = StaticMetrics::default();
        assert_eq!(
            metrics.net_io("wlan0"),
            Err(MetricsError::UnknownInterface("wlan0".into()))
        );
    }

    #[test]
    fn with_interfaces_replaces_table() {
        let metrics = StaticMetrics::default().with_interfaces(["en0", "lo0"]);
        assert_eq!(metrics.net_if_names(), vec!["en0", "lo0"]);
        assert_eq!(metrics.net_io("en0"), Ok(NetIo::default()));
    }

    #[test]
    fn disk_falls_back_to_first() {
        let metrics = StaticMetrics::default();
        let disk = metrics.disk_usage("/mnt/nothing").unwrap();
        assert_eq!(disk.mount_point, "/");
    }

    #[test]
    fn no_disks_is_an_error() {
        let metrics = StaticMetrics {
            disks: Vec::new(),
            ..StaticMetrics::default()
        };
        assert_eq!(metrics.disk_usage("/"), Err(MetricsError::NoDisks));
    }

    #[test]
    fn missing_hostname_is_an_error() {
        let metrics = StaticMetrics {
            hostname: None,
            ..StaticMetrics::default()
        };
        assert_eq!(metrics.hostname(), Err(MetricsError::HostnameUnavailable));
    }
}
