//! Live metrics from the `sysinfo` crate.

use super::{CpuUsage, DiskUsage, LoadAverage, MemoryUsage, MetricsProvider, NetIo};
use crate::model::MetricsError;
use std::cell::RefCell;
use std::time::Duration;
use sysinfo::{Disks, Networks, System};
use tracing::trace;

/// Metrics read from the running host.
///
/// Each query refreshes only the part of the sysinfo state it needs.
/// CPU utilisation is measured between consecutive `cpu_load` calls, so the
/// first sample after construction reads 0.
pub struct SysinfoMetrics {
    system: RefCell<System>,
    networks: RefCell<Networks>,
    disks: RefCell<Disks>,
}

impl SysinfoMetrics {
    /// Enumerate networks and disks and take an initial CPU sample.
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        system.refresh_memory();
        Self {
            system: RefCell::new(system),
            networks: RefCell::new(Networks::new_with_refreshed_list()),
            disks: RefCell::new(Disks::new_with_refreshed_list()),
        }
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoMetrics {
    fn net_if_names(&self) -> Vec<String> {
        let networks = self.networks.borrow();
        networks.iter().map(|(name, _)| name.clone()).collect()
    }

    fn net_io(&self, interface: &str) -> Result<NetIo, MetricsError> {
        let mut networks = self.networks.borrow_mut();
        networks.refresh();
        networks
            .iter()
            .find(|(name, _)| name.as_str() == interface)
            .map(|(_, data)| NetIo {
                received: data.total_received(),
                transmitted: data.total_transmitted(),
            })
            .ok_or_else(|| MetricsError::UnknownInterface(interface.to_string()))
    }

    fn hostname(&self) -> Result<String, MetricsError> {
        System::host_name().ok_or(MetricsError::HostnameUnavailable)
    }

    fn cpu_load(&self) -> CpuUsage {
        let mut system = self.system.borrow_mut();
        system.refresh_cpu();
        let per_cpu: Vec<f32> = system.cpus().iter().map(|cpu| cpu.cpu_usage()).collect();
        let global = system.global_cpu_info().cpu_usage();
        trace!(global, cpus = per_cpu.len(), "CPU sample");
        CpuUsage { per_cpu, global }
    }

    fn load_average(&self) -> LoadAverage {
        let load = System::load_average();
        LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        }
    }

    fn uptime(&self) -> Duration {
        Duration::from_secs(System::uptime())
    }

    fn memory(&self) -> MemoryUsage {
        let mut system = self.system.borrow_mut();
        system.refresh_memory();
        MemoryUsage {
            total: system.total_memory(),
            used: system.used_memory(),
            swap_total: system.total_swap(),
            swap_used: system.used_swap(),
        }
    }

    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage, MetricsError> {
        let mut disks = self.disks.borrow_mut();
        disks.refresh();
        let list = disks.list();
        let disk = list
            .iter()
            .find(|disk| disk.mount_point() == std::path::Path::new(mount_point))
            .or_else(|| list.first())
            .ok_or(MetricsError::NoDisks)?;
        Ok(DiskUsage {
            mount_point: disk.mount_point().display().to_string(),
            total: disk.total_space(),
            available: disk.available_space(),
        })
    }
}
