use std::fs;

use serde::Serialize;

use crate::sensor::{SysfsSensor, TempSensor};

/// Point-in-time host resource usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceSnapshot {
    /// Resident set size in MiB, 0.0 when unreadable.
    pub cpu_mem_mb: f64,
    /// CPU package temperature in Celsius, 0.0 when unavailable.
    pub cpu_temp_c: f64,
}

/// Samples host-side resource usage for the training loop's metrics line.
#[derive(Debug)]
pub struct SystemProfiler<S = SysfsSensor> {
    sensor: S,
}

impl SystemProfiler {
    pub fn new() -> Self {
        Self {
            sensor: SysfsSensor::new(),
        }
    }
}

impl Default for SystemProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TempSensor> SystemProfiler<S> {
    pub fn with_sensor(sensor: S) -> Self {
        Self { sensor }
    }

    pub fn capture(&mut self) -> ResourceSnapshot {
        ResourceSnapshot {
            cpu_mem_mb: resident_set_mb().unwrap_or(0.0),
            cpu_temp_c: self.sensor.read_celsius(),
        }
    }
}

/// Resident set of this process from `/proc/self/status` (`VmRSS`, kB).
fn resident_set_mb() -> Option<f64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb / 1024.0)
}
