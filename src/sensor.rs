use std::{
    fs,
    path::PathBuf,
};

/// Temperature source consumed by the thermal governor.
///
/// Implementations map any read failure to `0.0` instead of erroring, so the
/// governor always sees a valid-looking Celsius sample. An unreadable sensor
/// therefore reads as "cold" and never triggers a pause.
pub trait TempSensor {
    fn read_celsius(&mut self) -> f64;
}

/// Closures double as sensors in tests and one-off scripts.
impl<F> TempSensor for F
where
    F: FnMut() -> f64,
{
    fn read_celsius(&mut self) -> f64 {
        self()
    }
}

/// Default location of the Linux thermal zone tree.
pub const THERMAL_SYSFS_ROOT: &str = "/sys/class/thermal";

const MAX_ZONES: usize = 10;

/// CPU temperature reader backed by `/sys/class/thermal`.
///
/// Scans zones 0..10 for one whose `type` mentions `cpu` or `soc`, falling
/// back to zone 0. On-disk values are millidegrees Celsius.
#[derive(Debug, Clone)]
pub struct SysfsSensor {
    root: PathBuf,
}

impl SysfsSensor {
    pub fn new() -> Self {
        Self::with_root(THERMAL_SYSFS_ROOT)
    }

    /// Reader over an alternate sysfs root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn zone_type(&self, zone: usize) -> Option<String> {
        let path = self.root.join(format!("thermal_zone{zone}/type"));
        Some(fs::read_to_string(path).ok()?.trim().to_lowercase())
    }

    fn zone_temp(&self, zone: usize) -> Option<f64> {
        let path = self.root.join(format!("thermal_zone{zone}/temp"));
        let raw = fs::read_to_string(path).ok()?;
        let millidegrees: i64 = raw.trim().parse().ok()?;
        Some(millidegrees as f64 / 1000.0)
    }

    fn read(&self) -> Option<f64> {
        for zone in 0..MAX_ZONES {
            let Some(zone_type) = self.zone_type(zone) else {
                continue;
            };
            if zone_type.contains("cpu") || zone_type.contains("soc") {
                // A matched zone is authoritative: an unreadable value is a
                // failed read, not a reason to fall back to another zone.
                return self.zone_temp(zone);
            }
        }
        self.zone_temp(0)
    }
}

impl Default for SysfsSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl TempSensor for SysfsSensor {
    fn read_celsius(&mut self) -> f64 {
        self.read().unwrap_or(0.0)
    }
}
