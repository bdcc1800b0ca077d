use std::time::Duration;

/// Thresholds and window sizes for the thermal governor.
#[derive(Debug, Clone)]
pub struct ThermalConfig {
    /// Pause once the rolling mean exceeds this (Celsius).
    pub pause_threshold: f64,
    /// Resume once the pause-phase mean drops below this (Celsius).
    pub resume_threshold: f64,
    /// Capacity of the caller-owned rolling history.
    pub history_size: usize,
    /// Delay between sensor polls while paused.
    pub poll_interval: Duration,
    /// Capacity of the pause-phase buffer.
    pub pause_window: usize,
    /// Pause-phase samples required before resume is considered.
    pub min_pause_samples: usize,
}

impl ThermalConfig {
    /// Rejects degenerate window capacities.
    ///
    /// # Panics
    /// When `history_size` or `pause_window` is zero.
    pub fn validate(&self) {
        assert!(self.history_size > 0, "history_size must be non-zero");
        assert!(self.pause_window > 0, "pause_window must be non-zero");
    }
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            pause_threshold: 91.0,
            resume_threshold: 80.0,
            history_size: 20,
            poll_interval: Duration::from_secs(10),
            pause_window: 5,
            min_pause_samples: 2,
        }
    }
}
