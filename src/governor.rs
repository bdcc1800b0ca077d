use log::debug;

use crate::{
    clock::Clock, config::ThermalConfig, dist::print0, history::TempHistory, sensor::TempSensor,
};

/// Phases of a thermal episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalState {
    /// Temperatures nominal, training proceeds.
    Running,
    /// Rolling mean crossed the pause threshold; polling until cool.
    Pausing,
    /// Resume condition met; rolling history reset pending.
    Cooldown,
}

/// Hysteresis-based pause/resume controller for an overheating host.
///
/// The training loop calls [`check_and_pause`](Self::check_and_pause) once
/// per step with its latest sensor reading. While paused the governor polls
/// the sensor itself through the injected clock, so the whole episode is
/// deterministic under test collaborators.
pub struct ThermalGovernor<S, C> {
    cfg: ThermalConfig,
    sensor: S,
    clock: C,
    state: ThermalState,
}

impl<S, C> ThermalGovernor<S, C> {
    /// # Panics
    /// When `cfg` fails [`ThermalConfig::validate`].
    pub fn new(cfg: ThermalConfig, sensor: S, clock: C) -> Self {
        cfg.validate();
        Self {
            cfg,
            sensor,
            clock,
            state: ThermalState::Running,
        }
    }

    pub fn state(&self) -> ThermalState {
        self.state
    }

    pub fn config(&self) -> &ThermalConfig {
        &self.cfg
    }

    /// Empty rolling history sized for this governor's configuration.
    pub fn new_history(&self) -> TempHistory {
        TempHistory::new(self.cfg.history_size)
    }
}

impl<S, C> ThermalGovernor<S, C>
where
    S: TempSensor,
    C: Clock,
{
    /// Records `current_temp` and, if the rolling mean is over the pause
    /// threshold, blocks until the host cools down.
    ///
    /// Returns `true` when a pause happened. The rolling history is cleared
    /// on the way out: post-pause readings are not comparable to the
    /// pre-pause baseline. Returns `false` when training may continue and
    /// only the new sample was recorded.
    ///
    /// The pause loop has no retry cap or timeout. Staying blocked beats
    /// resuming on an overheated host, so only the resume condition (more
    /// than `min_pause_samples` readings averaging below `resume_threshold`)
    /// ends it.
    pub fn check_and_pause(&mut self, history: &mut TempHistory, current_temp: f64) -> bool {
        history.push(current_temp);

        let avg = history.mean();
        if avg <= self.cfg.pause_threshold {
            return false;
        }

        debug!(avg = avg, threshold = self.cfg.pause_threshold; "rolling mean over pause threshold");
        self.state = ThermalState::Pausing;
        print0(format!(
            "WARNING: CPU overheating (avg: {avg:.1}C). Pausing training..."
        ));

        // Seed with the triggering mean so the buffer is never empty.
        let mut pause_history = TempHistory::new(self.cfg.pause_window);
        pause_history.push(avg);

        while self.state == ThermalState::Pausing {
            self.clock.sleep(self.cfg.poll_interval);
            let temp = self.sensor.read_celsius();
            pause_history.push(temp);
            let pause_avg = pause_history.mean();
            print0(format!(
                "CPU temp: {temp:.1}C (avg of last {}: {pause_avg:.1}C). Waiting for < {}C...",
                pause_history.len(),
                self.cfg.resume_threshold,
            ));
            if pause_history.len() > self.cfg.min_pause_samples
                && pause_avg < self.cfg.resume_threshold
            {
                self.state = ThermalState::Cooldown;
            }
        }

        print0("CPU cooled down. Resuming training...");
        history.clear();
        self.state = ThermalState::Running;
        true
    }
}
