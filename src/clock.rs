use std::{thread, time::Duration};

/// Time source for the governor's pause loop.
///
/// Injected so tests can drive a pause episode without real delays; the
/// production clock suspends the calling thread.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock sleep via `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<F> Clock for F
where
    F: FnMut(Duration),
{
    fn sleep(&mut self, duration: Duration) {
        self(duration)
    }
}
