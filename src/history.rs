use std::collections::VecDeque;

/// Bounded FIFO buffer of recent temperature samples in Celsius.
///
/// Owned by the training loop and handed to the thermal governor once per
/// step. Eviction is strict FIFO: the oldest sample leaves first.
#[derive(Debug, Clone)]
pub struct TempHistory {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl TempHistory {
    /// # Panics
    /// When `capacity` is zero, which would make the length invariant
    /// `len <= capacity` unsatisfiable on the first push.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample to the tail, evicting the head when at capacity.
    pub fn push(&mut self, sample: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Arithmetic mean of the current window. 0.0 when empty.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Discards every sample, keeping the capacity.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }
}
