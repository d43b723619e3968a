use crate::utils::Float;
use std::time::Instant;

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Creates a started timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed seconds.
    pub fn elapsed_secs_as_float(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64()
    }

    /// Returns elapsed milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }
}
