use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps data which is shared across one solver execution.
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A logging facility.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
