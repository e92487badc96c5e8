use rootwalk_application::ports::QueryIdSource;
use std::sync::Mutex;

/// Random 16-bit transaction IDs from a fastrand generator.
pub struct FastrandQueryIds {
    rng: Mutex<fastrand::Rng>,
}

impl FastrandQueryIds {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Reproducible sequence, for tests and debugging.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for FastrandQueryIds {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryIdSource for FastrandQueryIds {
    fn next_id(&self) -> u16 {
        match self.rng.lock() {
            Ok(mut rng) => rng.u16(..),
            Err(poisoned) => poisoned.into_inner().u16(..),
        }
    }
}
