use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use super::{Clock, Interrupted};

/// A [`Clock`] for tests: never sleeps, remembers every delay it was asked
/// for. Clones share the same log, so keep one to inspect after handing the
/// other to a typist.
#[derive(Debug, Clone, Default)]
pub struct RecordingClock {
    delays: Arc<Mutex<Vec<Duration>>>,
    interrupt_at: Option<usize>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`th wait (zero-based) and every one after it.
    pub fn interrupted_at(n: usize) -> Self {
        Self {
            interrupt_at: Some(n),
            ..Self::default()
        }
    }

    /// Delays requested so far, including the one that was interrupted.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clock for RecordingClock {
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted> {
        let mut delays = self.delays.lock().unwrap_or_else(PoisonError::into_inner);
        let index = delays.len();
        delays.push(delay);
        match self.interrupt_at {
            Some(n) if index >= n => Err(Interrupted),
            _ => Ok(()),
        }
    }
}
