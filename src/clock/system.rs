use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use super::{Clock, Interrupted};

/// Shared flag that wakes every [`SystemClock`] waiting on it.
///
/// Clones share the same flag. Once triggered it stays triggered, so every
/// later wait fails immediately as well.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the flag and wake all waiters.
    pub fn trigger(&self) {
        let (flag, wakeup) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner) = true;
        wakeup.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        let (flag, _) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait up to `timeout`. Returns `true` if the flag was tripped.
    fn wait(&self, timeout: Duration) -> bool {
        let (flag, wakeup) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = wakeup
            .wait_timeout_while(guard, timeout, |tripped| !*tripped)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// Real-time [`Clock`], optionally interruptible.
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    interrupt: Option<Interrupt>,
}

impl SystemClock {
    /// A clock that always sleeps the full duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock whose waits end early once `interrupt` is triggered.
    pub fn interruptible(interrupt: Interrupt) -> Self {
        Self {
            interrupt: Some(interrupt),
        }
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted> {
        match &self.interrupt {
            Some(interrupt) => {
                if interrupt.wait(delay) {
                    Err(Interrupted)
                } else {
                    Ok(())
                }
            }
            None => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                Ok(())
            }
        }
    }
}
