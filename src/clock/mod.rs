//! Waiting between keystrokes.
//!
//! The pause before each keystroke is a real, blocking wait on the calling
//! thread. [`Clock`] abstracts it so tests can record the requested delays
//! instead of sitting through them, and so a long-running session can be
//! cut short from another thread via an [`Interrupt`].

pub mod mock;
pub mod system;

use std::time::Duration;

pub use system::{Interrupt, SystemClock};

/// The wait was cut short before it elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wait interrupted")]
pub struct Interrupted;

/// Blocks the caller for a given duration.
pub trait Clock {
    /// Wait for `delay`. A zero delay returns immediately.
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted>;
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted> {
        (**self).sleep(delay)
    }
}
