//! The typing engine.
//!
//! [`Typist`] pairs a validated [`Profile`] with a [`Clock`] to wait on and
//! a [`Chance`] to roll. [`Typist::keystroke`] emits one character after a
//! randomized pause; [`Typist::type_line`] drives it across a whole line,
//! slipping in the odd wrong key followed by a backspace.

mod error;
mod keystroke;
mod line;
mod profile;

pub use error::{ConfigError, KeystrokeError, TypeError};
pub use profile::Profile;

use crate::chance::{Chance, RandomChance};
use crate::clock::{Clock, SystemClock};

/// Emulates a human at a keyboard.
#[derive(Debug, Clone)]
pub struct Typist<K = SystemClock, C = RandomChance> {
    profile: Profile,
    clock: K,
    chance: C,
}

impl Typist {
    /// A typist that sleeps in real time and rolls thread-local dice.
    pub fn new(wpm: i64, accuracy: f64) -> Result<Self, ConfigError> {
        let profile = Profile::new(wpm, accuracy)?;
        Ok(Self::with_parts(
            profile,
            SystemClock::new(),
            RandomChance::new(),
        ))
    }
}

impl<K: Clock, C: Chance> Typist<K, C> {
    pub fn with_parts(profile: Profile, clock: K, chance: C) -> Self {
        Self {
            profile,
            clock,
            chance,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
