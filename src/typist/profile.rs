use std::time::Duration;

use super::ConfigError;
use crate::consts::{KEYSTROKES_PER_WORD, WPM_WINDOW};

/// How fast and how accurately to type.
///
/// Only [`Profile::new`] builds one, so every profile in existence has a
/// speed of at least one WPM and an accuracy within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    wpm: u64,
    accuracy: f64,
}

impl Profile {
    /// Validate speed first, then accuracy. NaN accuracy is out of range.
    pub fn new(wpm: i64, accuracy: f64) -> Result<Self, ConfigError> {
        if wpm < 1 {
            return Err(ConfigError::InvalidSpeed(wpm));
        }
        if !(0.0..=1.0).contains(&accuracy) {
            return Err(ConfigError::InvalidAccuracy(accuracy));
        }
        Ok(Self {
            wpm: wpm.unsigned_abs(),
            accuracy,
        })
    }

    /// Words per minute; one word is five keystrokes.
    pub fn wpm(&self) -> u64 {
        self.wpm
    }

    /// Probability that a keystroke is typed without a slip.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Average pause between two keystrokes.
    pub fn mean_interval(&self) -> Duration {
        Duration::from_secs_f64(self.mean_secs())
    }

    /// Pause for a standard-normal draw `z`: `mean + z * mean / 3`.
    /// Draws that land below zero mean no pause at all.
    pub fn delay(&self, z: f64) -> Duration {
        let mean = self.mean_secs();
        let sigma = mean / 3.0;
        Duration::try_from_secs_f64(mean + z * sigma).unwrap_or(Duration::ZERO)
    }

    fn mean_secs(&self) -> f64 {
        WPM_WINDOW.as_secs_f64() / (self.wpm as f64 * KEYSTROKES_PER_WORD as f64)
    }
}
