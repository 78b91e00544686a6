//! Human-like typing emulation.
//!
//! A [`Typist`] writes text one keystroke at a time, waiting a normally
//! distributed interval between keystrokes and now and then hitting the
//! wrong key before correcting it with a backspace.

pub mod chance;
pub mod clock;
pub mod config;
pub mod consts;
pub mod logging;
pub mod session;
pub mod typist;

pub use typist::{ConfigError, KeystrokeError, Profile, TypeError, Typist};
