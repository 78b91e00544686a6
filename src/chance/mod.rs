//! Sources of randomness for the typist.
//!
//! Every random decision the typist makes (whether to fumble a key, how
//! long to pause) goes through [`Chance`], so tests can swap in a
//! [`ScriptedChance`](mock::ScriptedChance) and get the same keystrokes
//! every run.

pub mod mock;
pub mod random;

pub use random::RandomChance;

/// Where the typist's dice come from.
pub trait Chance {
    /// A uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A draw from the standard normal distribution (mean 0, deviation 1).
    fn standard_normal(&mut self) -> f64;
}

impl<T: Chance + ?Sized> Chance for Box<T> {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }
}
