use std::io::Write;

use super::{KeystrokeError, Typist};
use crate::chance::Chance;
use crate::clock::Clock;

impl<K: Clock, C: Chance> Typist<K, C> {
    /// Wait a randomized interval, then write `ch` as UTF-8 to `out`.
    ///
    /// The bytes go out in a single `write_all` and are flushed straight
    /// away, so a line-buffered sink shows each keystroke as it lands.
    /// Nothing is written if the wait is interrupted.
    pub fn keystroke<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        ch: char,
    ) -> Result<(), KeystrokeError> {
        let delay = self.profile.delay(self.chance.standard_normal());
        self.clock
            .sleep(delay)
            .map_err(|_| KeystrokeError::Interrupted { ch })?;

        let mut buf = [0u8; 4];
        let bytes = ch.encode_utf8(&mut buf).as_bytes();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|source| KeystrokeError::Write { ch, source })
    }
}
