//! Typing a whole input stream, line by line.

use std::io::{self, BufRead, Write};

use crate::chance::Chance;
use crate::clock::Clock;
use crate::typist::{KeystrokeError, TypeError, Typist};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("cannot read input")]
    Read(#[source] io::Error),
    #[error(transparent)]
    Type(#[from] TypeError),
}

impl SessionError {
    /// The session stopped because its clock was interrupted.
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Self::Type(TypeError {
                source: KeystrokeError::Interrupted { .. },
                ..
            })
        )
    }
}

/// Type every line of `input` to `out`, one after the other.
///
/// Lines lose their `\n` or `\r\n` on the way in and get a `\n` back from
/// [`Typist::type_line`]. Stops at the first failure. Returns the number of
/// lines typed.
pub fn type_lines<K, C, R, W>(
    typist: &mut Typist<K, C>,
    input: R,
    out: &mut W,
) -> Result<usize, SessionError>
where
    K: Clock,
    C: Chance,
    R: BufRead,
    W: Write + ?Sized,
{
    let mut typed = 0;
    for line in input.lines() {
        let line = line.map_err(SessionError::Read)?;
        typist.type_line(out, &line)?;
        typed += 1;
    }
    Ok(typed)
}
