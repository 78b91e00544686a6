use std::borrow::Cow;
use std::io::Write;

use super::{KeystrokeError, TypeError, Typist};
use crate::chance::Chance;
use crate::clock::Clock;
use crate::consts::{CORRECTION_MARKER, LINE_TERMINATOR, NO_TYPO_NEIGHBOURS};

impl<K: Clock, C: Chance> Typist<K, C> {
    /// Type `text` followed by a line break (unless it already ends in one).
    ///
    /// Before every character the typist rolls against its accuracy. On a
    /// miss it hits the following key by mistake and backspaces over it,
    /// then carries on with the right one. No slip happens on the last
    /// character or next to a tab or line break.
    ///
    /// The first failed keystroke abandons the rest of the line.
    pub fn type_line<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        text: &str,
    ) -> Result<(), TypeError> {
        let line = if text.ends_with(LINE_TERMINATOR) {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(format!("{text}{LINE_TERMINATOR}"))
        };

        self.type_chars(out, &line).map_err(|source| TypeError {
            line: line.trim().to_string(),
            source,
        })
    }

    fn type_chars<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        line: &str,
    ) -> Result<(), KeystrokeError> {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.slips() {
                if let Some(&next) = chars.peek() {
                    if typo_allowed(ch, next) {
                        self.keystroke(out, next)?;
                        self.keystroke(out, CORRECTION_MARKER)?;
                    }
                }
            }
            self.keystroke(out, ch)?;
        }
        Ok(())
    }

    fn slips(&mut self) -> bool {
        self.profile.accuracy() < self.chance.uniform()
    }
}

fn typo_allowed(current: char, next: char) -> bool {
    !NO_TYPO_NEIGHBOURS.contains(&current) && !NO_TYPO_NEIGHBOURS.contains(&next)
}
