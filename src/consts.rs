//! Project-wide constants.

use std::time::Duration;

/// Default typing speed in words per minute.
pub const DEFAULT_WPM: i64 = 75;

/// Default share of keystrokes typed correctly.
pub const DEFAULT_ACCURACY: f64 = 0.97;

/// A "word" in WPM terms.
pub const KEYSTROKES_PER_WORD: u64 = 5;

/// Interval the WPM figure is measured over.
pub const WPM_WINDOW: Duration = Duration::from_secs(60);

/// Line terminator appended to every typed line.
pub const LINE_TERMINATOR: char = '\n';

/// Emitted after a wrong keystroke to take it back.
pub const CORRECTION_MARKER: char = '\u{8}';

/// Characters a typo may never be placed next to. Deleting a tab or a line
/// break with a single backspace doesn't undo it on a terminal.
pub const NO_TYPO_NEIGHBOURS: &[char] = &[LINE_TERMINATOR, '\t'];
