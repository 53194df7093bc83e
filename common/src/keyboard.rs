use crate::error::TokenError;
use std::fmt;
use std::str::FromStr;

/// Physical position of a key on an ANSI/ISO row-staggered board.
///
/// Row 0 is the number row, rows 1 to 3 the letter rows and row 4 the
/// modifier/space row. `Escape` is parked on row 9 so it never lands inside
/// the main block.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyPos {
    pub row: usize,
    pub col: usize,
}

const fn pos(row: usize, col: usize) -> KeyPos {
    KeyPos { row, col }
}

/// `KeyboardEvent.code` names as recorded by the browser.
const KEY_CODES: &[(&str, KeyPos)] = &[
    ("Escape", pos(9, 0)),
    ("Backquote", pos(0, 0)),
    ("Digit1", pos(0, 1)),
    ("Digit2", pos(0, 2)),
    ("Digit3", pos(0, 3)),
    ("Digit4", pos(0, 4)),
    ("Digit5", pos(0, 5)),
    ("Digit6", pos(0, 6)),
    ("Digit7", pos(0, 7)),
    ("Digit8", pos(0, 8)),
    ("Digit9", pos(0, 9)),
    ("Digit0", pos(0, 10)),
    ("Minus", pos(0, 11)),
    ("Equal", pos(0, 12)),
    ("Backspace", pos(0, 13)),
    ("Tab", pos(1, 0)),
    ("KeyQ", pos(1, 1)),
    ("KeyW", pos(1, 2)),
    ("KeyE", pos(1, 3)),
    ("KeyR", pos(1, 4)),
    ("KeyT", pos(1, 5)),
    ("KeyY", pos(1, 6)),
    ("KeyU", pos(1, 7)),
    ("KeyI", pos(1, 8)),
    ("KeyO", pos(1, 9)),
    ("KeyP", pos(1, 10)),
    ("BracketRight", pos(1, 11)),
    ("BracketLeft", pos(1, 12)),
    ("Enter", pos(1, 13)),
    ("CapsLock", pos(2, 0)),
    ("KeyA", pos(2, 1)),
    ("KeyS", pos(2, 2)),
    ("KeyD", pos(2, 3)),
    ("KeyF", pos(2, 4)),
    ("KeyG", pos(2, 5)),
    ("KeyH", pos(2, 6)),
    ("KeyJ", pos(2, 7)),
    ("KeyK", pos(2, 8)),
    ("KeyL", pos(2, 9)),
    ("Semicolon", pos(2, 10)),
    ("Quote", pos(2, 11)),
    ("Backslash", pos(2, 12)),
    ("ShiftLeft", pos(3, 0)),
    ("IntlBackslash", pos(3, 1)),
    ("KeyZ", pos(3, 2)),
    ("KeyX", pos(3, 3)),
    ("KeyC", pos(3, 4)),
    ("KeyV", pos(3, 5)),
    ("KeyB", pos(3, 6)),
    ("KeyN", pos(3, 7)),
    ("KeyM", pos(3, 8)),
    ("Comma", pos(3, 9)),
    ("Period", pos(3, 10)),
    ("Slash", pos(3, 11)),
    ("ShiftRight", pos(3, 12)),
    ("ControlLeft", pos(4, 0)),
    ("OSLeft", pos(4, 1)),
    ("AltLeft", pos(4, 2)),
    ("Space", pos(4, 3)),
    ("AltRight", pos(4, 4)),
    ("ContextMenu", pos(4, 5)),
    ("ControlRight", pos(4, 6)),
];

impl KeyPos {
    /// Browser key code for this position, if it is on the board.
    pub fn code(&self) -> Option<&'static str> {
        KEY_CODES
            .iter()
            .find(|(_, p)| p == self)
            .map(|(code, _)| *code)
    }
}

impl FromStr for KeyPos {
    type Err = TokenError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        KEY_CODES
            .iter()
            .find(|(name, _)| *name == code)
            .map(|(_, p)| *p)
            .ok_or_else(|| TokenError::UnknownKey(code.to_string()))
    }
}

impl fmt::Display for KeyPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => f.write_str(code),
            None => write!(f, "{},{}", self.row, self.col),
        }
    }
}
