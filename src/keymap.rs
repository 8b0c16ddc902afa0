//! Keyboard bindings for the search surface.
//!
//! A [`Shortcut`] is parsed from a config string such as `"ctrl+k"` and
//! toggles the surface from anywhere. The rest of the mapping depends on
//! whether the surface is open: a bare `/` opens it (unless some other text
//! input has focus), and the navigation keys only mean anything while the
//! result list is showing.

use std::str::FromStr;

use crate::error::{WyrmseekError, WyrmseekResult};
use crate::surface::SurfaceEvent;

/// A pressed key, already decoded by the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Escape,
}

/// Modifier state at the time of the key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.meta)
    }
}

/// A modifier combination plus one character key, e.g. `ctrl+k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub modifiers: Modifiers,
    pub key: char,
}

impl Shortcut {
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        match key {
            Key::Char(c) => *modifiers == self.modifiers && c.eq_ignore_ascii_case(&self.key),
            _ => false,
        }
    }
}

impl FromStr for Shortcut {
    type Err = WyrmseekError;

    /// Parse a `+`-separated binding: any number of modifier tokens followed
    /// by exactly one key token. Tokens are case-insensitive.
    fn from_str(s: &str) -> WyrmseekResult<Self> {
        let mut modifiers = Modifiers::default();
        let mut key = None;

        for token in s.split('+') {
            let token = token.trim();
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                "space" => key = Some(' '),
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => key = Some(c),
                        _ => {
                            return Err(WyrmseekError::ShortcutUnknownToken(token.to_string()));
                        }
                    }
                }
            }
        }

        match key {
            Some(key) => Ok(Shortcut { modifiers, key }),
            None => Err(WyrmseekError::ShortcutMissingKey(s.to_string())),
        }
    }
}

/// Resolves raw key presses into [`SurfaceEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub shortcut: Shortcut,
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap {
            shortcut: Shortcut {
                modifiers: Modifiers {
                    ctrl: true,
                    ..Modifiers::default()
                },
                key: 'k',
            },
        }
    }
}

impl Keymap {
    pub fn new(shortcut: Shortcut) -> Self {
        Keymap { shortcut }
    }

    /// Translate one key press. `editing_elsewhere` suppresses the bare `/`
    /// opener while the user is typing into some other text input; the
    /// configured shortcut works regardless of focus.
    pub fn map(
        &self,
        key: &Key,
        modifiers: &Modifiers,
        surface_open: bool,
        editing_elsewhere: bool,
    ) -> Option<SurfaceEvent> {
        if self.shortcut.matches(key, modifiers) {
            return Some(SurfaceEvent::Toggle);
        }

        if !surface_open {
            return match key {
                Key::Char('/') if modifiers.is_empty() && !editing_elsewhere => {
                    Some(SurfaceEvent::Show)
                }
                _ => None,
            };
        }

        match key {
            Key::Down => Some(SurfaceEvent::SelectNext),
            Key::Up => Some(SurfaceEvent::SelectPrev),
            Key::Enter => Some(SurfaceEvent::Confirm),
            Key::Escape => Some(SurfaceEvent::Hide),
            // Printable keys belong to the query input, not the keymap.
            Key::Char(_) => None,
        }
    }
}
