//! The library's event type.
//!
//! One tagged union covers the whole catalog; "no event" is expressed as
//! `Option::None` by every polling surface, so a real event can never be
//! confused with the absence of one.

use crate::input::keyboard::KeyEvent;

/// A pointer button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button. Also the fallback for button ids the backend does not
    /// recognize.
    #[default]
    Left,
    /// Middle button (wheel click).
    Middle,
    /// Right button.
    Right,
}

/// A translated input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The user asked to close the window.
    CloseWindow,
    /// The window gained input focus.
    FocusGained,
    /// The window lost input focus.
    FocusLost,
    /// A key went down. Modifier state is stamped on this event only.
    KeyDown(KeyEvent),
    /// A key came up.
    KeyUp(KeyEvent),
    /// The input method produced a character.
    Character(char),
    /// The pointer moved over a grid cell.
    MouseMoved {
        /// Cell column under the pointer.
        column: u32,
        /// Cell row under the pointer.
        row: u32,
    },
    /// A pointer button went down.
    MouseDown(MouseButton),
    /// A pointer button came up.
    MouseUp(MouseButton),
    /// Vertical wheel motion, sign preserved from the native event.
    MouseWheel(i32),
    /// The pointer entered the window.
    MouseEnter,
    /// The pointer left the window.
    MouseExit,
}

impl Event {
    /// Check if this is a keyboard event (down or up).
    #[must_use]
    pub fn is_key(&self) -> bool {
        matches!(self, Self::KeyDown(_) | Self::KeyUp(_))
    }

    /// Check if this is a pointer event.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseMoved { .. }
                | Self::MouseDown(_)
                | Self::MouseUp(_)
                | Self::MouseWheel(_)
                | Self::MouseEnter
                | Self::MouseExit
        )
    }

    /// Get the key event if this is a key-down or key-up.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::KeyDown(e) | Self::KeyUp(e) => Some(e),
            _ => None,
        }
    }

    /// Get the typed character if this is a character event.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        match self {
            Self::Character(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the cell coordinate if this is a pointer-move event.
    #[must_use]
    pub fn mouse_cell(&self) -> Option<(u32, u32)> {
        match self {
            Self::MouseMoved { column, row } => Some((*column, *row)),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::KeyDown(e)
    }
}
