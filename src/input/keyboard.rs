//! Keyboard event types.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags, sampled at key-down time.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Either Shift key.
        const SHIFT = 0b0000_0001;
        /// Either Control key.
        const CTRL = 0b0000_0010;
        /// Either Alt/Option key.
        const ALT = 0b0000_0100;
        /// Either Super/Meta/Windows key.
        const SUPER = 0b0000_1000;
        /// Caps Lock latched on.
        const CAPS_LOCK = 0b0001_0000;
    }
}

/// A key identity.
///
/// The same catalog serves two roles on a [`KeyEvent`]: the layout code
/// (what the user's active keyboard layout makes of the key) and the
/// hardware code (the physical key, named as on a reference US layout).
/// Printable keys use [`KeyCode::Char`] with the unshifted lowercase
/// character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable key: letters a-z, digits, punctuation, space.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Caps Lock key.
    CapsLock,
    /// Function key (F1-F12).
    F(u8),
    /// Print Screen key.
    PrintScreen,
    /// Scroll Lock key.
    ScrollLock,
    /// Pause key.
    Pause,
    /// Insert key.
    Insert,
    /// Home key.
    Home,
    /// Page Up key.
    PageUp,
    /// Delete key.
    Delete,
    /// End key.
    End,
    /// Page Down key.
    PageDown,
    /// Right arrow key.
    Right,
    /// Left arrow key.
    Left,
    /// Down arrow key.
    Down,
    /// Up arrow key.
    Up,
    /// Num Lock key.
    NumLock,
    /// Keypad digit key (0-9).
    Kp(u8),
    /// Keypad divide.
    KpDivide,
    /// Keypad multiply.
    KpMultiply,
    /// Keypad minus.
    KpMinus,
    /// Keypad plus.
    KpPlus,
    /// Keypad enter.
    KpEnter,
    /// Keypad decimal point.
    KpDecimal,
    /// Keypad equals.
    KpEquals,
    /// Left Control key.
    LeftCtrl,
    /// Left Shift key.
    LeftShift,
    /// Left Alt key.
    LeftAlt,
    /// Left Super key.
    LeftSuper,
    /// Right Control key.
    RightCtrl,
    /// Right Shift key.
    RightShift,
    /// Right Alt key.
    RightAlt,
    /// Right Super key.
    RightSuper,
    /// No mapping from the native code.
    Unknown,
}

impl KeyCode {
    /// Check if this is a printable character key.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Get the character if this is a printable key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Check if this is a navigation key (arrows, home, end, page up/down).
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Left
                | Self::Right
                | Self::Up
                | Self::Down
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }
}

/// A keyboard event carrying both key identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Layout-dependent key code (what the layout produces).
    pub layout: KeyCode,
    /// Layout-independent hardware code (the physical key).
    pub hardware: KeyCode,
    /// Modifier keys held; empty on key-up events.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a key event.
    #[must_use]
    pub fn new(layout: KeyCode, hardware: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            layout,
            hardware,
            modifiers,
        }
    }

    /// A key event whose layout and hardware codes agree, no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, code, KeyModifiers::empty())
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Check if this is Ctrl plus a given character, by layout code.
    #[must_use]
    pub fn is_ctrl_char(&self, c: char) -> bool {
        self.ctrl() && self.layout == KeyCode::Char(c)
    }
}
