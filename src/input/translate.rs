//! Native-to-library event translation.
//!
//! A pure mapping: one native event record in, at most one [`Event`] out.
//! Untranslatable input is dropped rather than reported — an unknown
//! native event must never halt the caller's loop. The flush side effect
//! on focus/enter/leave events lives in the terminal context, which owns
//! the frame; this module stays stateless.

use crate::backend::{NativeEvent, keysym, mods, scancode as sc};
use crate::input::event::{Event, MouseButton};
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Byte length of a UTF-8 sequence, indexed by its leading byte.
///
/// Malformed leading bytes decode as single bytes (and then fail the
/// codepoint check), matching the termbox-lineage tables this is built
/// from.
const UTF8_LENGTH: [u8; 256] = {
    let mut table = [1u8; 256];
    let mut i = 0xc0;
    while i < 0x100 {
        table[i] = match i {
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            0xf8..=0xfb => 5,
            0xfc..=0xfd => 6,
            _ => 1,
        };
        i += 1;
    }
    table
};

/// Payload mask for the leading byte of a sequence of each length.
const UTF8_MASK: [u8; 6] = [0x7f, 0x1f, 0x0f, 0x07, 0x03, 0x01];

/// Decode the first codepoint of a UTF-8 byte sequence.
///
/// Returns `None` on truncated or invalid input and on NUL.
#[must_use]
pub(crate) fn decode_first_codepoint(bytes: &[u8]) -> Option<char> {
    let first = *bytes.first()?;
    if first == 0 {
        return None;
    }
    let len = UTF8_LENGTH[first as usize] as usize;
    if bytes.len() < len {
        return None;
    }
    let mut code = u32::from(first & UTF8_MASK[len - 1]);
    for &byte in &bytes[1..len] {
        code = (code << 6) | u32::from(byte & 0x3f);
    }
    char::from_u32(code)
}

/// Map a layout keysym to a key code.
///
/// Printable keysyms are their ASCII value; non-printable ones are the
/// hardware scancode with a flag bit set, so the two tables share the
/// non-printable catalog.
#[must_use]
pub(crate) fn layout_key(keysym_code: u32) -> KeyCode {
    match keysym_code {
        keysym::RETURN => KeyCode::Enter,
        keysym::ESCAPE => KeyCode::Esc,
        keysym::BACKSPACE => KeyCode::Backspace,
        keysym::TAB => KeyCode::Tab,
        keysym::DELETE => KeyCode::Delete,
        0x20..=0x7e => KeyCode::Char(keysym_code as u8 as char),
        code if code & keysym::SCANCODE_FLAG != 0 => {
            hardware_key(code & !keysym::SCANCODE_FLAG)
        }
        _ => KeyCode::Unknown,
    }
}

/// Map a hardware scancode to a key code.
#[must_use]
pub(crate) fn hardware_key(code: u32) -> KeyCode {
    match code {
        sc::A..=sc::Z => KeyCode::Char((b'a' + (code - sc::A) as u8) as char),
        sc::DIGIT_1..=sc::DIGIT_9 => KeyCode::Char((b'1' + (code - sc::DIGIT_1) as u8) as char),
        sc::DIGIT_0 => KeyCode::Char('0'),
        sc::RETURN => KeyCode::Enter,
        sc::ESCAPE => KeyCode::Esc,
        sc::BACKSPACE => KeyCode::Backspace,
        sc::TAB => KeyCode::Tab,
        sc::SPACE => KeyCode::Char(' '),
        sc::MINUS => KeyCode::Char('-'),
        sc::EQUALS => KeyCode::Char('='),
        sc::LEFTBRACKET => KeyCode::Char('['),
        sc::RIGHTBRACKET => KeyCode::Char(']'),
        sc::BACKSLASH => KeyCode::Char('\\'),
        sc::SEMICOLON => KeyCode::Char(';'),
        sc::APOSTROPHE => KeyCode::Char('\''),
        sc::GRAVE => KeyCode::Char('`'),
        sc::COMMA => KeyCode::Char(','),
        sc::PERIOD => KeyCode::Char('.'),
        sc::SLASH => KeyCode::Char('/'),
        sc::CAPSLOCK => KeyCode::CapsLock,
        sc::F1..=sc::F12 => KeyCode::F((code - sc::F1 + 1) as u8),
        sc::PRINTSCREEN => KeyCode::PrintScreen,
        sc::SCROLLLOCK => KeyCode::ScrollLock,
        sc::PAUSE => KeyCode::Pause,
        sc::INSERT => KeyCode::Insert,
        sc::HOME => KeyCode::Home,
        sc::PAGEUP => KeyCode::PageUp,
        sc::DELETE => KeyCode::Delete,
        sc::END => KeyCode::End,
        sc::PAGEDOWN => KeyCode::PageDown,
        sc::RIGHT => KeyCode::Right,
        sc::LEFT => KeyCode::Left,
        sc::DOWN => KeyCode::Down,
        sc::UP => KeyCode::Up,
        sc::NUMLOCK => KeyCode::NumLock,
        sc::KP_DIVIDE => KeyCode::KpDivide,
        sc::KP_MULTIPLY => KeyCode::KpMultiply,
        sc::KP_MINUS => KeyCode::KpMinus,
        sc::KP_PLUS => KeyCode::KpPlus,
        sc::KP_ENTER => KeyCode::KpEnter,
        sc::KP_1..=sc::KP_9 => KeyCode::Kp((code - sc::KP_1 + 1) as u8),
        sc::KP_0 => KeyCode::Kp(0),
        sc::KP_PERIOD => KeyCode::KpDecimal,
        sc::KP_EQUALS => KeyCode::KpEquals,
        sc::LCTRL => KeyCode::LeftCtrl,
        sc::LSHIFT => KeyCode::LeftShift,
        sc::LALT => KeyCode::LeftAlt,
        sc::LSUPER => KeyCode::LeftSuper,
        sc::RCTRL => KeyCode::RightCtrl,
        sc::RSHIFT => KeyCode::RightShift,
        sc::RALT => KeyCode::RightAlt,
        sc::RSUPER => KeyCode::RightSuper,
        _ => KeyCode::Unknown,
    }
}

/// Collapse a native modifier mask into [`KeyModifiers`].
#[must_use]
pub(crate) fn modifiers_from_mask(mask: u16) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if mask & (mods::LSHIFT | mods::RSHIFT) != 0 {
        out |= KeyModifiers::SHIFT;
    }
    if mask & (mods::LCTRL | mods::RCTRL) != 0 {
        out |= KeyModifiers::CTRL;
    }
    if mask & (mods::LALT | mods::RALT) != 0 {
        out |= KeyModifiers::ALT;
    }
    if mask & (mods::LSUPER | mods::RSUPER) != 0 {
        out |= KeyModifiers::SUPER;
    }
    if mask & mods::CAPS != 0 {
        out |= KeyModifiers::CAPS_LOCK;
    }
    out
}

/// Map a native button id onto the fixed button enumeration.
#[must_use]
pub(crate) fn mouse_button(id: u8) -> MouseButton {
    match id {
        2 => MouseButton::Middle,
        3 => MouseButton::Right,
        // 1 is left; ids the platform invents also land on left, the
        // zero value of the enumeration.
        _ => MouseButton::Left,
    }
}

/// Translate one native event.
///
/// `modifiers` is the sampled global modifier state (stamped onto
/// key-down only); `map_pointer` resolves a physical pointer position to
/// a grid cell. Returns `None` for native events with no library
/// counterpart and for pointer motion outside the grid.
pub(crate) fn translate<F>(
    native: NativeEvent,
    modifiers: KeyModifiers,
    map_pointer: F,
) -> Option<Event>
where
    F: FnOnce(i32, i32) -> Option<(u32, u32)>,
{
    match native {
        NativeEvent::Quit => Some(Event::CloseWindow),
        NativeEvent::FocusGained => Some(Event::FocusGained),
        NativeEvent::FocusLost => Some(Event::FocusLost),
        NativeEvent::MouseEnter => Some(Event::MouseEnter),
        NativeEvent::MouseLeave => Some(Event::MouseExit),
        NativeEvent::MouseMotion { x, y } => {
            let (column, row) = map_pointer(x, y)?;
            Some(Event::MouseMoved { column, row })
        }
        NativeEvent::MouseButtonDown { button } => Some(Event::MouseDown(mouse_button(button))),
        NativeEvent::MouseButtonUp { button } => Some(Event::MouseUp(mouse_button(button))),
        NativeEvent::MouseWheel { delta } => Some(Event::MouseWheel(delta)),
        NativeEvent::TextInput { bytes, len } => {
            let ch = decode_first_codepoint(&bytes[..len as usize])?;
            Some(Event::Character(ch))
        }
        NativeEvent::KeyDown { keysym, scancode } => Some(Event::KeyDown(KeyEvent::new(
            layout_key(keysym),
            hardware_key(scancode),
            modifiers,
        ))),
        NativeEvent::KeyUp { keysym, scancode } => Some(Event::KeyUp(KeyEvent::new(
            layout_key(keysym),
            hardware_key(scancode),
            KeyModifiers::empty(),
        ))),
        NativeEvent::Other => None,
    }
}
