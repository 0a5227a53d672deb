//! The windowing/rendering capability consumed by the terminal.
//!
//! Everything platform-specific lives behind [`Backend`]: surface and
//! texture management, frame presentation, the native input queue, the
//! global modifier mask, and the monotonic clock. The crate ships
//! [`HeadlessBackend`] for offscreen rendering and tests; SDL-class
//! windowing backends implement the same trait out of tree.
//!
//! Native key events carry two raw codes: a layout-dependent keysym (what
//! the active keyboard layout says the key means) and a layout-independent
//! hardware scancode (USB HID usage numbering, the key's physical
//! identity). The constants in [`scancode`] and the keysym conventions in
//! [`keysym`] follow the SDL2 numbering so a real backend can pass values
//! straight through.

mod headless;

pub use headless::HeadlessBackend;

use std::time::Duration;

use crate::color::Rgb;
use crate::error::Result;
use crate::raster::FrameBuffer;
use crate::scale::TargetRect;

/// A native input event record, as pulled from the platform queue.
///
/// This is the raw, untranslated form; [`crate::Terminal`] turns it into
/// the library's [`crate::Event`] or drops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeEvent {
    /// The window close button / OS quit request.
    Quit,
    /// The window gained input focus.
    FocusGained,
    /// The window lost input focus.
    FocusLost,
    /// The pointer entered the window.
    MouseEnter,
    /// The pointer left the window.
    MouseLeave,
    /// Pointer motion, in physical window pixels.
    MouseMotion { x: i32, y: i32 },
    /// A pointer button went down. Buttons are numbered 1 = left,
    /// 2 = middle, 3 = right, as on the platforms this models.
    MouseButtonDown { button: u8 },
    /// A pointer button came up.
    MouseButtonUp { button: u8 },
    /// Vertical wheel motion; positive is away from the user.
    MouseWheel { delta: i32 },
    /// Text produced by the OS input method, as raw UTF-8 bytes.
    TextInput { bytes: [u8; 8], len: u8 },
    /// A key went down.
    KeyDown { keysym: u32, scancode: u32 },
    /// A key came up.
    KeyUp { keysym: u32, scancode: u32 },
    /// Anything the backend cannot express; always dropped in translation.
    Other,
}

impl NativeEvent {
    /// Build a [`NativeEvent::TextInput`] from a string's leading bytes.
    ///
    /// Only the first eight bytes are kept; translation decodes a single
    /// codepoint anyway.
    #[must_use]
    pub fn text(s: &str) -> Self {
        let mut bytes = [0u8; 8];
        let len = s.len().min(8);
        bytes[..len].copy_from_slice(&s.as_bytes()[..len]);
        Self::TextInput {
            bytes,
            len: len as u8,
        }
    }
}

/// Global modifier mask bits, sampled via [`Backend::modifier_mask`].
pub mod mods {
    pub const LSHIFT: u16 = 0x0001;
    pub const RSHIFT: u16 = 0x0002;
    pub const LCTRL: u16 = 0x0040;
    pub const RCTRL: u16 = 0x0080;
    pub const LALT: u16 = 0x0100;
    pub const RALT: u16 = 0x0200;
    pub const LSUPER: u16 = 0x0400;
    pub const RSUPER: u16 = 0x0800;
    pub const CAPS: u16 = 0x2000;
}

/// Hardware scancode values (USB HID usage page 0x07 numbering).
#[allow(missing_docs)]
pub mod scancode {
    pub const A: u32 = 4;
    pub const Z: u32 = 29;
    pub const DIGIT_1: u32 = 30;
    pub const DIGIT_9: u32 = 38;
    pub const DIGIT_0: u32 = 39;
    pub const RETURN: u32 = 40;
    pub const ESCAPE: u32 = 41;
    pub const BACKSPACE: u32 = 42;
    pub const TAB: u32 = 43;
    pub const SPACE: u32 = 44;
    pub const MINUS: u32 = 45;
    pub const EQUALS: u32 = 46;
    pub const LEFTBRACKET: u32 = 47;
    pub const RIGHTBRACKET: u32 = 48;
    pub const BACKSLASH: u32 = 49;
    pub const SEMICOLON: u32 = 51;
    pub const APOSTROPHE: u32 = 52;
    pub const GRAVE: u32 = 53;
    pub const COMMA: u32 = 54;
    pub const PERIOD: u32 = 55;
    pub const SLASH: u32 = 56;
    pub const CAPSLOCK: u32 = 57;
    pub const F1: u32 = 58;
    pub const F12: u32 = 69;
    pub const PRINTSCREEN: u32 = 70;
    pub const SCROLLLOCK: u32 = 71;
    pub const PAUSE: u32 = 72;
    pub const INSERT: u32 = 73;
    pub const HOME: u32 = 74;
    pub const PAGEUP: u32 = 75;
    pub const DELETE: u32 = 76;
    pub const END: u32 = 77;
    pub const PAGEDOWN: u32 = 78;
    pub const RIGHT: u32 = 79;
    pub const LEFT: u32 = 80;
    pub const DOWN: u32 = 81;
    pub const UP: u32 = 82;
    pub const NUMLOCK: u32 = 83;
    pub const KP_DIVIDE: u32 = 84;
    pub const KP_MULTIPLY: u32 = 85;
    pub const KP_MINUS: u32 = 86;
    pub const KP_PLUS: u32 = 87;
    pub const KP_ENTER: u32 = 88;
    pub const KP_1: u32 = 89;
    pub const KP_9: u32 = 97;
    pub const KP_0: u32 = 98;
    pub const KP_PERIOD: u32 = 99;
    pub const KP_EQUALS: u32 = 103;
    pub const LCTRL: u32 = 224;
    pub const LSHIFT: u32 = 225;
    pub const LALT: u32 = 226;
    pub const LSUPER: u32 = 227;
    pub const RCTRL: u32 = 228;
    pub const RSHIFT: u32 = 229;
    pub const RALT: u32 = 230;
    pub const RSUPER: u32 = 231;
}

/// Layout keysym conventions.
///
/// Printable keys use their ASCII value ('\r' for Return, 0x7f for
/// Delete); every other key is its hardware scancode with
/// [`keysym::SCANCODE_FLAG`] set.
#[allow(missing_docs)]
pub mod keysym {
    /// Marks a keysym derived from a scancode rather than a character.
    pub const SCANCODE_FLAG: u32 = 1 << 30;

    pub const RETURN: u32 = b'\r' as u32;
    pub const ESCAPE: u32 = 0x1b;
    pub const BACKSPACE: u32 = 0x08;
    pub const TAB: u32 = b'\t' as u32;
    pub const DELETE: u32 = 0x7f;

    /// Keysym for a non-printable key, from its scancode.
    #[must_use]
    pub const fn from_scancode(scancode: u32) -> u32 {
        scancode | SCANCODE_FLAG
    }
}

/// The native windowing/rendering capability.
///
/// One surface per backend. The terminal owns its backend and drives the
/// full lifecycle: open on [`crate::Terminal::open`], resize on demand,
/// close on drop.
pub trait Backend {
    /// Create the native window/surface and its streaming texture.
    ///
    /// Fails with [`crate::Error::AlreadyOpen`] when a surface exists.
    fn open_surface(&mut self, width: u32, height: u32, title: &str) -> Result<()>;

    /// Reallocate the surface and texture for a new logical size.
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<()>;

    /// Release the surface. Idempotent.
    fn close_surface(&mut self);

    /// Current physical viewport size in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Upload a logical frame and present it into `target`, clearing the
    /// letterbox margins to `edge`.
    fn present(&mut self, frame: &FrameBuffer, target: TargetRect, edge: Rgb) -> Result<()>;

    /// Toggle fullscreen; `Err(Unsupported)` where the platform cannot.
    fn set_fullscreen(&mut self, enabled: bool) -> Result<()>;

    /// Pull one native event without blocking.
    fn poll_native(&mut self) -> Option<NativeEvent>;

    /// Pull one native event, blocking up to `timeout` (`None` waits
    /// indefinitely). Returns `None` on timeout.
    fn wait_native(&mut self, timeout: Option<Duration>) -> Option<NativeEvent>;

    /// Sample the global keyboard modifier state (see [`mods`]).
    fn modifier_mask(&self) -> u16;

    /// Monotonic time since backend creation, `None` if unsupported.
    fn elapsed(&self) -> Option<Duration>;

    /// Block the calling thread for approximately `duration`.
    fn sleep(&self, duration: Duration);
}
