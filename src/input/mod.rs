//! Input event types and native-event translation.

pub mod event;
pub mod keyboard;
pub(crate) mod translate;

pub use event::{Event, MouseButton};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
