//! `rasterm` - Character-grid terminal emulation over raw pixel surfaces
//!
//! A fixed grid of cells, a 256-glyph grayscale font atlas, a software
//! rasterizer with per-pixel color interpolation, pixel-perfect
//! presentation scaling, and translation of native windowing input into a
//! compact event type. Platform windowing lives behind the [`Backend`]
//! trait; the crate ships a deterministic [`HeadlessBackend`] for tests
//! and offscreen rendering.
//!
//! ```no_run
//! use rasterm::{HeadlessBackend, Rgb, Terminal, TerminalOptions};
//!
//! # fn main() -> rasterm::Result<()> {
//! let mut term = Terminal::open(HeadlessBackend::new(), TerminalOptions::new(80, 25))?;
//! term.grid_mut().print(2, 1, "hello", Rgb::WHITE, Rgb::BLACK);
//! term.flush()?;
//! # Ok(())
//! # }
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for scale math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow FontAtlas in font:: etc
#![allow(clippy::missing_errors_doc)] // Error conditions covered by variant docs
#![allow(clippy::missing_panics_doc)] // No panics outside debug assertions
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod backend;
pub mod cell;
pub mod color;
pub mod error;
pub mod font;
pub mod grid;
pub mod input;
mod log;
pub mod raster;
pub mod scale;
#[cfg(feature = "snapshot")]
pub mod snapshot;
pub mod terminal;

// Re-export core types at crate root
pub use backend::{Backend, HeadlessBackend, NativeEvent};
pub use cell::Cell;
pub use color::Rgb;
pub use error::{Error, Result};
pub use font::{FontAtlas, FontBitmap, GLYPH_COUNT};
pub use grid::CellGrid;
pub use log::{LogLevel, set_log_callback};
pub use raster::FrameBuffer;
pub use scale::TargetRect;
pub use terminal::{Terminal, TerminalOptions};

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton};
