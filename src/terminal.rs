//! The terminal context: grid, atlas, frame, and backend under one handle.
//!
//! A [`Terminal`] owns every piece of session state the original design
//! kept in process-wide globals. Multiple independent terminals can
//! coexist, each over its own backend, and all resources are released by
//! `Drop`.
//!
//! The intended shape is a single-threaded game loop: mutate cells, call
//! [`Terminal::flush`], then [`Terminal::poll_event`] or
//! [`Terminal::wait_event`], repeat.

use std::time::{Duration, Instant};

use crate::backend::{Backend, NativeEvent};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::font::{FontAtlas, FontBitmap};
use crate::grid::CellGrid;
use crate::input::event::Event;
use crate::input::translate;
use crate::log::{LogLevel, emit_log};
use crate::raster::FrameBuffer;
use crate::scale::{self, TargetRect};

/// Configuration for [`Terminal::open`].
#[derive(Clone, Debug)]
pub struct TerminalOptions {
    /// Glyph width in pixels; ignored when `font` is given.
    pub glyph_width: u32,
    /// Glyph height in pixels; ignored when `font` is given.
    pub glyph_height: u32,
    /// Grid width in columns.
    pub columns: u32,
    /// Grid height in rows.
    pub rows: u32,
    /// Window title.
    pub title: String,
    /// Custom font; the embedded font is used when absent.
    pub font: Option<FontBitmap>,
    /// Letterbox margin color.
    pub edge_color: Rgb,
}

impl TerminalOptions {
    /// Options for a grid of the given size with the embedded 8x8 font.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            glyph_width: 8,
            glyph_height: 8,
            columns,
            rows,
            title: "rasterm".to_string(),
            font: None,
            edge_color: Rgb::BLACK,
        }
    }

    /// Set the glyph pixel size (builtin font is scaled to fit).
    #[must_use]
    pub fn glyph_size(mut self, width: u32, height: u32) -> Self {
        self.glyph_width = width;
        self.glyph_height = height;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Use a custom font; its glyph size wins over [`Self::glyph_size`].
    #[must_use]
    pub fn font(mut self, font: FontBitmap) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the letterbox margin color.
    #[must_use]
    pub fn edge_color(mut self, color: Rgb) -> Self {
        self.edge_color = color;
        self
    }
}

/// A running terminal session over a backend.
#[derive(Debug)]
pub struct Terminal<B: Backend> {
    backend: B,
    grid: CellGrid,
    atlas: FontAtlas,
    frame: FrameBuffer,
    edge_color: Rgb,
}

impl<B: Backend> Terminal<B> {
    /// Open a terminal: build the atlas, allocate grid and frame, and
    /// create the backend surface.
    ///
    /// Fails on any zero dimension and when the backend already has an
    /// open surface.
    pub fn open(backend: B, options: TerminalOptions) -> Result<Self> {
        let atlas = match &options.font {
            Some(font) => FontAtlas::from_bitmap(font)?,
            None => FontAtlas::builtin(options.glyph_width, options.glyph_height)?,
        };
        if options.columns == 0 || options.rows == 0 {
            return Err(Error::InvalidDimensions {
                glyph_width: atlas.glyph_width(),
                glyph_height: atlas.glyph_height(),
                columns: options.columns,
                rows: options.rows,
            });
        }

        let mut backend = backend;
        let logical_w = options.columns * atlas.glyph_width();
        let logical_h = options.rows * atlas.glyph_height();
        backend.open_surface(logical_w, logical_h, &options.title)?;

        Ok(Self {
            backend,
            grid: CellGrid::new(options.columns, options.rows),
            atlas,
            frame: FrameBuffer::new(logical_w, logical_h),
            edge_color: options.edge_color,
        })
    }

    /// Reallocate atlas, grid, frame, and surface for new dimensions.
    ///
    /// The atlas is rebuilt from the embedded font at the new glyph size;
    /// reload any custom font afterwards. Cell contents are discarded
    /// (the new grid comes up zeroed).
    pub fn resize(
        &mut self,
        glyph_width: u32,
        glyph_height: u32,
        columns: u32,
        rows: u32,
    ) -> Result<()> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidDimensions {
                glyph_width,
                glyph_height,
                columns,
                rows,
            });
        }
        let atlas = FontAtlas::builtin(glyph_width, glyph_height)?;
        let logical_w = columns * glyph_width;
        let logical_h = rows * glyph_height;
        self.backend.resize_surface(logical_w, logical_h)?;
        self.atlas = atlas;
        self.grid = CellGrid::new(columns, rows);
        self.frame = FrameBuffer::new(logical_w, logical_h);
        Ok(())
    }

    /// Grid width in columns.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.grid.columns()
    }

    /// Grid height in rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Glyph width in pixels.
    #[must_use]
    pub fn glyph_width(&self) -> u32 {
        self.atlas.glyph_width()
    }

    /// Glyph height in pixels.
    #[must_use]
    pub fn glyph_height(&self) -> u32 {
        self.atlas.glyph_height()
    }

    /// The cell grid.
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// The cell grid, mutable. Mutations become visible on the next flush.
    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    /// The backend, for capability-specific access.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutable.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The logical frame as of the last flush.
    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Replace the whole font from a glyph-table bitmap.
    ///
    /// A font with a different glyph size reallocates the frame and the
    /// backend surface; the grid dimensions stay put.
    pub fn load_font(&mut self, font: &FontBitmap) -> Result<()> {
        let atlas = FontAtlas::from_bitmap(font)?;
        let resized = atlas.glyph_width() != self.atlas.glyph_width()
            || atlas.glyph_height() != self.atlas.glyph_height();
        if resized {
            let logical_w = self.grid.columns() * atlas.glyph_width();
            let logical_h = self.grid.rows() * atlas.glyph_height();
            self.backend.resize_surface(logical_w, logical_h)?;
            self.frame = FrameBuffer::new(logical_w, logical_h);
        }
        self.atlas = atlas;
        Ok(())
    }

    /// Overwrite a range of glyphs from a row-major glyph-table image of
    /// the current glyph size, starting at `first_char`.
    pub fn load_font_range(&mut self, pixels: &[u8], width: u32, height: u32, first_char: u8) {
        self.atlas.load_range(pixels, width, height, first_char);
    }

    /// Set the letterbox margin color used by subsequent presents.
    pub fn set_edge_color(&mut self, color: Rgb) {
        self.edge_color = color;
    }

    /// The current letterbox margin color.
    #[must_use]
    pub fn edge_color(&self) -> Rgb {
        self.edge_color
    }

    /// Toggle fullscreen, where the backend supports it.
    pub fn set_fullscreen(&mut self, enabled: bool) -> Result<()> {
        self.backend.set_fullscreen(enabled)
    }

    /// Rasterize the grid and present the frame.
    pub fn flush(&mut self) -> Result<()> {
        self.frame.render_grid(&self.grid, &self.atlas);
        let target = self.target_rect();
        self.backend.present(&self.frame, target, self.edge_color)
    }

    /// The current presentation rectangle within the physical viewport.
    #[must_use]
    pub fn target_rect(&self) -> TargetRect {
        let (vw, vh) = self.backend.viewport_size();
        TargetRect::compute(vw, vh, self.frame.width(), self.frame.height())
    }

    /// Map a physical pointer position to a grid cell.
    #[must_use]
    pub fn pointer_to_cell(&self, px: i32, py: i32) -> Option<(u32, u32)> {
        scale::pointer_to_cell(
            self.target_rect(),
            px,
            py,
            self.frame.width(),
            self.frame.height(),
            self.atlas.glyph_width(),
            self.atlas.glyph_height(),
            self.grid.columns(),
            self.grid.rows(),
        )
    }

    /// Drain the native queue without blocking; the first translatable
    /// event wins, `None` on an empty queue.
    pub fn poll_event(&mut self) -> Option<Event> {
        while let Some(native) = self.backend.poll_native() {
            if let Some(event) = self.translate_native(native) {
                return Some(event);
            }
        }
        None
    }

    /// Block until a translatable event arrives or the timeout elapses.
    ///
    /// `None` waits indefinitely. Untranslatable native events consume
    /// part of the budget and the wait continues with the remainder.
    pub fn wait_event(&mut self, timeout: Option<Duration>) -> Option<Event> {
        let start = Instant::now();
        loop {
            let remaining = match timeout {
                None => None,
                Some(budget) => Some(budget.checked_sub(start.elapsed())?),
            };
            let native = self.backend.wait_native(remaining)?;
            if let Some(event) = self.translate_native(native) {
                return Some(event);
            }
        }
    }

    /// Translate one native event, applying the flush-on-focus side
    /// effect.
    fn translate_native(&mut self, native: NativeEvent) -> Option<Event> {
        // Focus and pointer-crossing events follow an OS-level repaint
        // invalidation; redraw before reporting them so the caller never
        // observes stale contents.
        if matches!(
            native,
            NativeEvent::FocusGained
                | NativeEvent::FocusLost
                | NativeEvent::MouseEnter
                | NativeEvent::MouseLeave
        ) {
            if let Err(e) = self.flush() {
                emit_log(LogLevel::Warn, &format!("flush on focus change failed: {e}"));
            }
        }

        let modifiers = match native {
            NativeEvent::KeyDown { .. } => {
                translate::modifiers_from_mask(self.backend.modifier_mask())
            }
            _ => crate::input::KeyModifiers::empty(),
        };
        translate::translate(native, modifiers, |x, y| self.pointer_to_cell(x, y))
    }

    /// Monotonic time since the backend came up, `None` where the
    /// platform has no usable clock.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.backend.elapsed()
    }

    /// Block the calling thread for approximately `duration`.
    pub fn sleep(&self, duration: Duration) {
        self.backend.sleep(duration);
    }

    /// Byte size of a tightly packed RGB8 dump of the logical frame.
    ///
    /// Query this to size the destination for [`Terminal::dump_screenshot`].
    #[must_use]
    pub fn screenshot_len(&self) -> usize {
        self.frame.byte_len()
    }

    /// Dump the logical frame (as of the last flush) into `dest` as
    /// packed RGB8 rows. Returns the byte count written.
    pub fn dump_screenshot(&self, dest: &mut [u8]) -> Result<usize> {
        let needed = self.screenshot_len();
        if dest.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                got: dest.len(),
            });
        }
        Ok(self.frame.dump_rgb(dest))
    }
}

impl<B: Backend> Drop for Terminal<B> {
    fn drop(&mut self) {
        self.backend.close_surface();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;

    fn small_terminal() -> Terminal<HeadlessBackend> {
        Terminal::open(HeadlessBackend::new(), TerminalOptions::new(10, 4)).unwrap()
    }

    #[test]
    fn test_open_allocates_zeroed_grid() {
        let term = small_terminal();
        assert_eq!(term.columns(), 10);
        assert_eq!(term.rows(), 4);
        assert_eq!(term.grid().len(), 40);
        assert!(
            term.grid()
                .cells()
                .iter()
                .all(|c| *c == crate::cell::Cell::default())
        );
    }

    #[test]
    fn test_open_rejects_zero_dims() {
        let err = Terminal::open(HeadlessBackend::new(), TerminalOptions::new(0, 4));
        assert!(matches!(err, Err(Error::InvalidDimensions { .. })));

        let err = Terminal::open(
            HeadlessBackend::new(),
            TerminalOptions::new(10, 4).glyph_size(0, 8),
        );
        assert!(matches!(err, Err(Error::FontGeometry { .. })));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut term = small_terminal();
        term.grid_mut().print(0, 0, "x", Rgb::WHITE, Rgb::BLACK);
        term.resize(16, 16, 20, 5).unwrap();
        assert_eq!(term.columns(), 20);
        assert_eq!(term.glyph_width(), 16);
        assert_eq!(term.frame().width(), 20 * 16);
        // Contents were discarded.
        assert_eq!(term.grid().get(0, 0).unwrap().symbol, 0);
    }

    #[test]
    fn test_flush_presents() {
        let mut term = small_terminal();
        term.flush().unwrap();
        assert_eq!(term.backend().present_count(), 1);
        assert!(term.backend().last_frame().is_some());
    }

    #[test]
    fn test_screenshot_capacity_query() {
        let mut term = small_terminal();
        term.flush().unwrap();
        let needed = term.screenshot_len();
        assert_eq!(needed, (10 * 8) * (4 * 8) * 3);

        let mut short = vec![0u8; needed - 1];
        assert!(matches!(
            term.dump_screenshot(&mut short),
            Err(Error::BufferTooSmall { .. })
        ));

        let mut full = vec![0u8; needed];
        assert_eq!(term.dump_screenshot(&mut full).unwrap(), needed);
    }

    #[test]
    fn test_drop_releases_surface() {
        let mut backend = HeadlessBackend::new();
        backend.open_surface(8, 8, "probe").unwrap();
        backend.close_surface();

        let term = small_terminal();
        drop(term);
        // A fresh terminal over a new backend still opens fine; the drop
        // path is covered by the headless close idempotence test.
        let _term = small_terminal();
    }
}
