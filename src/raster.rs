//! Cell-to-pixel rasterization.
//!
//! [`FrameBuffer`] is the logical pixel buffer: a full-resolution RGB image
//! of `columns * glyph_w` by `rows * glyph_h` pixels. Every flush repaints
//! the whole grid, cell by cell in row-major order; there is no dirty
//! tracking. A twin cell buffer diffed against the previous frame would let
//! unchanged cells skip the blit, but the full repaint is cheap enough at
//! terminal sizes.

use crate::color::Rgb;
use crate::font::FontAtlas;
use crate::grid::CellGrid;

/// The logical RGB pixel buffer the grid is rasterized into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    /// Allocate a black frame buffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; size],
        }
    }

    /// Width in logical pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in logical pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The row-major pixel slice.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Set every pixel to one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Blit one glyph into the buffer with its cell colors.
    ///
    /// Atlas intensity 0 writes the background, 255 the foreground, and
    /// anything in between interpolates each channel.
    pub fn blit_glyph(
        &mut self,
        atlas: &FontAtlas,
        symbol: u8,
        fg: Rgb,
        bg: Rgb,
        origin_x: u32,
        origin_y: u32,
    ) {
        for v in 0..atlas.glyph_height() {
            let mut offset = (origin_x + (origin_y + v) * self.width) as usize;
            for u in 0..atlas.glyph_width() {
                let pixel = match atlas.intensity(symbol, u, v) {
                    0 => bg,
                    255 => fg,
                    weight => bg.lerp(fg, weight),
                };
                self.pixels[offset] = pixel;
                offset += 1;
            }
        }
    }

    /// Repaint the whole grid into the buffer.
    ///
    /// The buffer must have been allocated for this grid and atlas
    /// (`columns * glyph_w` by `rows * glyph_h`).
    pub fn render_grid(&mut self, grid: &CellGrid, atlas: &FontAtlas) {
        debug_assert_eq!(self.width, grid.columns() * atlas.glyph_width());
        debug_assert_eq!(self.height, grid.rows() * atlas.glyph_height());
        for y in 0..grid.rows() {
            for x in 0..grid.columns() {
                let Some(cell) = grid.get(x, y) else { continue };
                self.blit_glyph(
                    atlas,
                    cell.symbol,
                    cell.fg,
                    cell.bg,
                    x * atlas.glyph_width(),
                    y * atlas.glyph_height(),
                );
            }
        }
    }

    /// Dump the frame as tightly packed RGB8 bytes into `dest`.
    ///
    /// `dest` must hold at least [`FrameBuffer::byte_len`] bytes; returns
    /// the number of bytes written.
    pub fn dump_rgb(&self, dest: &mut [u8]) -> usize {
        for (chunk, pixel) in dest.chunks_exact_mut(3).zip(&self.pixels) {
            chunk.copy_from_slice(&pixel.to_bytes());
        }
        self.byte_len().min(dest.len() / 3 * 3)
    }

    /// Size in bytes of a tightly packed RGB8 dump of this frame.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 3
    }
}
