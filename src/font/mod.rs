//! The font atlas: grayscale intensity bitmaps for 256 glyphs.
//!
//! The atlas is a flat byte buffer of `glyph_w * glyph_h * 256` intensity
//! samples. Byte 0 means "background", 255 means "foreground", and values
//! in between are interpolation weights, so an 8-bit grayscale font source
//! yields anti-aliased edges for free.
//!
//! Glyph sources are grayscale bitmaps organized as a row-major table of
//! fixed-size glyph rectangles (conventionally 16x16 glyphs, but any pitch
//! at least one glyph wide works). Partial loads via [`FontAtlas::load_range`]
//! overwrite only a contiguous range of atlas slots.

mod data;

use crate::error::{Error, Result};

/// Number of glyph slots in an atlas.
pub const GLYPH_COUNT: usize = 256;

/// A grayscale glyph-table bitmap used to build or patch an atlas.
///
/// `pixels` is a row-major 8-bit intensity image of `width x height`;
/// glyph rectangles of `glyph_width x glyph_height` are read from it left
/// to right, top to bottom.
#[derive(Clone, Debug)]
pub struct FontBitmap {
    /// Intensity samples, row-major, one byte per pixel.
    pub pixels: Vec<u8>,
    /// Source image width in pixels (also the pitch).
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
    /// Width of one glyph rectangle.
    pub glyph_width: u32,
    /// Height of one glyph rectangle.
    pub glyph_height: u32,
}

impl FontBitmap {
    /// Wrap a glyph-table image, deriving glyph size from the conventional
    /// 16x16 layout.
    #[must_use]
    pub fn from_table(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
            glyph_width: width / 16,
            glyph_height: height / 16,
        }
    }
}

/// Grayscale intensity bitmaps for all 256 glyph slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontAtlas {
    glyph_width: u32,
    glyph_height: u32,
    data: Vec<u8>,
}

impl FontAtlas {
    /// Build an atlas from the embedded 8x8 font, nearest-neighbor scaled
    /// to the requested glyph size.
    pub fn builtin(glyph_width: u32, glyph_height: u32) -> Result<Self> {
        if glyph_width == 0 || glyph_height == 0 {
            return Err(Error::FontGeometry {
                glyph_width,
                glyph_height,
                pitch: 0,
            });
        }
        let mut atlas = Self::blank(glyph_width, glyph_height);
        for symbol in 0..GLYPH_COUNT {
            for y in 0..glyph_height {
                for x in 0..glyph_width {
                    let src_x = x * data::BUILTIN_GLYPH_WIDTH / glyph_width;
                    let src_y = y * data::BUILTIN_GLYPH_HEIGHT / glyph_height;
                    let weight = data::builtin_intensity(symbol as u8, src_x, src_y);
                    let i = atlas.offset(symbol as u8, x, y);
                    atlas.data[i] = weight;
                }
            }
        }
        Ok(atlas)
    }

    /// Build an atlas from a glyph-table bitmap, filling slots from 0 until
    /// the table or the 256 slots run out.
    ///
    /// Fails without allocating when the geometry cannot hold one glyph.
    pub fn from_bitmap(source: &FontBitmap) -> Result<Self> {
        if source.glyph_width == 0
            || source.glyph_height == 0
            || source.width < source.glyph_width
        {
            return Err(Error::FontGeometry {
                glyph_width: source.glyph_width,
                glyph_height: source.glyph_height,
                pitch: source.width,
            });
        }
        let mut atlas = Self::blank(source.glyph_width, source.glyph_height);
        atlas.load_range(
            &source.pixels,
            source.width,
            source.height,
            0,
        );
        Ok(atlas)
    }

    fn blank(glyph_width: u32, glyph_height: u32) -> Self {
        let size = glyph_width as usize * glyph_height as usize * GLYPH_COUNT;
        Self {
            glyph_width,
            glyph_height,
            data: vec![0; size],
        }
    }

    /// Glyph width in pixels.
    #[must_use]
    pub const fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    /// Glyph height in pixels.
    #[must_use]
    pub const fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    #[inline]
    fn offset(&self, symbol: u8, x: u32, y: u32) -> usize {
        (symbol as usize * self.glyph_height as usize + y as usize)
            * self.glyph_width as usize
            + x as usize
    }

    /// Intensity sample for a glyph-local pixel.
    #[inline]
    #[must_use]
    pub fn intensity(&self, symbol: u8, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.glyph_width && y < self.glyph_height);
        self.data[self.offset(symbol, x, y)]
    }

    /// Overwrite atlas slots starting at `first_char` from a row-major
    /// glyph-table image of the atlas's own glyph size.
    ///
    /// Reads whole glyph rectangles left to right, top to bottom, and stops
    /// once slot 255 is filled or the image is exhausted. Glyphs outside
    /// the written range keep their previous bitmaps. Images narrower or
    /// shorter than one glyph load nothing.
    pub fn load_range(&mut self, pixels: &[u8], width: u32, height: u32, first_char: u8) {
        let columns = width / self.glyph_width;
        let rows = height / self.glyph_height;
        let mut symbol = first_char as usize;
        for gy in 0..rows {
            for gx in 0..columns {
                if symbol >= GLYPH_COUNT {
                    return;
                }
                self.grab_glyph(
                    symbol as u8,
                    pixels,
                    width,
                    gx * self.glyph_width,
                    gy * self.glyph_height,
                );
                symbol += 1;
            }
        }
    }

    /// Copy one glyph rectangle out of a source image into an atlas slot.
    fn grab_glyph(&mut self, symbol: u8, pixels: &[u8], pitch: u32, src_x: u32, src_y: u32) {
        for y in 0..self.glyph_height {
            for x in 0..self.glyph_width {
                let src = ((src_y + y) * pitch + src_x + x) as usize;
                let weight = pixels.get(src).copied().unwrap_or(0);
                let dst = self.offset(symbol, x, y);
                self.data[dst] = weight;
            }
        }
    }
}
