//! PNG import/export helpers, behind the `snapshot` feature.
//!
//! Font tables come in as grayscale PNGs laid out as the conventional
//! 16x16 glyph grid; rendered frames go out as RGB8 PNGs, handy for
//! golden-image comparisons and bug reports.

use std::path::Path;

use image::{GrayImage, ImageReader, RgbImage};

use crate::error::Result;
use crate::font::FontBitmap;
use crate::raster::FrameBuffer;

/// Load a glyph-table image from a PNG file.
///
/// The image is collapsed to 8-bit grayscale; glyph size is derived from
/// the 16x16 table convention, so a 128x128 image yields 8x8 glyphs.
pub fn load_font_png(path: impl AsRef<Path>) -> Result<FontBitmap> {
    let gray: GrayImage = ImageReader::open(path)?.decode()?.into_luma8();
    let (width, height) = gray.dimensions();
    Ok(FontBitmap::from_table(gray.into_raw(), width, height))
}

/// Write a frame to a PNG file as packed RGB8.
pub fn save_frame_png(frame: &FrameBuffer, path: impl AsRef<Path>) -> Result<()> {
    let mut bytes = vec![0u8; frame.byte_len()];
    frame.dump_rgb(&mut bytes);
    let img = RgbImage::from_raw(frame.width(), frame.height(), bytes)
        .ok_or_else(|| crate::error::Error::Backend("frame dimensions overflow image".into()))?;
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_save_and_reload_frame() {
        let mut frame = FrameBuffer::new(4, 2);
        frame.fill(Rgb::new(10, 20, 30));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save_frame_png(&frame, &path).unwrap();

        let img = ImageReader::open(&path).unwrap().decode().unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(img.get_pixel(3, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_load_font_derives_glyph_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.png");
        GrayImage::from_pixel(128, 128, image::Luma([200u8]))
            .save(&path)
            .unwrap();

        let font = load_font_png(&path).unwrap();
        assert_eq!(font.glyph_width, 8);
        assert_eq!(font.glyph_height, 8);
        assert_eq!(font.pixels.len(), 128 * 128);
        assert!(font.pixels.iter().all(|&p| p == 200));
    }
}
