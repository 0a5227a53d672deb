//! Presentation scaling and pointer coordinate mapping.
//!
//! The logical frame is scaled onto the physical viewport through a
//! centered target rectangle. When at least one physical pixel is
//! available per logical pixel the scale factor is floored to a whole
//! number, so every logical pixel maps to a uniform block of physical
//! pixels ("pixel-perfect"); fractional upscales would smear alternating
//! pixel rows. When the viewport is smaller than the frame the image is
//! shrunk to fit instead, which necessarily gives up pixel perfection.
//!
//! Pointer coordinates travel the same transform in reverse: physical
//! pixel to logical pixel to grid cell.

/// An axis-aligned rectangle in physical viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetRect {
    /// Left edge in physical pixels.
    pub x: i32,
    /// Top edge in physical pixels.
    pub y: i32,
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl TargetRect {
    /// Compute the centered target rectangle for a logical frame inside a
    /// physical viewport.
    ///
    /// Scale factor is `min(vw/lw, vh/lh)`: floored to an integer when it
    /// is at least 1, kept fractional (shrink to fit) when it is below 1.
    /// Leftover viewport space is split evenly on both sides.
    #[must_use]
    pub fn compute(viewport_w: u32, viewport_h: u32, logical_w: u32, logical_h: u32) -> Self {
        if logical_w == 0 || logical_h == 0 {
            return Self::default();
        }

        let w_scale = viewport_w as f32 / logical_w as f32;
        let h_scale = viewport_h as f32 / logical_h as f32;
        let min_scale = w_scale.min(h_scale);

        let (width, height) = if min_scale < 1.0 {
            (
                (logical_w as f32 * min_scale) as u32,
                (logical_h as f32 * min_scale) as u32,
            )
        } else {
            let factor = min_scale as u32;
            (logical_w * factor, logical_h * factor)
        };

        Self {
            x: (viewport_w as i32 - width as i32) / 2,
            y: (viewport_h as i32 - height as i32) / 2,
            width,
            height,
        }
    }

    /// Whether a physical point falls inside the rectangle.
    #[must_use]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && py >= self.y
            && px < self.x + self.width as i32
            && py < self.y + self.height as i32
    }

    /// Map a physical point back to a logical pixel coordinate.
    ///
    /// Returns `None` outside the rectangle or when the rectangle is
    /// degenerate.
    #[must_use]
    pub fn to_logical(&self, px: i32, py: i32, logical_w: u32, logical_h: u32) -> Option<(u32, u32)> {
        if self.width == 0 || self.height == 0 || !self.contains(px, py) {
            return None;
        }
        let dx = (px - self.x) as u64;
        let dy = (py - self.y) as u64;
        let lx = dx * u64::from(logical_w) / u64::from(self.width);
        let ly = dy * u64::from(logical_h) / u64::from(self.height);
        // Guard the fractional-shrink path against rounding onto the edge.
        Some((
            (lx as u32).min(logical_w - 1),
            (ly as u32).min(logical_h - 1),
        ))
    }

    /// Map a logical pixel to the top-left physical pixel of its scaled
    /// footprint.
    #[must_use]
    pub fn from_logical(&self, lx: u32, ly: u32, logical_w: u32, logical_h: u32) -> (i32, i32) {
        if logical_w == 0 || logical_h == 0 {
            return (self.x, self.y);
        }
        let px = u64::from(lx) * u64::from(self.width) / u64::from(logical_w);
        let py = u64::from(ly) * u64::from(self.height) / u64::from(logical_h);
        (self.x + px as i32, self.y + py as i32)
    }
}

/// Map a physical pointer position to a grid cell.
///
/// Inverse-transforms through the target rect, then divides by the glyph
/// size. `None` when the point misses the rect or lands past the grid.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn pointer_to_cell(
    rect: TargetRect,
    px: i32,
    py: i32,
    logical_w: u32,
    logical_h: u32,
    glyph_w: u32,
    glyph_h: u32,
    columns: u32,
    rows: u32,
) -> Option<(u32, u32)> {
    if glyph_w == 0 || glyph_h == 0 {
        return None;
    }
    let (lx, ly) = rect.to_logical(px, py, logical_w, logical_h)?;
    let column = lx / glyph_w;
    let row = ly / glyph_h;
    if column >= columns || row >= rows {
        return None;
    }
    Some((column, row))
}
