//! RGB color type with channel-wise interpolation.
//!
//! Cells carry explicit 8-bit-per-channel RGB foreground and background
//! colors. The rasterizer mixes the two through [`Rgb::lerp`], weighted by
//! a glyph intensity byte, which is what turns a grayscale font source into
//! anti-aliased-looking text.
//!
//! # Examples
//!
//! ```
//! use rasterm::Rgb;
//!
//! let amber = Rgb::from_hex("#ffb000").unwrap();
//! // Halfway between black and amber.
//! let dim = Rgb::BLACK.lerp(amber, 128);
//! assert_eq!(dim.g, 0x58);
//! ```

use std::fmt;

/// An opaque RGB color with u8 components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a color from u8 components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g. "#ffb000" or "ffb000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Interpolate towards `fore`, weighted by a glyph intensity byte.
    ///
    /// Each channel computes `self + (fore - self) * weight / 255`.
    /// Weight 0 returns `self` exactly, weight 255 returns `fore` exactly.
    #[must_use]
    pub const fn lerp(self, fore: Self, weight: u8) -> Self {
        const fn mix(back: u8, fore: u8, weight: u8) -> u8 {
            let back = back as i32;
            let fore = fore as i32;
            (back + (fore - back) * weight as i32 / 255) as u8
        }

        Self {
            r: mix(self.r, fore.r, weight),
            g: mix(self.g, fore.g, weight),
            b: mix(self.b, fore.b, weight),
        }
    }

    /// Tightly packed RGB byte triple.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::RED));
        assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::GREEN));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#ffff"), None);
    }

    #[test]
    fn test_lerp_endpoints() {
        let back = Rgb::new(10, 200, 77);
        let fore = Rgb::new(240, 3, 129);
        assert_eq!(back.lerp(fore, 0), back);
        assert_eq!(back.lerp(fore, 255), fore);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgb::BLACK.lerp(Rgb::WHITE, 128);
        // 0 + 255 * 128 / 255 = 128
        assert_eq!(mid, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_lerp_downward() {
        // Interpolation must also work when fore < back per channel.
        let out = Rgb::WHITE.lerp(Rgb::BLACK, 255);
        assert_eq!(out, Rgb::BLACK);
    }

    #[test]
    fn test_display_round_trip() {
        let c = Rgb::new(0x1a, 0x2b, 0x3c);
        assert_eq!(Rgb::from_hex(&c.to_string()), Some(c));
    }
}
