use std::str::FromStr;

use crate::error::{GradientError, Result};

/// Straight-alpha sRGB color, 8 bits per channel.
///
/// This is the value type gradients are built from. Transformations that work
/// in HSL decompose through [`Hsl`](super::Hsl) and recompose back to this type,
/// rounding to the nearest channel value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const TEAL: Self = Self::rgb(0, 128, 128);
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs the color as `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GradientError::invalid_color(input));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| GradientError::invalid_color(input))
        };

        let a = if hex.len() == 8 { channel(6..8)? } else { 255 };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, a))
    }

    /// Formats as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Replaces alpha with `opacity` in [0, 1].
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        self.with_alpha(unit_to_channel(opacity))
    }

    #[inline]
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Linear per-channel interpolation in RGBA space.
    ///
    /// `t` is clamped to [0, 1]; `t == 0` yields `self` and `t == 1` yields `other` exactly.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| {
            let a = a as f32;
            let b = b as f32;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Premultiplied float channels `[r, g, b, a]` in [0, 1], as GPU blending expects.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.opacity();
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Color {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Converts a unit float to a channel byte, rounding to nearest.
#[inline]
pub(crate) fn unit_to_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
