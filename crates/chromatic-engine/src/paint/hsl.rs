use super::Color;
use super::color::unit_to_channel;

/// Hue/saturation/lightness decomposition of a [`Color`].
///
/// - `h`: degrees in [0, 360)
/// - `s`, `l`, `a`: [0, 1]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsl {
    #[inline]
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
            a: clamp_unit(a),
        }
    }

    pub fn from_color(color: Color) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d <= 0.0 {
            return Self {
                h: 0.0,
                s: 0.0,
                l,
                a: color.opacity(),
            };
        }

        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: wrap_hue(h * 60.0),
            s: clamp_unit(s),
            l,
            a: color.opacity(),
        }
    }

    pub fn to_color(self) -> Color {
        let h = self.h / 360.0;
        let s = self.s;
        let l = self.l;

        let (r, g, b) = if s <= 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Color::rgba(
            unit_to_channel(r),
            unit_to_channel(g),
            unit_to_channel(b),
            unit_to_channel(self.a),
        )
    }

    #[inline]
    pub fn with_hue(self, h: f32) -> Self {
        Self {
            h: wrap_hue(h),
            ..self
        }
    }

    #[inline]
    pub fn with_saturation(self, s: f32) -> Self {
        Self {
            s: clamp_unit(s),
            ..self
        }
    }

    #[inline]
    pub fn with_lightness(self, l: f32) -> Self {
        Self {
            l: clamp_unit(l),
            ..self
        }
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Wraps a hue into [0, 360).
#[inline]
pub(crate) fn wrap_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    // ── decomposition ─────────────────────────────────────────────────────

    #[test]
    fn primaries_have_expected_hues() {
        assert!(approx(Hsl::from_color(Color::RED).h, 0.0, 1e-4));
        assert!(approx(Hsl::from_color(Color::GREEN).h, 120.0, 1e-4));
        assert!(approx(Hsl::from_color(Color::BLUE).h, 240.0, 1e-4));
        assert!(approx(Hsl::from_color(Color::MAGENTA).h, 300.0, 1e-4));
    }

    #[test]
    fn red_is_fully_saturated_mid_lightness() {
        let hsl = Hsl::from_color(Color::RED);
        assert!(approx(hsl.s, 1.0, 1e-6));
        assert!(approx(hsl.l, 0.5, 1e-6));
        assert!(approx(hsl.a, 1.0, 1e-6));
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsl = Hsl::from_color(Color::rgb(128, 128, 128));
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn teal_decomposes() {
        let hsl = Hsl::from_color(Color::TEAL);
        assert!(approx(hsl.h, 180.0, 1e-4));
        assert!(approx(hsl.s, 1.0, 1e-6));
        assert!(approx(hsl.l, 128.0 / 510.0, 1e-6));
    }

    // ── recomposition ─────────────────────────────────────────────────────

    #[test]
    fn round_trip_preserves_color() {
        for c in [
            Color::RED,
            Color::TEAL,
            Color::ORANGE,
            Color::rgba(0x21, 0x93, 0xB0, 0x80),
            Color::rgb(17, 34, 51),
            Color::WHITE,
            Color::BLACK,
        ] {
            assert_eq!(Hsl::from_color(c).to_color(), c);
        }
    }

    #[test]
    fn cyan_from_hsl() {
        assert_eq!(Hsl::new(180.0, 1.0, 0.5, 1.0).to_color(), Color::CYAN);
    }

    // ── setters ───────────────────────────────────────────────────────────

    #[test]
    fn hue_wraps() {
        assert!(approx(Hsl::default().with_hue(420.0).h, 60.0, 1e-4));
        assert!(approx(Hsl::default().with_hue(-90.0).h, 270.0, 1e-4));
    }

    #[test]
    fn lightness_and_saturation_clamp() {
        let hsl = Hsl::default().with_lightness(1.7).with_saturation(-0.3);
        assert_eq!(hsl.l, 1.0);
        assert_eq!(hsl.s, 0.0);
    }
}
