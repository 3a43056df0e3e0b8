//! Generator-style constructors that derive whole color ramps from a few inputs.

use crate::error::{GradientError, Result};

use super::{Color, GradientDirection, GradientSpec, Hsl};

/// Sample count used by [`GradientSpec::complementary`] when callers have no preference.
pub const DEFAULT_COMPLEMENTARY_STEPS: usize = 5;

/// Lightness offset used by [`GradientSpec::shade`] when callers have no preference.
pub const DEFAULT_SHADE_FACTOR: f32 = 0.2;

const MONOCHROME_MIN_LIGHTNESS: f32 = 0.1;
const MONOCHROME_MAX_LIGHTNESS: f32 = 0.9;

fn require_steps(steps: usize, min: usize) -> Result<()> {
    if steps < min {
        return Err(GradientError::invalid_spec(format!(
            "at least {min} steps required, got {steps}"
        )));
    }
    Ok(())
}

/// `i / (steps - 1)` for `i in 0..steps`; callers guarantee `steps >= 2`.
fn ramp(steps: usize) -> impl Iterator<Item = f32> {
    let last = (steps - 1) as f32;
    (0..steps).map(move |i| i as f32 / last)
}

impl GradientSpec {
    /// Two-color fade between two opacity levels of `color`.
    pub fn from_single_color(color: Color, start_opacity: f32, end_opacity: f32) -> Self {
        Self::pair(color.with_opacity(start_opacity), color.with_opacity(end_opacity))
    }

    /// `steps` colors sharing the hue and saturation of `color`, lightness
    /// running linearly from 0.1 to 0.9.
    pub fn monochromatic(color: Color, steps: usize) -> Result<Self> {
        require_steps(steps, 2)?;
        let base = Hsl::from_color(color);
        let span = MONOCHROME_MAX_LIGHTNESS - MONOCHROME_MIN_LIGHTNESS;
        let colors: Vec<Color> = ramp(steps)
            .map(|t| base.with_lightness(MONOCHROME_MIN_LIGHTNESS + span * t).to_color())
            .collect();
        log::trace!("monochromatic ramp of {steps} from {}", color.to_hex());
        Self::new(colors)
    }

    /// `steps` samples of the RGBA interpolation from `a` to `b`, both ends included.
    pub fn mix(a: Color, b: Color, steps: usize) -> Result<Self> {
        require_steps(steps, 2)?;
        Self::new(ramp(steps).map(|t| a.lerp(b, t)).collect::<Vec<_>>())
    }

    /// Mix from `base` to its complementary hue.
    pub fn complementary(base: Color, steps: usize) -> Result<Self> {
        let hsl = Hsl::from_color(base);
        let complement = hsl.with_hue(hsl.h + 180.0).to_color();
        Self::mix(base, complement, steps)
    }

    /// Three colors 120° apart in hue.
    pub fn triadic(base: Color) -> Self {
        let hsl = Hsl::from_color(base);
        Self::from_valid(vec![
            base,
            hsl.with_hue(hsl.h + 120.0).to_color(),
            hsl.with_hue(hsl.h + 240.0).to_color(),
        ])
    }

    /// `steps` hues evenly spaced around the wheel, closed by repeating the first color.
    pub fn rainbow(saturation: f32, lightness: f32, steps: usize) -> Result<Self> {
        require_steps(steps, 1)?;
        let base = Hsl::new(0.0, saturation, lightness, 1.0);
        let mut colors: Vec<Color> = (0..steps)
            .map(|i| base.with_hue(360.0 * i as f32 / steps as f32).to_color())
            .collect();
        colors.push(colors[0]);
        Self::new(colors)
    }

    /// Linear gradient pointing at the canonical direction nearest to `angle_degrees`.
    pub fn angle_linear(
        colors: impl Into<Vec<Color>>,
        stops: Option<Vec<f32>>,
        angle_degrees: f32,
    ) -> Result<Self> {
        Self::builder(colors)
            .maybe_stops(stops)
            .direction(GradientDirection::from_angle(angle_degrees))
            .build()
    }

    /// Darker, base and lighter variants of `base`.
    ///
    /// `dark_factor` is subtracted from and `light_factor` added to the base
    /// lightness. With `dark_to_light == false` the order is reversed.
    pub fn shade(base: Color, dark_to_light: bool, dark_factor: f32, light_factor: f32) -> Self {
        let hsl = Hsl::from_color(base);
        let darker = hsl.with_lightness(hsl.l - dark_factor).to_color();
        let lighter = hsl.with_lightness(hsl.l + light_factor).to_color();
        let colors = if dark_to_light {
            vec![darker, base, lighter]
        } else {
            vec![lighter, base, darker]
        };
        Self::from_valid(colors)
    }

    fn pair(a: Color, b: Color) -> Self {
        Self::from_valid(vec![a, b])
    }

    /// Builds from colors whose count is known to satisfy the invariant.
    fn from_valid(colors: Vec<Color>) -> Self {
        Self::new(colors).expect("factory always yields at least 2 colors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(c: Color) -> Hsl {
        Hsl::from_color(c)
    }

    // ── from_single_color ─────────────────────────────────────────────────

    #[test]
    fn single_color_fades_alpha() {
        let g = GradientSpec::from_single_color(Color::BLUE, 1.0, 0.0);
        assert_eq!(g.colors(), &[Color::BLUE, Color::BLUE.with_alpha(0)]);
    }

    // ── monochromatic ─────────────────────────────────────────────────────

    #[test]
    fn monochromatic_teal_four_steps() {
        let g = GradientSpec::monochromatic(Color::TEAL, 4).unwrap();
        assert_eq!(g.colors().len(), 4);

        let expected = [0.1, 0.367, 0.633, 0.9];
        for (c, l) in g.colors().iter().zip(expected) {
            let h = hsl(*c);
            assert!((h.l - l).abs() < 0.01, "lightness {} vs {}", h.l, l);
            assert!((h.h - 180.0).abs() < 1.0, "hue {}", h.h);
        }
    }

    #[test]
    fn monochromatic_shares_hue() {
        let base = Color::rgb(200, 80, 40);
        let base_hue = hsl(base).h;
        let g = GradientSpec::monochromatic(base, 7).unwrap();
        assert_eq!(g.colors().len(), 7);
        for c in g.colors() {
            assert!((hsl(*c).h - base_hue).abs() < 3.0);
        }
    }

    #[test]
    fn monochromatic_requires_two_steps() {
        let err = GradientSpec::monochromatic(Color::TEAL, 1).unwrap_err();
        assert!(matches!(err, GradientError::InvalidSpec { .. }));
    }

    // ── mix / complementary ───────────────────────────────────────────────

    #[test]
    fn mix_includes_both_ends() {
        let a = Color::rgba(10, 20, 30, 40);
        let b = Color::rgba(250, 240, 230, 220);
        for steps in [2, 3, 5, 11] {
            let g = GradientSpec::mix(a, b, steps).unwrap();
            assert_eq!(g.colors().len(), steps);
            assert_eq!(g.colors().first(), Some(&a));
            assert_eq!(g.colors().last(), Some(&b));
        }
    }

    #[test]
    fn mix_requires_two_steps() {
        assert!(GradientSpec::mix(Color::RED, Color::BLUE, 0).is_err());
        assert!(GradientSpec::mix(Color::RED, Color::BLUE, 1).is_err());
    }

    #[test]
    fn complementary_of_red_ends_at_cyan() {
        let g = GradientSpec::complementary(Color::RED, DEFAULT_COMPLEMENTARY_STEPS).unwrap();
        assert_eq!(g.colors().len(), DEFAULT_COMPLEMENTARY_STEPS);
        assert_eq!(g.colors()[0], Color::RED);
        assert_eq!(g.colors()[4], Color::CYAN);
    }

    // ── triadic ───────────────────────────────────────────────────────────

    #[test]
    fn triadic_of_red_is_rgb() {
        let g = GradientSpec::triadic(Color::RED);
        assert_eq!(g.colors(), &[Color::RED, Color::GREEN, Color::BLUE]);
    }

    // ── rainbow ───────────────────────────────────────────────────────────

    #[test]
    fn rainbow_is_closed_loop() {
        for n in [1, 3, 6, 12] {
            let g = GradientSpec::rainbow(1.0, 0.5, n).unwrap();
            assert_eq!(g.colors().len(), n + 1);
            assert_eq!(g.colors().first(), g.colors().last());
        }
    }

    #[test]
    fn rainbow_hues_are_evenly_spaced() {
        let g = GradientSpec::rainbow(1.0, 0.5, 6).unwrap();
        let hues: Vec<f32> = g.colors().iter().map(|c| hsl(*c).h).collect();
        for (i, h) in hues.iter().take(6).enumerate() {
            assert!((h - 60.0 * i as f32).abs() < 1.0, "hue {h} at {i}");
        }
    }

    #[test]
    fn rainbow_requires_a_step() {
        assert!(GradientSpec::rainbow(1.0, 0.5, 0).is_err());
    }

    // ── angle_linear ──────────────────────────────────────────────────────

    #[test]
    fn angle_selects_nearest_direction() {
        let colors = [Color::RED, Color::BLUE];
        let at = |deg| GradientSpec::angle_linear(colors, None, deg).unwrap().direction();
        assert_eq!(at(0.0), GradientDirection::LeftToRight);
        assert_eq!(at(90.0), GradientDirection::TopToBottom);
        assert_eq!(at(45.0), GradientDirection::TopLeftToBottomRight);
        assert_eq!(at(100.0), GradientDirection::TopToBottom);
    }

    #[test]
    fn angle_linear_validates_stops() {
        let result = GradientSpec::angle_linear([Color::RED, Color::BLUE], Some(vec![0.0]), 0.0);
        assert!(result.is_err());
    }

    // ── shade ─────────────────────────────────────────────────────────────

    #[test]
    fn shade_orders_by_lightness() {
        let base = Color::rgb(40, 120, 200);
        let g = GradientSpec::shade(base, true, DEFAULT_SHADE_FACTOR, DEFAULT_SHADE_FACTOR);
        let l: Vec<f32> = g.colors().iter().map(|c| hsl(*c).l).collect();
        assert_eq!(g.colors()[1], base);
        assert!(l[0] < l[1] && l[1] < l[2]);

        let flipped = GradientSpec::shade(base, false, DEFAULT_SHADE_FACTOR, DEFAULT_SHADE_FACTOR);
        assert_eq!(flipped.colors(), g.reversed().colors());
    }
}
