use std::f32::consts::TAU;

use crate::coords::Anchor;
use crate::error::{GradientError, Result};

use super::{Color, GradientDirection, Hsl};

/// Default radius of radial gradients, relative to the shorter side of the painted box.
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Default sweep end angle (one full turn, radians).
pub const DEFAULT_SWEEP_END: f32 = TAU;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// Geometric pattern of a gradient.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
    Sweep,
}

/// Kind-specific geometry. Each variant only carries the fields meaningful for it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientShape {
    Linear { direction: GradientDirection },
    Radial { center: Anchor, radius: f32 },
    /// Angles in radians, clockwise from the positive x axis.
    Sweep {
        center: Anchor,
        start_angle: f32,
        end_angle: f32,
    },
}

impl Default for GradientShape {
    fn default() -> Self {
        Self::Linear {
            direction: GradientDirection::LeftToRight,
        }
    }
}

impl GradientShape {
    #[inline]
    pub fn kind(&self) -> GradientKind {
        match self {
            Self::Linear { .. } => GradientKind::Linear,
            Self::Radial { .. } => GradientKind::Radial,
            Self::Sweep { .. } => GradientKind::Sweep,
        }
    }

    /// Radial shape with the default center and radius.
    pub fn radial() -> Self {
        Self::Radial {
            center: Anchor::CENTER,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Full-turn sweep shape around the center.
    pub fn sweep() -> Self {
        Self::Sweep {
            center: Anchor::CENTER,
            start_angle: 0.0,
            end_angle: DEFAULT_SWEEP_END,
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Self::Linear { .. } => Ok(()),
            Self::Radial { center, radius } => {
                if !center.is_finite() {
                    return Err(GradientError::invalid_spec("radial center must be finite"));
                }
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(GradientError::invalid_spec(format!(
                        "radius must be finite and positive, got {radius}"
                    )));
                }
                Ok(())
            }
            Self::Sweep {
                center,
                start_angle,
                end_angle,
            } => {
                if !center.is_finite() {
                    return Err(GradientError::invalid_spec("sweep center must be finite"));
                }
                if !(start_angle.is_finite() && end_angle.is_finite()) {
                    return Err(GradientError::invalid_spec("sweep angles must be finite"));
                }
                Ok(())
            }
        }
    }
}

/// Immutable gradient configuration.
///
/// Invariants (checked at construction, preserved by every transformation):
/// - at least 2 colors
/// - when present, `stops` has one finite value in [0, 1] per color
/// - radial radius is finite and positive; sweep angles are finite
///
/// Stop ordering is not enforced: [`reversed`](Self::reversed) reorders the
/// stop list without remapping its values.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    colors: Vec<Color>,
    stops: Option<Vec<f32>>,
    shape: GradientShape,
    spread: SpreadMode,
}

impl GradientSpec {
    /// Linear left-to-right gradient over `colors` with evenly spaced stops.
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self> {
        Self::builder(colors).build()
    }

    pub fn builder(colors: impl Into<Vec<Color>>) -> GradientSpecBuilder {
        GradientSpecBuilder {
            colors: colors.into(),
            stops: None,
            shape: GradientShape::default(),
            spread: SpreadMode::default(),
        }
    }

    fn validated(self) -> Result<Self> {
        if self.colors.len() < 2 {
            return Err(GradientError::invalid_spec(format!(
                "at least 2 colors required, got {}",
                self.colors.len()
            )));
        }
        if let Some(stops) = &self.stops {
            if stops.len() != self.colors.len() {
                return Err(GradientError::invalid_spec(format!(
                    "{} stops given for {} colors",
                    stops.len(),
                    self.colors.len()
                )));
            }
            let out_of_range = |s: &&f32| !(s.is_finite() && (0.0..=1.0).contains(*s));
            if let Some(bad) = stops.iter().find(out_of_range) {
                return Err(GradientError::invalid_spec(format!("stop {bad} outside [0, 1]")));
            }
        }
        self.shape.validate()?;
        Ok(self)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    #[inline]
    pub fn shape(&self) -> GradientShape {
        self.shape
    }

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.shape.kind()
    }

    #[inline]
    pub fn spread(&self) -> SpreadMode {
        self.spread
    }

    /// Linear direction; `LeftToRight` for other kinds.
    pub fn direction(&self) -> GradientDirection {
        match self.shape {
            GradientShape::Linear { direction } => direction,
            _ => GradientDirection::default(),
        }
    }

    /// Radial/sweep center; `Anchor::CENTER` for linear gradients.
    pub fn center(&self) -> Anchor {
        match self.shape {
            GradientShape::Radial { center, .. } | GradientShape::Sweep { center, .. } => center,
            GradientShape::Linear { .. } => Anchor::CENTER,
        }
    }

    /// Radial radius; [`DEFAULT_RADIUS`] for other kinds.
    pub fn radius(&self) -> f32 {
        match self.shape {
            GradientShape::Radial { radius, .. } => radius,
            _ => DEFAULT_RADIUS,
        }
    }

    /// Sweep start angle; `0` for other kinds.
    pub fn start_angle(&self) -> f32 {
        match self.shape {
            GradientShape::Sweep { start_angle, .. } => start_angle,
            _ => 0.0,
        }
    }

    /// Sweep end angle; [`DEFAULT_SWEEP_END`] for other kinds.
    pub fn end_angle(&self) -> f32 {
        match self.shape {
            GradientShape::Sweep { end_angle, .. } => end_angle,
            _ => DEFAULT_SWEEP_END,
        }
    }

    // ── transformations ───────────────────────────────────────────────────

    /// Reverses the color order.
    ///
    /// Stops are reversed as a list, not remapped to `1 - stop`: a spec with
    /// stops `[0.0, 0.2, 1.0]` comes back with `[1.0, 0.2, 0.0]`. Callers that
    /// want mirrored positions must remap them explicitly.
    pub fn reversed(&self) -> Self {
        let mut colors = self.colors.clone();
        colors.reverse();
        let stops = self.stops.as_ref().map(|s| s.iter().rev().copied().collect());
        Self {
            colors,
            stops,
            ..self.clone()
        }
    }

    /// Rotates a linear gradient by `quarter_turns` clockwise quarter turns.
    ///
    /// Radial and sweep gradients are returned unchanged.
    pub fn rotated(&self, quarter_turns: i32) -> Self {
        match self.shape {
            GradientShape::Linear { direction } => Self {
                shape: GradientShape::Linear {
                    direction: direction.rotated(quarter_turns),
                },
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Moves every color towards `tint` by `strength` in [0, 1].
    pub fn tinted(&self, tint: Color, strength: f32) -> Self {
        self.map_colors(|c| c.lerp(tint, strength))
    }

    /// Scales HSL lightness by `factor` (clamped to [0, 1] afterwards).
    pub fn with_brightness(&self, factor: f32) -> Self {
        let factor = non_negative(factor);
        self.map_hsl(|hsl| hsl.with_lightness(hsl.l * factor))
    }

    /// Scales HSL saturation by `factor` (clamped to [0, 1] afterwards).
    pub fn with_saturation(&self, factor: f32) -> Self {
        let factor = non_negative(factor);
        self.map_hsl(|hsl| hsl.with_saturation(hsl.s * factor))
    }

    /// Scales every color's alpha by `factor`.
    pub fn with_opacity(&self, factor: f32) -> Self {
        let factor = non_negative(factor);
        self.map_colors(|c| c.with_opacity(c.opacity() * factor))
    }

    /// Rotates every color's hue by `degrees`.
    pub fn hue_shifted(&self, degrees: f32) -> Self {
        self.map_hsl(|hsl| hsl.with_hue(hsl.h + degrees))
    }

    pub fn with_stops(&self, stops: Option<Vec<f32>>) -> Result<Self> {
        Self {
            stops,
            ..self.clone()
        }
        .validated()
    }

    pub fn with_shape(&self, shape: GradientShape) -> Result<Self> {
        Self {
            shape,
            ..self.clone()
        }
        .validated()
    }

    pub fn with_spread(&self, spread: SpreadMode) -> Self {
        Self {
            spread,
            ..self.clone()
        }
    }

    fn map_colors(&self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            colors: self.colors.iter().copied().map(f).collect(),
            ..self.clone()
        }
    }

    fn map_hsl(&self, f: impl Fn(Hsl) -> Hsl) -> Self {
        self.map_colors(|c| f(Hsl::from_color(c)).to_color())
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

/// Builder for [`GradientSpec`]; every field except the colors has a default.
#[derive(Debug, Clone)]
pub struct GradientSpecBuilder {
    colors: Vec<Color>,
    stops: Option<Vec<f32>>,
    shape: GradientShape,
    spread: SpreadMode,
}

impl GradientSpecBuilder {
    pub fn stops(mut self, stops: impl Into<Vec<f32>>) -> Self {
        self.stops = Some(stops.into());
        self
    }

    pub fn maybe_stops(mut self, stops: Option<Vec<f32>>) -> Self {
        self.stops = stops;
        self
    }

    pub fn direction(mut self, direction: GradientDirection) -> Self {
        self.shape = GradientShape::Linear { direction };
        self
    }

    pub fn radial(mut self, center: Anchor, radius: f32) -> Self {
        self.shape = GradientShape::Radial { center, radius };
        self
    }

    pub fn sweep(mut self, center: Anchor, start_angle: f32, end_angle: f32) -> Self {
        self.shape = GradientShape::Sweep { center, start_angle, end_angle };
        self
    }

    pub fn shape(mut self, shape: GradientShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn spread(mut self, spread: SpreadMode) -> Self {
        self.spread = spread;
        self
    }

    /// Validates and freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::InvalidSpec`] when fewer than 2 colors are given,
    /// the stops do not match the colors, or the shape parameters are invalid.
    pub fn build(self) -> Result<GradientSpec> {
        GradientSpec {
            colors: self.colors,
            stops: self.stops,
            shape: self.shape,
            spread: self.spread,
        }
        .validated()
    }
}
