use crate::coords::{Anchor, Rect, Vec2};

use super::{Color, GradientKind, GradientShape, GradientSpec, SpreadMode};

/// A single gradient stop.
///
/// `t` is in [0, 1]. Stops are kept in the order the gradient lists them;
/// [`GradientDescriptor::color_at`] sorts internally when sampling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Geometry in normalized anchor space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientGeometry {
    Linear { begin: Anchor, end: Anchor },
    Radial { center: Anchor, radius: f32 },
    Sweep {
        center: Anchor,
        start_angle: f32,
        end_angle: f32,
    },
}

/// Geometry resolved against a concrete rectangle, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResolvedGeometry {
    Linear { start: Vec2, end: Vec2 },
    Radial { center: Vec2, radius: f32 },
    Sweep {
        center: Vec2,
        start_angle: f32,
        end_angle: f32,
    },
}

/// Renderable gradient handed to the host rendering layer.
///
/// Semantics:
/// - `geometry` is normalized; call [`resolve_in`](Self::resolve_in) for pixels.
/// - Stops carry straight-alpha colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescriptor {
    pub geometry: GradientGeometry,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl GradientSpec {
    /// Exports the host-facing descriptor.
    ///
    /// Specs without explicit stops get evenly spaced ones (`i / (n - 1)`).
    pub fn descriptor(&self) -> GradientDescriptor {
        let colors = self.colors();
        let last = (colors.len() - 1) as f32;
        let stops = match self.stops() {
            Some(stops) => colors
                .iter()
                .zip(stops)
                .map(|(c, t)| ColorStop::new(*t, *c))
                .collect(),
            None => colors
                .iter()
                .enumerate()
                .map(|(i, c)| ColorStop::new(i as f32 / last, *c))
                .collect(),
        };

        let geometry = match self.shape() {
            GradientShape::Linear { direction } => {
                let (begin, end) = direction.anchors();
                GradientGeometry::Linear { begin, end }
            }
            GradientShape::Radial { center, radius } => GradientGeometry::Radial { center, radius },
            GradientShape::Sweep {
                center,
                start_angle,
                end_angle,
            } => GradientGeometry::Sweep {
                center,
                start_angle,
                end_angle,
            },
        };

        GradientDescriptor {
            geometry,
            stops,
            spread: self.spread(),
        }
    }
}

impl GradientDescriptor {
    pub fn kind(&self) -> GradientKind {
        match self.geometry {
            GradientGeometry::Linear { .. } => GradientKind::Linear,
            GradientGeometry::Radial { .. } => GradientKind::Radial,
            GradientGeometry::Sweep { .. } => GradientKind::Sweep,
        }
    }

    /// Stops ordered by position.
    pub(crate) fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        stops
    }

    /// Samples the gradient at position `t`, applying the spread mode first.
    ///
    /// Returns transparent for a descriptor without stops.
    pub fn color_at(&self, t: f32) -> Color {
        self.color_at_position(apply_spread(t, self.spread))
    }

    /// Samples the gradient at `t` as laid out by the stops, ignoring the
    /// spread mode. Positions outside the stop range take the edge colors.
    pub(crate) fn color_at_position(&self, t: f32) -> Color {
        let stops = self.sorted_stops();

        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return Color::TRANSPARENT;
        };

        if t.is_nan() || t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }
        last.color
    }

    /// Maps anchors into `rect`. Radial radii scale with the shorter side.
    pub fn resolve_in(&self, rect: Rect) -> ResolvedGeometry {
        match self.geometry {
            GradientGeometry::Linear { begin, end } => ResolvedGeometry::Linear {
                start: begin.within(rect),
                end: end.within(rect),
            },
            GradientGeometry::Radial { center, radius } => ResolvedGeometry::Radial {
                center: center.within(rect),
                radius: radius * rect.shortest_side(),
            },
            GradientGeometry::Sweep {
                center,
                start_angle,
                end_angle,
            } => ResolvedGeometry::Sweep {
                center: center.within(rect),
                start_angle,
                end_angle,
            },
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.stops.iter().all(|s| s.color.is_opaque())
    }
}

fn apply_spread(t: f32, spread: SpreadMode) -> f32 {
    if !t.is_finite() {
        return 0.0;
    }
    match spread {
        SpreadMode::Pad => t,
        SpreadMode::Repeat => t.rem_euclid(1.0),
        SpreadMode::Reflect => {
            let m = t.rem_euclid(2.0);
            if m > 1.0 { 2.0 - m } else { m }
        }
    }
}
