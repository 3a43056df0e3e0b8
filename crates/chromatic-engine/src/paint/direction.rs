use crate::coords::Anchor;

/// One of the eight canonical linear gradient directions.
///
/// Directions fall into two rotation cycles that never mix: the four
/// axis-aligned directions and the four diagonals.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
    TopLeftToBottomRight,
    BottomRightToTopLeft,
    TopRightToBottomLeft,
    BottomLeftToTopRight,
}

use GradientDirection::*;

/// Clockwise quarter-turn order (y-down) of the axis-aligned directions.
const AXIS_CYCLE: [GradientDirection; 4] = [LeftToRight, TopToBottom, RightToLeft, BottomToTop];

/// Clockwise quarter-turn order (y-down) of the diagonal directions.
const DIAGONAL_CYCLE: [GradientDirection; 4] = [
    TopLeftToBottomRight,
    TopRightToBottomLeft,
    BottomRightToTopLeft,
    BottomLeftToTopRight,
];

/// Directions indexed by 45° sector, starting at 0° (pointing right) and
/// turning clockwise in y-down space.
const BY_ANGLE: [GradientDirection; 8] = [
    LeftToRight,
    TopLeftToBottomRight,
    TopToBottom,
    TopRightToBottomLeft,
    RightToLeft,
    BottomRightToTopLeft,
    BottomToTop,
    BottomLeftToTopRight,
];

impl GradientDirection {
    pub const ALL: [GradientDirection; 8] = BY_ANGLE;

    #[inline]
    pub fn is_diagonal(self) -> bool {
        DIAGONAL_CYCLE.contains(&self)
    }

    /// Advances the direction by `quarter_turns` clockwise steps within its cycle.
    ///
    /// Negative values turn counter-clockwise.
    pub fn rotated(self, quarter_turns: i32) -> Self {
        let cycle = if self.is_diagonal() { &DIAGONAL_CYCLE } else { &AXIS_CYCLE };
        // Every direction appears in exactly one cycle.
        let idx = cycle.iter().position(|d| *d == self).unwrap_or(0);
        let step = quarter_turns.rem_euclid(4) as usize;
        cycle[(idx + step) % 4]
    }

    /// Nearest canonical direction to `degrees`.
    ///
    /// Each direction owns a 45° bucket centered on its own angle, so the
    /// boundaries sit at 22.5° + k·45°.
    pub fn from_angle(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return LeftToRight;
        }
        let normalized = degrees.rem_euclid(360.0);
        let sector = ((normalized + 22.5) / 45.0).floor() as usize % 8;
        BY_ANGLE[sector]
    }

    /// Angle in degrees this direction points at (0° right, 90° down).
    pub fn angle(self) -> f32 {
        let sector = BY_ANGLE.iter().position(|d| *d == self).unwrap_or(0);
        sector as f32 * 45.0
    }

    /// `(begin, end)` anchors on opposite edges or corners of the painted box.
    pub fn anchors(self) -> (Anchor, Anchor) {
        match self {
            LeftToRight => (Anchor::CENTER_LEFT, Anchor::CENTER_RIGHT),
            RightToLeft => (Anchor::CENTER_RIGHT, Anchor::CENTER_LEFT),
            TopToBottom => (Anchor::TOP_CENTER, Anchor::BOTTOM_CENTER),
            BottomToTop => (Anchor::BOTTOM_CENTER, Anchor::TOP_CENTER),
            TopLeftToBottomRight => (Anchor::TOP_LEFT, Anchor::BOTTOM_RIGHT),
            BottomRightToTopLeft => (Anchor::BOTTOM_RIGHT, Anchor::TOP_LEFT),
            TopRightToBottomLeft => (Anchor::TOP_RIGHT, Anchor::BOTTOM_LEFT),
            BottomLeftToTopRight => (Anchor::BOTTOM_LEFT, Anchor::TOP_RIGHT),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        self.rotated(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn four_quarter_turns_is_identity() {
        for d in GradientDirection::ALL {
            assert_eq!(d.rotated(4), d);
            assert_eq!(d.rotated(1).rotated(1).rotated(1).rotated(1), d.rotated(4));
        }
    }

    #[test]
    fn cycles_never_cross() {
        for d in GradientDirection::ALL {
            for k in -5..=5 {
                assert_eq!(d.rotated(k).is_diagonal(), d.is_diagonal());
            }
        }
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        assert_eq!(LeftToRight.rotated(1), TopToBottom);
        assert_eq!(TopLeftToBottomRight.rotated(1), TopRightToBottomLeft);
    }

    #[test]
    fn negative_turns_go_counter_clockwise() {
        assert_eq!(LeftToRight.rotated(-1), BottomToTop);
        assert_eq!(LeftToRight.rotated(-1), LeftToRight.rotated(3));
    }

    #[test]
    fn opposite_reverses_anchors() {
        for d in GradientDirection::ALL {
            let (begin, end) = d.anchors();
            assert_eq!(d.opposite().anchors(), (end, begin));
        }
    }

    // ── angle buckets ─────────────────────────────────────────────────────

    #[test]
    fn canonical_angles() {
        assert_eq!(GradientDirection::from_angle(0.0), LeftToRight);
        assert_eq!(GradientDirection::from_angle(45.0), TopLeftToBottomRight);
        assert_eq!(GradientDirection::from_angle(90.0), TopToBottom);
        assert_eq!(GradientDirection::from_angle(180.0), RightToLeft);
        assert_eq!(GradientDirection::from_angle(270.0), BottomToTop);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(GradientDirection::from_angle(22.4), LeftToRight);
        assert_eq!(GradientDirection::from_angle(22.5), TopLeftToBottomRight);
        assert_eq!(GradientDirection::from_angle(337.5), LeftToRight);
        assert_eq!(GradientDirection::from_angle(337.4), BottomLeftToTopRight);
    }

    #[test]
    fn negative_and_large_angles_wrap() {
        assert_eq!(GradientDirection::from_angle(-90.0), BottomToTop);
        assert_eq!(GradientDirection::from_angle(450.0), TopToBottom);
    }

    #[test]
    fn angle_round_trips_through_buckets() {
        for d in GradientDirection::ALL {
            assert_eq!(GradientDirection::from_angle(d.angle()), d);
        }
    }
}
