use super::{Rect, Vec2};

/// Normalized anchor point inside a painted box.
///
/// Both axes span [-1, 1]: `(-1, -1)` is the top-left corner, `(0, 0)` the
/// geometric center and `(1, 1)` the bottom-right corner (+Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const TOP_LEFT: Self = Self::new(-1.0, -1.0);
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    pub const TOP_RIGHT: Self = Self::new(1.0, -1.0);
    pub const CENTER_LEFT: Self = Self::new(-1.0, 0.0);
    pub const CENTER: Self = Self::new(0.0, 0.0);
    pub const CENTER_RIGHT: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_LEFT: Self = Self::new(-1.0, 1.0);
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Maps the anchor to a pixel position inside `rect`.
    #[inline]
    pub fn within(self, rect: Rect) -> Vec2 {
        let half = rect.size * 0.5;
        let center = rect.center();
        Vec2::new(center.x + self.x * half.x, center.y + self.y * half.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_rect_corners() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(Anchor::TOP_LEFT.within(rect), rect.min());
        assert_eq!(Anchor::BOTTOM_RIGHT.within(rect), rect.max());
        assert_eq!(Anchor::CENTER.within(rect), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn edge_midpoints() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(Anchor::CENTER_LEFT.within(rect), Vec2::new(0.0, 50.0));
        assert_eq!(Anchor::BOTTOM_CENTER.within(rect), Vec2::new(100.0, 100.0));
    }
}
