use super::{Color, GradientDescriptor, GradientSpec};

/// Paint source for filling geometry.
///
/// Hosts dispatch on this enum; gradient variants are already exported
/// descriptors, so no further engine calls are needed to render them.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(GradientDescriptor),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn gradient(spec: &GradientSpec) -> Self {
        Paint::Gradient(spec.descriptor())
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            Paint::Gradient(g) => g.is_opaque(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::solid(color)
    }
}

impl From<&GradientSpec> for Paint {
    fn from(spec: &GradientSpec) -> Self {
        Paint::gradient(spec)
    }
}
