//! Gradient model handed from configuration code to host renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8) and its HSL decomposition
//! - immutable gradient specs, their factories and pure transformations
//! - export to render descriptors, GPU uniforms and paint sources
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod descriptor;
pub mod direction;
pub mod factory;
pub mod gradient;
pub mod hsl;
pub mod uniform;

mod paint;

pub use color::Color;
pub use descriptor::{ColorStop, GradientDescriptor, GradientGeometry, ResolvedGeometry};
pub use direction::GradientDirection;
pub use factory::{DEFAULT_COMPLEMENTARY_STEPS, DEFAULT_SHADE_FACTOR};
pub use gradient::{
    DEFAULT_RADIUS, DEFAULT_SWEEP_END, GradientKind, GradientShape, GradientSpec,
    GradientSpecBuilder, SpreadMode,
};
pub use hsl::Hsl;
pub use paint::Paint;
pub use uniform::{GradientUniform, MAX_UNIFORM_STOPS};
