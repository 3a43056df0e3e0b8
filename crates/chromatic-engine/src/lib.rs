//! Chromatic engine crate.
//!
//! Immutable gradient configurations, the pure transformations that derive
//! new ones, and the descriptors host renderers consume. Nothing here touches
//! pixels, windows or input.
//!
//! # Quick start
//!
//! ```rust
//! use chromatic_engine::paint::{Color, GradientDirection, GradientSpec};
//! use chromatic_engine::presets;
//!
//! let teal = GradientSpec::monochromatic(Color::TEAL, 4)?;
//! assert_eq!(teal.colors().len(), 4);
//!
//! let ocean = presets::get("ocean")?.rotated(1);
//! assert_eq!(ocean.direction(), GradientDirection::RightToLeft);
//!
//! let descriptor = ocean.tinted(Color::WHITE, 0.25).descriptor();
//! assert_eq!(descriptor.stops.len(), 2);
//! # Ok::<(), chromatic_engine::GradientError>(())
//! ```

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod presets;

pub use error::{GradientError, Result};
