//! Coordinate types shared by gradient descriptors and hosts.
//!
//! Canonical pixel space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Gradient geometry is stored in normalized [`Anchor`] space and resolved
//! against a [`Rect`] only when a host asks for pixel positions.

mod anchor;
mod rect;
mod vec2;

pub use anchor::Anchor;
pub use rect::Rect;
pub use vec2::Vec2;
