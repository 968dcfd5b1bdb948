//! Coordinate and geometry types shared across the draw list and renderers.
//!
//! Canonical scene space:
//! - Projection units (fixed orthographic box, independent of window size)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! The renderer converts to NDC in the vertex shader using a projection uniform.

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
