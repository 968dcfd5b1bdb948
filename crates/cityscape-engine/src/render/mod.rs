//! GPU rendering subsystem.
//!
//! The renderer consumes a `scene` draw stream and issues GPU commands via wgpu.
//!
//! Convention:
//! - CPU geometry is in scene units (bottom-left origin, +Y up).
//! - Every command is tessellated into colored triangles in paint order, so
//!   mixed shape kinds keep their painter's-algorithm layering in one draw.
//! - The vertex shader converts to NDC using a projection uniform.

mod common;
mod ctx;
pub mod mesh;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use tessellate::{MeshVertex, Tessellator};
