//! Rendering
//!
//! The GPU side of the demo: draw primitives and their tessellation into
//! one triangle-list batch, and the wgpu pipeline that uploads and draws
//! that batch with no depth buffer. Draw order is the occlusion order.

pub mod pipeline;
pub mod primitives;

pub use pipeline::{RenderConfig, RenderState};
pub use primitives::{DrawPrimitive, PrimitiveBatch, Vertex2d};
