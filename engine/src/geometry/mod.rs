//! Hexagon Geometry
//!
//! Pure projection and layout math for the isometric grid. Nothing in here
//! touches the GPU; everything is plain points in, draw primitives out, so
//! the whole pipeline tests without a window.

pub mod layout;
pub mod prism;

pub use layout::grid_centers;
pub use prism::{CapGeometry, FACE_COUNT, classify_faces, emit_prism, face_visible, project_cap};
