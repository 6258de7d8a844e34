//! Iso Grid Engine Library
//!
//! Everything behind the isometric hexagon grid demo except the window
//! itself: view state, projection geometry, scene assembly, the flat 2D
//! wgpu renderer, input bindings and frame timing.
//!
//! # Modules
//!
//! - [`state`] - The three view scalars (rotation, tilt, ring count) with
//!   delta-validated mutation
//! - [`geometry`] - Hexagonal prism projection, face visibility and the
//!   ring layout, all pure math
//! - [`scene`] - Assembles one frame of draw primitives from the state
//! - [`render`] - Draw primitives, batch tessellation and the wgpu pipeline
//! - [`input`] - Key bindings mapping key codes to bounded state deltas
//! - [`theme`] - Colors and sizing in one place
//! - [`timing`] - Fixed-cadence frame pacing and FPS tracking
//!
//! # Example
//!
//! ```ignore
//! use isohex_engine::render::{PrimitiveBatch, RenderConfig, RenderState};
//! use isohex_engine::scene::build_frame;
//! use isohex_engine::state::ViewState;
//! use isohex_engine::theme::SceneTheme;
//!
//! let mut view = ViewState::new();
//! view.add_rotation(0.05)?;
//!
//! let theme = SceneTheme::default();
//! let primitives = build_frame(&view, 1920, 1080, &theme);
//!
//! let mut batch = PrimitiveBatch::new();
//! batch.extend(&primitives);
//!
//! // Window in hand, draw it
//! let mut render_state = RenderState::new(window, &RenderConfig::default());
//! render_state.render(&batch, theme.background)?;
//! ```

pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod state;
pub mod theme;
pub mod timing;

// Re-export the types the binary wires together
pub use input::{InputAction, InputConfig};
pub use render::{DrawPrimitive, PrimitiveBatch, RenderConfig, RenderState};
pub use state::{StateDeltaError, ViewState};
pub use theme::SceneTheme;
pub use timing::{FpsCounter, FramePacer, TARGET_FPS};
