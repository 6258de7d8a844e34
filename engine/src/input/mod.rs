//! Input Handling
//!
//! Key-to-action mapping for the demo. The event loop hands winit key
//! codes in; what comes back is a logical action carrying its bounded
//! state delta.

pub mod bindings;

pub use bindings::{InputAction, InputConfig, ROTATION_STEP, TILT_STEP};
