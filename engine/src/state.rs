//! View State
//!
//! The three scalars that define what the demo shows: grid rotation,
//! isometric tilt, and ring count. Each is mutated only through a bounded
//! delta; the delta itself is validated and rejected when out of range,
//! while the accumulated value is wrapped (rotation) or clamped (tilt,
//! rings).

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use thiserror::Error;

/// Floor for the isometric tilt angle (radians). Tilt never reaches zero,
/// so the projection never collapses to a flat line and prism height never
/// degenerates.
pub const MIN_TILT: f32 = 0.05;

/// Ceiling for the isometric tilt angle: straight top-down view.
pub const MAX_TILT: f32 = FRAC_PI_2;

/// Largest ring count the grid will grow to.
pub const MAX_RINGS: i32 = 5;

/// Largest rotation delta accepted in a single call (one full turn).
pub const MAX_ROTATION_DELTA: f32 = TAU;

/// Largest tilt delta accepted in a single call.
pub const MAX_TILT_DELTA: f32 = FRAC_PI_2;

/// Largest ring-count delta accepted in a single call.
pub const MAX_RING_DELTA: i32 = 1;

/// A caller handed a mutator a delta outside its accepted symmetric range.
/// The state is left untouched when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StateDeltaError {
    #[error("rotation delta {0} outside accepted range +/-{MAX_ROTATION_DELTA}")]
    Rotation(f32),
    #[error("tilt delta {0} outside accepted range +/-{MAX_TILT_DELTA}")]
    Tilt(f32),
    #[error("ring-count delta {0} outside accepted range +/-{MAX_RING_DELTA}")]
    Rings(i32),
}

/// Current view parameters. Fields are private: reads go through the
/// accessors, writes only through the delta mutators below.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Grid rotation in radians, always in `[0, 2*pi)`.
    rotation: f32,
    /// Isometric tilt in radians, always in `[MIN_TILT, pi/2]`.
    tilt: f32,
    /// Number of rings around the origin hexagon, always in `[0, MAX_RINGS]`.
    ring_count: i32,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            tilt: FRAC_PI_4,
            ring_count: 3,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn ring_count(&self) -> i32 {
        self.ring_count
    }

    /// Rotate the grid by `delta` radians. The accumulated angle wraps into
    /// `[0, 2*pi)` and never goes negative.
    pub fn add_rotation(&mut self, delta: f32) -> Result<(), StateDeltaError> {
        // NaN and out-of-range both land here
        if !(delta.abs() <= MAX_ROTATION_DELTA) {
            return Err(StateDeltaError::Rotation(delta));
        }
        self.rotation = (self.rotation + delta).rem_euclid(TAU);
        // rem_euclid can round up to the modulus itself for tiny negatives
        if self.rotation >= TAU {
            self.rotation = 0.0;
        }
        Ok(())
    }

    /// Tilt the view by `delta` radians. The accumulated angle clamps to
    /// `[MIN_TILT, pi/2]`.
    pub fn add_tilt(&mut self, delta: f32) -> Result<(), StateDeltaError> {
        if !(delta.abs() <= MAX_TILT_DELTA) {
            return Err(StateDeltaError::Tilt(delta));
        }
        self.tilt = (self.tilt + delta).clamp(MIN_TILT, MAX_TILT);
        Ok(())
    }

    /// Grow or shrink the grid by `delta` rings. The accumulated count
    /// clamps to `[0, MAX_RINGS]`.
    pub fn add_rings(&mut self, delta: i32) -> Result<(), StateDeltaError> {
        if delta.abs() > MAX_RING_DELTA {
            return Err(StateDeltaError::Rings(delta));
        }
        self.ring_count = (self.ring_count + delta).clamp(0, MAX_RINGS);
        Ok(())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_default_state() {
        let state = ViewState::new();
        assert_eq!(state.rotation(), 0.0);
        assert_approx_eq!(state.tilt(), FRAC_PI_4, 1e-6);
        assert_eq!(state.ring_count(), 3);
    }

    #[test]
    fn test_rotation_full_turn_wraps_to_zero() {
        let mut state = ViewState::new();
        state.add_rotation(TAU).unwrap();
        assert_eq!(state.rotation(), 0.0);
    }

    #[test]
    fn test_rotation_never_negative() {
        let mut state = ViewState::new();
        state.add_rotation(-0.01).unwrap();
        assert_approx_eq!(state.rotation(), TAU - 0.01, 1e-5);
        assert!(state.rotation() >= 0.0);
        assert!(state.rotation() < TAU);

        // Keep stepping backwards; the invariant must hold the whole way
        for _ in 0..1000 {
            state.add_rotation(-0.1).unwrap();
            assert!(state.rotation() >= 0.0 && state.rotation() < TAU);
        }
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut state = ViewState::new();
        state.add_rotation(1.0).unwrap();
        state.add_rotation(2.0).unwrap();
        assert_approx_eq!(state.rotation(), 3.0, 1e-6);
    }

    #[test]
    fn test_rotation_delta_rejected_out_of_range() {
        let mut state = ViewState::new();
        state.add_rotation(1.0).unwrap();
        let before = state.clone();

        assert_eq!(state.add_rotation(7.0), Err(StateDeltaError::Rotation(7.0)));
        assert_eq!(state, before);
        assert!(state.add_rotation(f32::NAN).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_tilt_clamps_to_floor_and_ceiling() {
        let mut state = ViewState::new();
        state.add_tilt(-FRAC_PI_2).unwrap();
        assert_eq!(state.tilt(), MIN_TILT);

        state.add_tilt(FRAC_PI_2).unwrap();
        state.add_tilt(FRAC_PI_2).unwrap();
        assert_eq!(state.tilt(), MAX_TILT);
    }

    #[test]
    fn test_tilt_delta_rejected_out_of_range() {
        let mut state = ViewState::new();
        let before = state.clone();
        assert_eq!(state.add_tilt(2.0), Err(StateDeltaError::Tilt(2.0)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_ring_count_clamps_at_bounds() {
        let mut state = ViewState::new();
        for _ in 0..10 {
            state.add_rings(1).unwrap();
        }
        assert_eq!(state.ring_count(), MAX_RINGS);

        for _ in 0..10 {
            state.add_rings(-1).unwrap();
        }
        assert_eq!(state.ring_count(), 0);
        state.add_rings(-1).unwrap();
        assert_eq!(state.ring_count(), 0);
    }

    #[test]
    fn test_ring_delta_rejected_out_of_range() {
        let mut state = ViewState::new();
        assert_eq!(state.add_rings(2), Err(StateDeltaError::Rings(2)));
        assert_eq!(state.add_rings(-3), Err(StateDeltaError::Rings(-3)));
        assert_eq!(state.ring_count(), 3);
    }
}
