//! Input Bindings
//!
//! Defines all key bindings as a data structure, centralizing input
//! documentation and keeping key matches out of the main loop. Every
//! action is a bounded state delta; there is no absolute-set binding.

use winit::keyboard::KeyCode;

/// Radians applied per rotation key event.
pub const ROTATION_STEP: f32 = 0.05;

/// Radians applied per tilt key event.
pub const TILT_STEP: f32 = 0.05;

/// Logical action a key event maps to, returned by
/// `InputConfig::classify_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Rotate the grid counter-clockwise by one step
    RotateCcw,
    /// Rotate the grid clockwise by one step
    RotateCw,
    /// Steepen the view toward top-down by one step
    TiltUp,
    /// Flatten the view by one step
    TiltDown,
    /// Add one ring to the grid
    GrowRings,
    /// Remove one ring from the grid
    ShrinkRings,
}

impl InputAction {
    /// The rotation delta this action contributes, if it is a rotation.
    pub fn rotation_delta(self) -> Option<f32> {
        match self {
            InputAction::RotateCcw => Some(-ROTATION_STEP),
            InputAction::RotateCw => Some(ROTATION_STEP),
            _ => None,
        }
    }

    /// The tilt delta this action contributes, if it is a tilt.
    pub fn tilt_delta(self) -> Option<f32> {
        match self {
            InputAction::TiltUp => Some(TILT_STEP),
            InputAction::TiltDown => Some(-TILT_STEP),
            _ => None,
        }
    }

    /// The ring-count delta this action contributes, if it is one.
    pub fn ring_delta(self) -> Option<i32> {
        match self {
            InputAction::GrowRings => Some(1),
            InputAction::ShrinkRings => Some(-1),
            _ => None,
        }
    }
}

/// Grid rotation key bindings (A/D plus left/right arrows).
#[derive(Clone, Debug)]
pub struct RotationBindings {
    pub ccw: KeyCode,
    pub ccw_alt: KeyCode,
    pub cw: KeyCode,
    pub cw_alt: KeyCode,
}

/// Isometric tilt key bindings (W/S plus up/down arrows).
#[derive(Clone, Debug)]
pub struct TiltBindings {
    pub up: KeyCode,
    pub up_alt: KeyCode,
    pub down: KeyCode,
    pub down_alt: KeyCode,
}

/// Grid growth key bindings (+/- on both the main row and the numpad).
#[derive(Clone, Debug)]
pub struct RingBindings {
    pub grow: KeyCode,
    pub grow_numpad: KeyCode,
    pub shrink: KeyCode,
    pub shrink_numpad: KeyCode,
}

/// Centralized input configuration containing all key bindings.
///
/// `InputConfig::default()` returns the documented bindings. Escape is
/// listed here for completeness but handled directly by the event loop.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub rotation: RotationBindings,
    pub tilt: TiltBindings,
    pub rings: RingBindings,
    pub exit: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotation: RotationBindings {
                ccw: KeyCode::KeyA,
                ccw_alt: KeyCode::ArrowLeft,
                cw: KeyCode::KeyD,
                cw_alt: KeyCode::ArrowRight,
            },
            tilt: TiltBindings {
                up: KeyCode::KeyW,
                up_alt: KeyCode::ArrowUp,
                down: KeyCode::KeyS,
                down_alt: KeyCode::ArrowDown,
            },
            rings: RingBindings {
                grow: KeyCode::Equal,
                grow_numpad: KeyCode::NumpadAdd,
                shrink: KeyCode::Minus,
                shrink_numpad: KeyCode::NumpadSubtract,
            },
            exit: KeyCode::Escape,
        }
    }
}

impl InputConfig {
    /// Classify which action a key triggers.
    ///
    /// Returns `None` for unbound keys and for the exit key, which the
    /// event loop checks before consulting the bindings.
    pub fn classify_key(&self, key: KeyCode) -> Option<InputAction> {
        if key == self.rotation.ccw || key == self.rotation.ccw_alt {
            return Some(InputAction::RotateCcw);
        }
        if key == self.rotation.cw || key == self.rotation.cw_alt {
            return Some(InputAction::RotateCw);
        }
        if key == self.tilt.up || key == self.tilt.up_alt {
            return Some(InputAction::TiltUp);
        }
        if key == self.tilt.down || key == self.tilt.down_alt {
            return Some(InputAction::TiltDown);
        }
        if key == self.rings.grow || key == self.rings.grow_numpad {
            return Some(InputAction::GrowRings);
        }
        if key == self.rings.shrink || key == self.rings.shrink_numpad {
            return Some(InputAction::ShrinkRings);
        }
        None
    }
}
