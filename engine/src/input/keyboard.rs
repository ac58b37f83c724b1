//! Keyboard Input Module
//!
//! Directional and media keys adjust the manual rotation offset by a fixed
//! quarter-turn step per press; the trigger keys reset the head tracker
//! and camera. Media keys are included because lens viewers often expose
//! their magnet/button trigger as a media key event.

use std::f32::consts::FRAC_PI_4;

/// Rotation step per discrete key press (radians).
pub const KEY_ROTATE_STEP: f32 = FRAC_PI_4;

/// Generic key codes for viewer input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,

    // Headset remote / media keys
    MediaPrevious,
    MediaNext,
    MediaFastForward,
    MediaRewind,
    MediaEnter,

    // Desktop keys
    KeyR,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// What a key press asked the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The rotation offset changed.
    Rotated,
    /// Reset the head tracker and camera position.
    Reset,
    /// Not a viewer key.
    Ignored,
}

/// Manual rotation offset applied to the model.
///
/// Unbounded and unsmoothed on purpose: each press is one discrete
/// quarter-turn, each drag pixel is one fixed increment. This rotates the
/// displayed model, not the camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualRotation {
    pub rot_x: f32,
    pub rot_y: f32,
}

impl ManualRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a discrete key press.
    ///
    /// Left/right adjust `rot_x`, up/down adjust `rot_y`. The crossed
    /// wiring is deliberate; do not swap it.
    pub fn handle_key(&mut self, key: KeyCode) -> KeyResponse {
        match key {
            KeyCode::ArrowLeft | KeyCode::MediaPrevious => {
                self.rot_x += KEY_ROTATE_STEP;
                KeyResponse::Rotated
            }
            KeyCode::ArrowRight | KeyCode::MediaNext => {
                self.rot_x -= KEY_ROTATE_STEP;
                KeyResponse::Rotated
            }
            KeyCode::ArrowUp | KeyCode::MediaFastForward => {
                self.rot_y += KEY_ROTATE_STEP;
                KeyResponse::Rotated
            }
            KeyCode::ArrowDown | KeyCode::MediaRewind => {
                self.rot_y -= KEY_ROTATE_STEP;
                KeyResponse::Rotated
            }
            KeyCode::MediaEnter | KeyCode::KeyR | KeyCode::Enter => KeyResponse::Reset,
            _ => KeyResponse::Ignored,
        }
    }

    /// Clear the rotation offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
