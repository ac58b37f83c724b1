//! Mouse Drag Input
//!
//! Dragging with the primary button held rotates the model: vertical
//! motion feeds `rot_x`, horizontal motion feeds `rot_y`, at a fixed
//! radians-per-pixel rate with no smoothing and no bounds.

use crate::input::keyboard::ManualRotation;

/// Rotation per pixel of drag motion (radians).
pub const DRAG_RATE: f32 = 0.01;

/// Tracks primary-button drag state and applies drag deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    dragging: bool,
    last_pos: Option<(f32, f32)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary button press/release. Releasing forgets the anchor so the
    /// next drag does not jump.
    pub fn set_button(&mut self, pressed: bool) {
        self.dragging = pressed;
        if !pressed {
            self.last_pos = None;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Cursor moved to (x, y) in pixels. While dragging, applies the
    /// delta from the previous position to `rotation`:
    /// moving up tilts the model up, moving right spins it right.
    pub fn motion(&mut self, x: f32, y: f32, rotation: &mut ManualRotation) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_pos {
                rotation.rot_x += (last_y - y) * DRAG_RATE;
                rotation.rot_y += (x - last_x) * DRAG_RATE;
            }
        }
        self.last_pos = Some((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_applies_fixed_rate_deltas() {
        let mut drag = DragTracker::new();
        let mut rotation = ManualRotation::new();

        drag.set_button(true);
        drag.motion(100.0, 100.0, &mut rotation);
        drag.motion(110.0, 80.0, &mut rotation);

        // +10 px right, -20 px up
        assert!((rotation.rot_y - 10.0 * DRAG_RATE).abs() < 1e-6);
        assert!((rotation.rot_x - 20.0 * DRAG_RATE).abs() < 1e-6);
    }

    #[test]
    fn motion_without_button_does_nothing() {
        let mut drag = DragTracker::new();
        let mut rotation = ManualRotation::new();

        drag.motion(100.0, 100.0, &mut rotation);
        drag.motion(200.0, 200.0, &mut rotation);

        assert_eq!(rotation.rot_x, 0.0);
        assert_eq!(rotation.rot_y, 0.0);
    }

    #[test]
    fn release_forgets_anchor() {
        let mut drag = DragTracker::new();
        let mut rotation = ManualRotation::new();

        drag.set_button(true);
        drag.motion(0.0, 0.0, &mut rotation);
        drag.set_button(false);

        // Cursor jumps far away while released, then drag resumes: the
        // jump must not be applied.
        drag.set_button(true);
        drag.motion(500.0, 500.0, &mut rotation);
        assert_eq!(rotation.rot_x, 0.0);
        assert_eq!(rotation.rot_y, 0.0);

        drag.motion(501.0, 500.0, &mut rotation);
        assert!((rotation.rot_y - DRAG_RATE).abs() < 1e-6);
    }
}
