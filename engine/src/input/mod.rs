//! Input Module
//!
//! Fallback manual controls for when head tracking is unavailable or the
//! viewer is driven at a desk: directional/media keys nudge the model
//! rotation by a fixed step, and dragging rotates it freely. Decoupled
//! from any specific windowing system; the binary maps winit events onto
//! [`KeyCode`] and cursor coordinates.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyResponse, ManualRotation, KEY_ROTATE_STEP};
pub use mouse::{DragTracker, DRAG_RATE};
