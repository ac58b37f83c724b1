//! Rocket VR Engine Library
//!
//! Core pieces of a stereoscopic viewer for head-mounted displays: a
//! head-orientation-to-camera-motion mapper, a side-by-side stereo render
//! pass built on wgpu, and the small scene it draws (a rocket model, a text
//! label, and a reference grid).
//!
//! # Modules
//!
//! - [`camera`] - Head motion mapping and stereo camera matrices
//! - [`input`] - Platform-agnostic fallback controls (keys, drag)
//! - [`render`] - GPU context, uniforms, and the stereo render pass
//! - [`scene`] - Procedural meshes: rocket, grid, text label
//! - [`tracking`] - Head pose source trait and a simulated tracker
//!
//! # Example
//!
//! ```ignore
//! use rocket_vr_engine::camera::{Eye, HeadMotion, StereoCamera};
//! use rocket_vr_engine::tracking::{HeadPoseSource, SimulatedHeadTracker};
//!
//! let mut tracker = SimulatedHeadTracker::new();
//! let mut motion = HeadMotion::default();
//! let mut camera = StereoCamera::default();
//!
//! // Once per frame, before rendering either eye:
//! if let Some(quat) = tracker.poll() {
//!     motion.apply_quaternion(quat);
//! }
//! camera.position = motion.position;
//! let left = camera.eye_view_proj(Eye::Left, aspect);
//! let right = camera.eye_view_proj(Eye::Right, aspect);
//! ```

pub mod camera;
pub mod input;
pub mod render;
pub mod scene;
pub mod tracking;

// Re-export the types most callers wire together
pub use camera::{Eye, HeadMotion, HeadMotionConfig, StereoCamera};
pub use input::{DragTracker, KeyCode, KeyResponse, ManualRotation};
pub use render::{GpuContext, GpuContextConfig, StereoConfig, StereoRenderPass};
pub use tracking::{HeadPoseSource, SimulatedHeadTracker};
