//! Camera Module
//!
//! Two halves of the virtual camera: [`head_motion`] turns per-frame head
//! orientation readings into bounded camera translation, and [`stereo`]
//! turns the resulting camera position into per-eye view and projection
//! matrices for side-by-side rendering.

pub mod head_motion;
pub mod stereo;

pub use head_motion::{HeadMotion, HeadMotionConfig, CAMERA_START};
pub use stereo::{Eye, StereoCamera};
