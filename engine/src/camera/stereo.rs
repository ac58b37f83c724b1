//! Stereo Camera
//!
//! Per-eye view and projection matrices for side-by-side stereo. Both eyes
//! share one camera position and a fixed view direction; each eye is offset
//! half the eye separation along the camera-right axis and uses an
//! asymmetric (off-axis) frustum so the two frusta converge at the
//! convergence plane. No toe-in: the view axes stay parallel, which avoids
//! the vertical parallax toe-in rendering produces.

use glam::{Mat4, Vec3, Vec4};

use crate::camera::head_motion::CAMERA_START;

/// Which eye is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// Offset direction along the camera-right axis: -1 left, +1 right.
    pub fn sign(self) -> f32 {
        match self {
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }
}

/// Camera pose and stereo parameters, supplied once per frame before
/// rendering either eye.
#[derive(Clone, Copy, Debug)]
pub struct StereoCamera {
    /// Camera position in world space (fed from the head motion mapper).
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
    /// Distance to the convergence plane (zero screen parallax).
    pub convergence: f32,
    /// Interocular distance in world units.
    pub eye_separation: f32,
}

impl StereoCamera {
    /// Fixed view direction: straight down -Z.
    pub const DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    /// Fixed up vector.
    pub const UP: Vec3 = Vec3::Y;

    /// Camera with a custom convergence plane; eye separation is derived
    /// as convergence / 60, a comfortable depth budget for lens viewers.
    pub fn with_convergence(convergence: f32, fov_y: f32) -> Self {
        Self {
            position: CAMERA_START,
            fov_y,
            near: 0.1,
            far: 1000.0,
            convergence,
            eye_separation: convergence / 60.0,
        }
    }

    /// Camera-right axis (derived from the fixed direction and up).
    pub fn right(&self) -> Vec3 {
        Self::DIRECTION.cross(Self::UP).normalize()
    }

    /// World-space position of one eye.
    pub fn eye_position(&self, eye: Eye) -> Vec3 {
        self.position + self.right() * (eye.sign() * self.eye_separation * 0.5)
    }

    /// View matrix for one eye. Parallel axes: both eyes look along the
    /// same direction from laterally shifted positions.
    pub fn eye_view(&self, eye: Eye) -> Mat4 {
        let pos = self.eye_position(eye);
        Mat4::look_at_rh(pos, pos + Self::DIRECTION, Self::UP)
    }

    /// Off-axis projection for one eye.
    ///
    /// `aspect` is the aspect ratio of the per-eye viewport (half the
    /// window width over its full height for side-by-side output).
    pub fn eye_projection(&self, eye: Eye, aspect: f32) -> Mat4 {
        let top = self.near * (self.fov_y * 0.5).tan();
        let bottom = -top;
        let half_width = top * aspect;

        // Shift the frustum window so both frusta coincide at the
        // convergence plane: the left eye's window moves right and vice
        // versa, by half the separation scaled from convergence distance
        // back to the near plane.
        let shift = -eye.sign() * 0.5 * self.eye_separation * self.near / self.convergence;

        frustum_rh(
            -half_width + shift,
            half_width + shift,
            bottom,
            top,
            self.near,
            self.far,
        )
    }

    /// Combined view-projection matrix for one eye.
    pub fn eye_view_proj(&self, eye: Eye, aspect: f32) -> Mat4 {
        self.eye_projection(eye, aspect) * self.eye_view(eye)
    }
}

impl Default for StereoCamera {
    fn default() -> Self {
        Self::with_convergence(20.0, 45.0_f32.to_radians())
    }
}

/// Right-handed off-center perspective frustum with a [0, 1] depth range
/// (wgpu convention, matching `Mat4::perspective_rh` in the symmetric
/// case).
fn frustum_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let two_n = 2.0 * near;
    Mat4::from_cols(
        Vec4::new(two_n / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, two_n / (top - bottom), 0.0, 0.0),
        Vec4::new(
            (right + left) / (right - left),
            (top + bottom) / (top - bottom),
            far / (near - far),
            -1.0,
        ),
        Vec4::new(0.0, 0.0, near * far / (near - far), 0.0),
    )
}
