//! GPU Uniform Structs
//!
//! Byte-for-byte layouts of the uniform buffers in `shaders/scene.wgsl`.
//! Sizes are pinned with compile-time assertions; a drifted field will
//! fail the build, not corrupt a frame.

use glam::{Mat4, Vec3};

/// Per-eye uniforms: one buffer for each eye, updated once per frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EyeUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub sun_dir: [f32; 3],
    pub ambient: f32,
}

static_assertions::assert_eq_size!(EyeUniforms, [u8; 96]);

impl Default for EyeUniforms {
    fn default() -> Self {
        let lighting = Lighting::default();
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 10.0],
            time: 0.0,
            sun_dir: lighting.sun_dir.into(),
            ambient: lighting.ambient,
        }
    }
}

impl EyeUniforms {
    pub fn new(view_proj: Mat4, camera_pos: Vec3, time: f32, lighting: &Lighting) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: camera_pos.into(),
            time,
            sun_dir: lighting.sun_dir.normalize_or_zero().into(),
            ambient: lighting.ambient,
        }
    }
}

/// Per-object uniforms: the model matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniforms {
    pub model: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(ModelUniforms, [u8; 64]);

impl Default for ModelUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl ModelUniforms {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Directional light shared by both eyes.
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    /// Sun direction (world space, toward the light).
    pub sun_dir: Vec3,
    /// Ambient intensity floor (0.0 = pitch black faces).
    pub ambient: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            sun_dir: Vec3::new(0.4, 0.8, 0.3),
            ambient: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_uniforms_are_pod() {
        let uniforms = EyeUniforms::default();
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), std::mem::size_of::<EyeUniforms>());
    }

    #[test]
    fn model_uniforms_round_trip_matrix() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let uniforms = ModelUniforms::new(m);
        assert_eq!(Mat4::from_cols_array_2d(&uniforms.model), m);
    }

    #[test]
    fn eye_uniforms_normalize_sun_direction() {
        let lighting = Lighting {
            sun_dir: Vec3::new(0.0, 10.0, 0.0),
            ambient: 0.2,
        };
        let uniforms = EyeUniforms::new(Mat4::IDENTITY, Vec3::ZERO, 0.0, &lighting);
        assert!((uniforms.sun_dir[1] - 1.0).abs() < 1e-6);
    }
}
