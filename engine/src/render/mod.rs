//! Render Module
//!
//! wgpu plumbing for the viewer: [`gpu_context`] owns device, queue,
//! surface, and depth buffer; [`uniforms`] defines the GPU-visible
//! structs; [`stereo_pass`] renders the scene twice per frame into the
//! left and right halves of the surface.

pub mod gpu_context;
pub mod stereo_pass;
pub mod uniforms;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use stereo_pass::{ModelBinding, StereoConfig, StereoRenderPass};
pub use uniforms::{EyeUniforms, Lighting, ModelUniforms};
