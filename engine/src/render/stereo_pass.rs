//! Stereo Render Pass
//!
//! Renders the scene twice per frame: once into the left half of the
//! surface, once into the right, with per-eye view-projection uniforms.
//! The caller supplies the camera pose once per frame (`update_eyes`) and
//! a per-eye draw callback that only issues draw commands against the
//! pass; everything else about composition lives here.
//!
//! Distortion and chromatic-aberration correction are configuration flags
//! that ship disabled: bare side-by-side halves look better through the
//! cheap lenses this targets than a mismatched distortion profile does.

use glam::Mat4;

use crate::camera::{Eye, StereoCamera};
use crate::render::gpu_context::GpuContext;
use crate::render::uniforms::{EyeUniforms, Lighting, ModelUniforms};
use crate::scene::mesh::MeshVertex;

/// Stereo composition options.
#[derive(Clone, Copy, Debug)]
pub struct StereoConfig {
    /// Lens distortion correction (unimplemented profile, keep off).
    pub distortion_correction: bool,
    /// Chromatic aberration correction (keep off, see above).
    pub chromatic_correction: bool,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            distortion_correction: false,
            chromatic_correction: false,
        }
    }
}

/// A per-object uniform buffer and its bind group (group 1).
pub struct ModelBinding {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

/// The side-by-side stereo pass: pipelines, eye uniforms, and the render
/// loop over both viewports.
pub struct StereoRenderPass {
    config: StereoConfig,
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    model_layout: wgpu::BindGroupLayout,
    left_buffer: wgpu::Buffer,
    right_buffer: wgpu::Buffer,
    left_bind_group: wgpu::BindGroup,
    right_bind_group: wgpu::BindGroup,
}

impl StereoRenderPass {
    pub fn new(gpu: &GpuContext, config: StereoConfig) -> Self {
        println!(
            "[Stereo] distortion correction: {}, chromatic correction: {}",
            on_off(config.distortion_correction),
            on_off(config.chromatic_correction)
        );

        let shader_source = include_str!("../../../shaders/scene.wgsl");
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Scene Shader"),
                source: wgpu::ShaderSource::Wgsl(shader_source.into()),
            });

        let eye_layout = uniform_layout(&gpu.device, "Eye Bind Group Layout");
        let model_layout = uniform_layout(&gpu.device, "Model Bind Group Layout");

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&eye_layout, &model_layout],
                push_constant_ranges: &[],
            });

        let mesh_pipeline = create_scene_pipeline(
            gpu,
            &pipeline_layout,
            &shader,
            "Mesh Pipeline",
            "vs_main",
            "fs_main",
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = create_scene_pipeline(
            gpu,
            &pipeline_layout,
            &shader,
            "Grid Pipeline",
            "vs_line",
            "fs_line",
            wgpu::PrimitiveTopology::LineList,
        );

        let left_buffer = gpu.create_uniform_buffer("Left Eye Uniforms", &EyeUniforms::default());
        let right_buffer = gpu.create_uniform_buffer("Right Eye Uniforms", &EyeUniforms::default());
        let left_bind_group = uniform_bind_group(&gpu.device, &eye_layout, &left_buffer, "Left Eye");
        let right_bind_group =
            uniform_bind_group(&gpu.device, &eye_layout, &right_buffer, "Right Eye");

        Self {
            config,
            mesh_pipeline,
            line_pipeline,
            model_layout,
            left_buffer,
            right_buffer,
            left_bind_group,
            right_bind_group,
        }
    }

    pub fn config(&self) -> StereoConfig {
        self.config
    }

    /// Pipeline for triangle meshes (rocket, label).
    pub fn mesh_pipeline(&self) -> &wgpu::RenderPipeline {
        &self.mesh_pipeline
    }

    /// Pipeline for the line grid.
    pub fn line_pipeline(&self) -> &wgpu::RenderPipeline {
        &self.line_pipeline
    }

    /// Create a model uniform buffer + bind group for one scene object.
    pub fn create_model_binding(&self, gpu: &GpuContext, label: &str, model: Mat4) -> ModelBinding {
        let buffer = gpu.create_uniform_buffer(label, &ModelUniforms::new(model));
        let bind_group = uniform_bind_group(&gpu.device, &self.model_layout, &buffer, label);
        ModelBinding { buffer, bind_group }
    }

    /// Update a model binding's matrix (for the manually rotated rocket).
    pub fn write_model(&self, queue: &wgpu::Queue, binding: &ModelBinding, model: Mat4) {
        queue.write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&ModelUniforms::new(model)));
    }

    /// Upload both eyes' uniforms from the current camera pose. Call once
    /// per frame, before [`Self::render`].
    pub fn update_eyes(
        &self,
        queue: &wgpu::Queue,
        camera: &StereoCamera,
        eye_aspect: f32,
        time: f32,
        lighting: &Lighting,
    ) {
        for (eye, buffer) in [(Eye::Left, &self.left_buffer), (Eye::Right, &self.right_buffer)] {
            let uniforms = EyeUniforms::new(
                camera.eye_view_proj(eye, eye_aspect),
                camera.eye_position(eye),
                time,
                lighting,
            );
            queue.write_buffer(buffer, 0, bytemuck::bytes_of(&uniforms));
        }
    }

    /// Render both eyes.
    ///
    /// Clears the whole surface once, then for each eye sets the viewport
    /// to its half and the eye bind group (group 0), and hands the pass to
    /// `draw_eye`. The callback must only bind pipelines/meshes (group 1
    /// upward) and issue draws; it is invoked identically for both eyes.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        surface_size: (u32, u32),
        mut draw_eye: impl FnMut(&mut wgpu::RenderPass<'_>, Eye),
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Stereo Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let width = surface_size.0 as f32;
        let height = (surface_size.1 as f32).max(1.0);
        let half = (width / 2.0).max(1.0);

        for eye in [Eye::Left, Eye::Right] {
            let x = match eye {
                Eye::Left => 0.0,
                Eye::Right => half,
            };
            pass.set_viewport(x, 0.0, half, height, 0.0, 1.0);
            pass.set_bind_group(0, self.eye_bind_group(eye), &[]);
            draw_eye(&mut pass, eye);
        }
    }

    fn eye_bind_group(&self, eye: Eye) -> &wgpu::BindGroup {
        match eye {
            Eye::Left => &self.left_bind_group,
            Eye::Right => &self.right_bind_group,
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn uniform_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

fn create_scene_pipeline(
    gpu: &GpuContext,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    vertex_entry: &str,
    fragment_entry: &str,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    gpu.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vertex_entry),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        // position
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        // normal
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 12,
                            shader_location: 1,
                        },
                        // color
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 24,
                            shader_location: 2,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fragment_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Fins and the label are visible from both sides
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
