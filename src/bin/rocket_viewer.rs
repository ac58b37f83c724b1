//! Rocket Viewer
//!
//! Desktop binary for the stereoscopic rocket scene: opens a window,
//! renders side-by-side left/right eye views, and drives the camera from
//! a (simulated) head tracker. Arrow/media keys and mouse drag rotate the
//! rocket; R/Enter re-zeros the tracker and camera; Escape quits.
//!
//! Usage: rocket-viewer [config.json]

use std::f32::consts::PI;
use std::sync::Arc;
use std::time::Instant;

use glam::{Mat4, Vec3};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use rocket_vr_engine::camera::{HeadMotion, HeadMotionConfig, StereoCamera};
use rocket_vr_engine::input::{DragTracker, KeyCode, KeyResponse, ManualRotation};
use rocket_vr_engine::render::{
    GpuContext, GpuContextConfig, Lighting, ModelBinding, StereoConfig, StereoRenderPass,
};
use rocket_vr_engine::scene::{grid_mesh, label_mesh, rocket_mesh, MeshBuffer};
use rocket_vr_engine::tracking::{HeadPoseSource, SimulatedHeadTracker};

/// Model scale applied to the rocket mesh (built in ~100x units).
const ROCKET_SCALE: f32 = 0.01;
/// Radial tessellation of the rocket body and nose.
const ROCKET_SEGMENTS: u32 = 24;

/// Viewer configuration, loaded from an optional JSON file.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct ViewerConfig {
    window_width: u32,
    window_height: u32,
    vsync: bool,
    /// Text drawn on the floating label.
    label_text: String,
    /// Convergence plane distance; eye separation is derived from it.
    convergence: f32,
    fov_y_degrees: f32,
    motion: HeadMotionConfig,
    sun_direction: Vec3,
    ambient: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let lighting = Lighting::default();
        Self {
            window_width: 1280,
            window_height: 720,
            vsync: true,
            label_text: "ROCKET".to_string(),
            convergence: 20.0,
            fov_y_degrees: 45.0,
            motion: HeadMotionConfig::default(),
            sun_direction: lighting.sun_dir,
            ambient: lighting.ambient,
        }
    }
}

impl ViewerConfig {
    fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    println!("[Config] Loaded {path}");
                    config
                }
                Err(e) => {
                    eprintln!("[Config] Failed to parse {path}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[Config] Failed to read {path}: {e}, using defaults");
                Self::default()
            }
        }
    }
}

/// Everything that exists only after the window does.
struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    stereo: StereoRenderPass,

    rocket: MeshBuffer,
    grid: MeshBuffer,
    label: MeshBuffer,
    rocket_binding: ModelBinding,
    grid_binding: ModelBinding,
    label_binding: ModelBinding,

    camera: StereoCamera,
    head_motion: HeadMotion,
    tracker: SimulatedHeadTracker,
    manual: ManualRotation,
    drag: DragTracker,
    lighting: Lighting,
    started: Instant,
}

impl AppState {
    fn new(window: Arc<Window>, config: &ViewerConfig) -> Self {
        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: config.vsync,
                ..Default::default()
            },
        );
        let stereo = StereoRenderPass::new(&gpu, StereoConfig::default());

        let rocket = rocket_mesh(ROCKET_SEGMENTS).upload(&gpu, "Rocket");
        let grid = grid_mesh().upload(&gpu, "Grid");
        let label = label_mesh(&config.label_text).upload(&gpu, "Label");

        let rocket_binding = stereo.create_model_binding(&gpu, "Rocket Model", Mat4::IDENTITY);
        let grid_binding = stereo.create_model_binding(&gpu, "Grid Model", Mat4::IDENTITY);
        // The label floats in front of the rocket; translation happens in
        // scaled space, so it sits 2 world units toward the camera.
        let label_binding = stereo.create_model_binding(
            &gpu,
            "Label Model",
            Mat4::from_scale(Vec3::splat(8.0)) * Mat4::from_translation(Vec3::new(0.0, 0.0, -0.25)),
        );

        Self {
            window,
            gpu,
            stereo,
            rocket,
            grid,
            label,
            rocket_binding,
            grid_binding,
            label_binding,
            camera: StereoCamera::with_convergence(
                config.convergence,
                config.fov_y_degrees.to_radians(),
            ),
            head_motion: HeadMotion::new(config.motion),
            tracker: SimulatedHeadTracker::new(),
            manual: ManualRotation::new(),
            drag: DragTracker::new(),
            lighting: Lighting {
                sun_dir: config.sun_direction,
                ambient: config.ambient,
            },
            started: Instant::now(),
        }
    }

    /// Per-frame state update: head pose into camera position, manual
    /// rotation into the rocket's model matrix.
    fn update(&mut self) {
        if let Some(quat) = self.tracker.poll() {
            self.head_motion.apply_quaternion(quat);
        }
        self.camera.position = self.head_motion.position;

        let model = Mat4::from_scale(Vec3::splat(ROCKET_SCALE))
            * Mat4::from_rotation_x(self.manual.rot_x)
            * Mat4::from_rotation_y(self.manual.rot_y)
            * Mat4::from_rotation_z(PI);
        self.stereo
            .write_model(&self.gpu.queue, &self.rocket_binding, model);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.gpu.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = self.gpu.dimensions();
        let eye_aspect = (width as f32 / 2.0) / height.max(1) as f32;
        self.stereo.update_eyes(
            &self.gpu.queue,
            &self.camera,
            eye_aspect,
            self.started.elapsed().as_secs_f32(),
            &self.lighting,
        );

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.stereo.render(
            &mut encoder,
            &view,
            &self.gpu.depth_view,
            (width, height),
            |pass, _eye| {
                pass.set_pipeline(self.stereo.mesh_pipeline());
                pass.set_bind_group(1, &self.rocket_binding.bind_group, &[]);
                self.rocket.draw(pass);
                pass.set_bind_group(1, &self.label_binding.bind_group, &[]);
                self.label.draw(pass);

                pass.set_pipeline(self.stereo.line_pipeline());
                pass.set_bind_group(1, &self.grid_binding.bind_group, &[]);
                self.grid.draw(pass);
            },
        );

        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.manual.handle_key(key) == KeyResponse::Reset {
            println!("[Viewer] Reset: re-zeroing tracker and camera");
            self.tracker.reset();
            self.head_motion.reset();
        }
    }
}

struct App {
    config: ViewerConfig,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Rocket Viewer")
                        .with_inner_size(LogicalSize::new(
                            self.config.window_width,
                            self.config.window_height,
                        )),
                )
                .expect("Failed to create window"),
        );
        self.state = Some(AppState::new(window, &self.config));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                state.gpu.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        let key = map_key(code);
                        if key == KeyCode::Escape {
                            event_loop.exit();
                        } else {
                            state.handle_key(key);
                        }
                    }
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                state.drag.set_button(button_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let AppState { drag, manual, .. } = state;
                drag.motion(position.x as f32, position.y as f32, manual);
            }
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (w, h) = state.gpu.dimensions();
                        state.gpu.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        eprintln!("[Viewer] Out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => eprintln!("[Viewer] Surface error: {e:?}"),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

/// Map winit key codes onto viewer keys. Media keys cover headset remotes
/// that present as consumer-control devices.
fn map_key(code: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as Wk;
    match code {
        Wk::ArrowLeft => KeyCode::ArrowLeft,
        Wk::ArrowRight => KeyCode::ArrowRight,
        Wk::ArrowUp => KeyCode::ArrowUp,
        Wk::ArrowDown => KeyCode::ArrowDown,
        Wk::MediaTrackPrevious => KeyCode::MediaPrevious,
        Wk::MediaTrackNext => KeyCode::MediaNext,
        Wk::KeyR => KeyCode::KeyR,
        Wk::Enter => KeyCode::Enter,
        Wk::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

fn main() {
    println!("=== Rocket Viewer ===");
    println!("Arrows/media keys: rotate rocket | drag: free rotate");
    println!("R/Enter: reset tracker | Escape: quit");

    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(&path),
        None => ViewerConfig::default(),
    };

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: None,
    };
    event_loop.run_app(&mut app).expect("Event loop error");
}
