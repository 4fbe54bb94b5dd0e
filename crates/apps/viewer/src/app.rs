//! Frame driver
//!
//! Owns the window, the GL context, and the scene state, and runs the
//! strictly ordered frame: drain input, apply mutations, shade every
//! visible surface point, draw, present. Single-threaded throughout;
//! all mutation happens in the input phase and all reads in the
//! shading phase.

use glow::*;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use phong_math::Vec3;
use phong_scene::{expected_point_count, sample_sphere, shade_frame, ModeFlags, SceneState};

use crate::bindings::{apply_bindings, HELP};
use crate::cli::Args;
use crate::input::KeyboardState;
use crate::render::PointRenderer;

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u32 = 120;

/// Per-frame timing accumulator
struct FrameTimer {
    last: Instant,
    frame_time: f32,
    fps: f32,
}

impl FrameTimer {
    fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_time: 0.0,
            fps: 60.0,
        }
    }

    /// Record a new frame boundary and update the derived rates
    fn tick(&mut self, now: Instant) {
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frame_time = delta;
        self.fps = 1.0 / delta.max(0.001);
    }
}

pub struct ViewerApp {
    // Window and GL state
    window: Option<Window>,
    gl_context: Option<glutin::context::PossiblyCurrentContext>,
    gl_surface: Option<glutin::surface::Surface<WindowSurface>>,
    gl: Option<Arc<Context>>,

    // Rendering state
    renderer: Option<PointRenderer>,

    // Scene state
    scene: SceneState,
    surface_points: Vec<Vec3>,

    // Input state
    keys: KeyboardState,

    // Timing
    timer: FrameTimer,
    frame_count: u32,

    // Startup options
    args: Args,
}

impl Default for ViewerApp {
    fn default() -> Self {
        Self::new(Args::default())
    }
}

impl ViewerApp {
    pub fn new(args: Args) -> Self {
        let mut scene = SceneState::default();
        scene.flags = ModeFlags {
            clamp_enabled: !args.no_clamp,
            scale_enabled: args.scale,
        };

        if args.debug {
            info!("debug mode: exiting after a single frame");
        }
        if let Some(ref path) = args.capture_frame {
            info!("will capture first frame to {}", path);
        }

        Self {
            window: None,
            gl_context: None,
            gl_surface: None,
            gl: None,
            renderer: None,
            scene,
            surface_points: Vec::new(),
            keys: KeyboardState::new(),
            timer: FrameTimer::new(),
            frame_count: 0,
            args,
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut window_attributes = Window::default_attributes()
            .with_title(&self.args.title)
            .with_inner_size(winit::dpi::LogicalSize::new(self.args.width, self.args.height));
        if self.args.fullscreen {
            window_attributes = window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_transparency(false);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .unwrap()
            })
            .unwrap();

        let window = window.unwrap();

        let window_handle = window.window_handle().ok().map(|h| h.as_raw());

        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
            .build(window_handle);

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .unwrap()
        };

        let size = window.inner_size();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window_handle.unwrap(),
            NonZeroU32::new(size.width).unwrap(),
            NonZeroU32::new(size.height).unwrap(),
        );

        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .unwrap()
        };

        let gl_context = gl_context.make_current(&gl_surface).unwrap();

        let gl = Arc::new(unsafe {
            Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        });

        // Fixed GL state: ortho 2-D drawing with blending, no depth test.
        unsafe {
            gl.disable(DEPTH_TEST);
            gl.enable(BLEND);
            gl.blend_func(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
            gl.clear_color(0.0, 0.0, 0.0, 0.0);
        }

        let renderer = match unsafe { PointRenderer::new(&gl, self.args.point_size) } {
            Ok(r) => r,
            Err(e) => {
                error!("failed to initialize point renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        // The sample sequence is built once and never changes.
        self.surface_points = sample_sphere(self.args.radius, self.args.step);
        debug_assert_eq!(
            self.surface_points.len(),
            expected_point_count(self.args.step)
        );

        info!(
            "phong viewer initialized: {}x{}, radius {}, step {}°, {} surface points",
            self.args.width,
            self.args.height,
            self.args.radius,
            self.args.step,
            self.surface_points.len()
        );
        info!("{}", HELP);

        self.window = Some(window);
        self.gl_context = Some(gl_context);
        self.gl_surface = Some(gl_surface);
        self.gl = Some(gl);
        self.renderer = Some(renderer);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.cleanup();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let (Some(gl_surface), Some(gl_context)) =
                    (self.gl_surface.as_ref(), self.gl_context.as_ref())
                {
                    if let (Some(w), Some(h)) =
                        (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                    {
                        gl_surface.resize(gl_context, w, h);
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape && pressed {
                        self.cleanup();
                        event_loop.exit();
                        return;
                    }
                    if pressed {
                        self.keys.press(code);
                    } else {
                        self.keys.release(code);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}

impl ViewerApp {
    /// Run one frame: mutate, shade, draw, present
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        self.frame_count += 1;

        self.timer.tick(Instant::now());
        if self.frame_count % FPS_LOG_INTERVAL == 0 {
            info!(
                "fps: {:.1} ({:.2} ms/frame)",
                self.timer.fps,
                self.timer.frame_time * 1000.0
            );
        }

        // Mutation phase: all scene writes happen here.
        apply_bindings(&self.keys, &mut self.scene);
        self.keys.begin_frame();

        // Shading phase: pure reads of the scene state.
        let shaded = shade_frame(&self.surface_points, &self.scene);

        let window = self.window.as_ref().unwrap();
        let gl = self.gl.as_ref().unwrap();
        let renderer = self.renderer.as_mut().unwrap();
        let gl_context = self.gl_context.as_ref().unwrap();
        let gl_surface = self.gl_surface.as_ref().unwrap();

        let size = window.inner_size();

        unsafe {
            gl.viewport(0, 0, size.width as i32, size.height as i32);
            gl.clear(COLOR_BUFFER_BIT);
            renderer.draw(gl, &shaded, size.width as i32, size.height as i32);
        }

        // Capture before the swap so the rendered content is read back.
        if let Some(path) = self.args.capture_frame.clone() {
            match self.save_framebuffer_to_file(gl, size.width, size.height, &path) {
                Ok(()) => info!("frame saved to {}", path),
                Err(e) => error!("failed to save frame: {}", e),
            }
        }

        gl_surface.swap_buffers(gl_context).unwrap();

        if self.args.debug || self.args.capture_frame.is_some() {
            info!("frame {} rendered, exiting", self.frame_count);
            self.cleanup();
            event_loop.exit();
            return;
        }

        window.request_redraw();
    }

    /// Save the current framebuffer to an image file
    fn save_framebuffer_to_file(
        &self,
        gl: &Context,
        width: u32,
        height: u32,
        path: &str,
    ) -> Result<(), String> {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        unsafe {
            gl.read_pixels(
                0,
                0,
                width as i32,
                height as i32,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(Some(&mut pixels)),
            );
        }

        let rgb_pixels: Vec<u8> = pixels
            .chunks(4)
            .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
            .collect();

        // Flip Y-axis (GL origin is bottom-left, image origin is top-left).
        let mut flipped = vec![0u8; rgb_pixels.len()];
        for y in 0..height {
            let src_row = &rgb_pixels[(y * width * 3) as usize..((y + 1) * width * 3) as usize];
            let dst_y = height - 1 - y;
            let dst_row =
                &mut flipped[(dst_y * width * 3) as usize..((dst_y + 1) * width * 3) as usize];
            dst_row.copy_from_slice(src_row);
        }

        image::save_buffer(path, &flipped, width, height, image::ColorType::Rgb8)
            .map_err(|e| e.to_string())
    }

    fn cleanup(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            if let Some(gl) = &self.gl {
                unsafe {
                    renderer.destroy(gl);
                }
            }
        }

        // Surface must be released before the context.
        self.gl = None;
        self.gl_surface = None;
        self.gl_context = None;
        self.window = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_frame_timer_tracks_rates() {
        let mut timer = FrameTimer::new();
        let start = timer.last;
        timer.tick(start + Duration::from_millis(20));
        assert!((timer.frame_time - 0.02).abs() < 1e-3);
        assert!((timer.fps - 50.0).abs() < 1.0);

        timer.tick(timer.last + Duration::from_millis(10));
        assert!((timer.fps - 100.0).abs() < 1.0);
    }
}
