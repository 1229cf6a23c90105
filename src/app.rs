use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{
    CANVAS_HEIGHT, CANVAS_WIDTH, GRAVITY_STEP, QUANTUM_STEP, RADIUS_STEP, TIME_STEP_STEP,
};
use crate::error::GpuError;
use crate::gpu::{GpuContext, UiRenderer};
use crate::render::{fit_rect, PainterCanvas};
use crate::session::Session;
use crate::simulation::VisualMode;

/// GPU resources created once the window exists
struct Presenter {
    gpu: GpuContext,
    ui: UiRenderer,
}

impl Presenter {
    fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        log::info!("Creating field renderer...");
        let ui = UiRenderer::new(&gpu.device, gpu.format(), &window);

        Ok(Self { gpu, ui })
    }
}

/// Application state: the external UI around the simulation session
pub struct App {
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    session: Session,
    fps_counter: FpsCounter,
    last_fps: f64,
    last_title: String,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            log::info!("Seeded session: {}", seed);
        }
        Self {
            window: None,
            presenter: None,
            session: Session::new(seed),
            fps_counter: FpsCounter::new(),
            last_fps: 0.0,
            last_title: String::new(),
        }
    }

    fn render(&mut self) {
        let (Some(window), Some(presenter)) = (self.window.clone(), self.presenter.as_mut()) else {
            return;
        };

        // Get surface texture
        let output = match presenter.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface
                let gpu = &presenter.gpu;
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        presenter.ui.begin_frame(&window);
        let painter = presenter.ui.ctx.layer_painter(egui::LayerId::background());
        let canvas_size = egui::vec2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        let target = fit_rect(canvas_size, presenter.ui.ctx.screen_rect());
        let mut canvas = PainterCanvas::new(&painter, canvas_size, target);

        let now = Instant::now();
        let drawn = if self.session.is_running() {
            self.session.frame(&mut canvas, now).map(|_| ())
        } else {
            // Paused: show the same snapshot, let pending clears fire
            self.session.poll_deferred(now);
            self.session.redraw(&mut canvas).map(|_| ())
        };
        if let Err(e) = drawn {
            log::debug!("Frame skipped: {}", e);
        }

        let full_output = presenter.ui.end_frame(&window);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = presenter
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        let size_in_pixels = [presenter.gpu.config.width, presenter.gpu.config.height];
        presenter.ui.render(
            &presenter.gpu.device,
            &presenter.gpu.queue,
            &mut encoder,
            &view,
            size_in_pixels,
            full_output,
        );

        presenter.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(fps) = self.fps_counter.tick() {
            self.last_fps = fps;
        }
        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let params = self.session.params();
        let mut title = format!(
            "Quantum Culture - {} mode - {} - {:.0} FPS",
            params.visual_mode,
            self.session.status(),
            self.last_fps
        );
        if !self.session.is_running() {
            title.push_str(" [paused]");
        }
        if let Some(message) = self.session.message() {
            title.push_str(" - ");
            title.push_str(message);
        }

        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let params = self.session.params_mut();
        match key_code {
            // Visual modes
            KeyCode::Digit1 => params.visual_mode = VisualMode::Physical,
            KeyCode::Digit2 => params.visual_mode = VisualMode::Cultural,
            KeyCode::Digit3 => params.visual_mode = VisualMode::Quantum,

            // Quantum effects (Q/A)
            KeyCode::KeyQ => params.adjust_quantum_effects(QUANTUM_STEP),
            KeyCode::KeyA => params.adjust_quantum_effects(-QUANTUM_STEP),

            // Cultural quantum state (W/S)
            KeyCode::KeyW => params.adjust_cultural_quantum_state(QUANTUM_STEP),
            KeyCode::KeyS => params.adjust_cultural_quantum_state(-QUANTUM_STEP),

            // Gravity (E/D)
            KeyCode::KeyE => params.adjust_gravity(GRAVITY_STEP),
            KeyCode::KeyD => params.adjust_gravity(-GRAVITY_STEP),

            // Interaction radius (R/F)
            KeyCode::KeyR => params.adjust_interaction_radius(RADIUS_STEP),
            KeyCode::KeyF => params.adjust_interaction_radius(-RADIUS_STEP),

            // Cultural radius (T/G)
            KeyCode::KeyT => params.adjust_cultural_radius(RADIUS_STEP),
            KeyCode::KeyG => params.adjust_cultural_radius(-RADIUS_STEP),

            // Time step (Y/H)
            KeyCode::KeyY => params.adjust_time_step(TIME_STEP_STEP),
            KeyCode::KeyH => params.adjust_time_step(-TIME_STEP_STEP),

            KeyCode::KeyP => {
                params.toggle_physics();
                log::info!("Physics: {}", if params.enable_physics { "ON" } else { "OFF" });
            }

            KeyCode::Space => {
                if self.session.is_running() {
                    self.session.pause();
                } else {
                    self.session.resume();
                }
                self.refresh_title();
                return;
            }

            KeyCode::Backspace => {
                self.session.reset();
                self.refresh_title();
                return;
            }

            _ => return,
        }

        log::info!("Parameters: {:?}", self.session.params());
        self.refresh_title();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing Quantum Culture visualizer...");
        log::info!("Canvas size: {}x{}", CANVAS_WIDTH, CANVAS_HEIGHT);

        // Create window
        let window_attrs = Window::default_attributes()
            .with_title("Quantum Culture - Initializing...")
            .with_inner_size(winit::dpi::LogicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let presenter = match Presenter::new(window.clone()) {
            Ok(presenter) => presenter,
            Err(e) => {
                log::error!("GPU initialization failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  1/2/3: Physical / cultural / quantum mode");
        log::info!("  Q/A: Quantum effects +/-");
        log::info!("  W/S: Cultural quantum state +/-");
        log::info!("  E/D: Gravity +/-");
        log::info!("  R/F: Interaction radius +/-");
        log::info!("  T/G: Cultural radius +/-");
        log::info!("  Y/H: Time step +/-");
        log::info!("  P: Toggle physics");
        log::info!("  Space: Pause/resume");
        log::info!("  Backspace: Reset");
        log::info!("  Escape: Quit");

        window.request_redraw();
        self.window = Some(window);
        self.presenter = Some(presenter);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(presenter)) = (&self.window, &mut self.presenter) {
            presenter.ui.handle_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                self.session.pause();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            self.session.pause();
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                            // Paused sessions redraw without stepping
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                        }
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(presenter) = &mut self.presenter {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    presenter.gpu.resize(new_size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
                // Keep the loop going only while the session runs
                if self.session.is_running() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            _ => {}
        }
    }

    /// Wake for the next deferred clear even when no frames are requested
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.session.poll_deferred(Instant::now());
        self.refresh_title();

        match self.session.next_clear_due() {
            Some(due) => event_loop.set_control_flow(ControlFlow::WaitUntil(due)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
