//! Isometric Hexagon Grid Demo
//!
//! Run with: `cargo run --bin iso-grid`
//!
//! A honeycomb of hexagonal prisms drawn with a painter's algorithm, no
//! depth buffer. Rotate and tilt the view, grow and shrink the grid.
//!
//! Controls:
//! - A/D or Left/Right: Rotate the grid
//! - W/S or Up/Down: Tilt toward top-down / flatten
//! - +/-: Grow / shrink the grid by one ring
//! - ESC: Exit

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use isohex_engine::render::{PrimitiveBatch, RenderConfig, RenderState};
use isohex_engine::scene::build_frame;
use isohex_engine::state::ViewState;
use isohex_engine::theme::SceneTheme;
use isohex_engine::timing::{FpsCounter, FramePacer, TARGET_FPS};
use isohex_engine::InputConfig;

const WINDOW_TITLE: &str = "Iso Hexagon Grid";

struct AppState {
    window: Arc<Window>,
    render_state: RenderState,
    view: ViewState,
    theme: SceneTheme,
    input: InputConfig,
    batch: PrimitiveBatch,
    pacer: FramePacer,
    fps: FpsCounter,
}

impl AppState {
    fn new(window: Arc<Window>) -> Self {
        let config = RenderConfig::default();
        let render_state = RenderState::new(window.clone(), &config);

        Self {
            window,
            render_state,
            view: ViewState::new(),
            theme: SceneTheme::default(),
            input: InputConfig::default(),
            batch: PrimitiveBatch::new(),
            pacer: FramePacer::new(TARGET_FPS),
            fps: FpsCounter::new(),
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.render_state.resize(new_size.width, new_size.height);
    }

    /// Apply one key event as a bounded state delta. A rejected delta
    /// leaves the state untouched, so it is logged and dropped.
    fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = self.input.classify_key(key) else {
            return;
        };

        let result = if let Some(delta) = action.rotation_delta() {
            self.view.add_rotation(delta)
        } else if let Some(delta) = action.tilt_delta() {
            self.view.add_tilt(delta)
        } else if let Some(delta) = action.ring_delta() {
            self.view.add_rings(delta)
        } else {
            Ok(())
        };

        if let Err(e) = result {
            tracing::warn!("rejected state delta: {e}");
        }
    }

    /// Build the frame from the current state, draw and present it.
    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let primitives = build_frame(
            &self.view,
            self.render_state.config.width,
            self.render_state.config.height,
            &self.theme,
        );
        self.batch.clear();
        self.batch.extend(&primitives);

        self.render_state.render(&self.batch, self.theme.background)
    }

    fn update_title(&mut self) {
        if let Some(fps) = self.fps.tick() {
            self.window.set_title(&format!(
                "{} | FPS: {:.0} | Rings: {} | Tilt: {:.2}",
                WINDOW_TITLE,
                fps,
                self.view.ring_count(),
                self.view.tilt()
            ));
        }
    }
}

struct App {
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = RenderConfig::default();
        let window_attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.state = Some(AppState::new(window));

        tracing::info!("Ready. Controls:");
        tracing::info!("  A/D or Left/Right - Rotate");
        tracing::info!("  W/S or Up/Down - Tilt");
        tracing::info!("  +/- - Grow/shrink the grid");
        tracing::info!("  ESC - Exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if key_state != ElementState::Pressed {
                    return;
                }

                if key == state.input.exit {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key);
            }
            WindowEvent::RedrawRequested => {
                state.pacer.begin_frame();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("surface out of memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => tracing::warn!("render error: {e:?}"),
                }

                state.update_title();
                state.pacer.pace();
                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("{WINDOW_TITLE}");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { state: None };
    event_loop.run_app(&mut app).unwrap();
}
