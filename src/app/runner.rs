//! Window setup and main event loop

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::render::Renderer;
use crate::scene::SceneManager;
use crate::view::ViewManager;

use super::config::ViewerConfig;

/// The viewer application
pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Option<SceneManager>,
    view: ViewManager,
    /// Whether a locked cursor grab is active. A locked cursor stops
    /// reporting positions, so look switches to raw device deltas.
    raw_mouse_look: bool,
}

impl App {
    /// Create a new viewer with the given config
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            scene: None,
            view: ViewManager::new(),
            raw_mouse_look: false,
        }
    }

    /// Run the viewer until the window closes
    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        env_logger::init();
        log::info!("Starting viewer: {}", self.config.title);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        Ok(())
    }

    /// Grab the cursor for mouse look. Returns true if the grab is
    /// Locked: a locked cursor is pinned by the OS and stops delivering
    /// position events, so the caller must feed look from raw device
    /// deltas instead. The Confined fallback keeps positions flowing
    /// and uses position-based look.
    fn grab_cursor(window: &Window) -> bool {
        window.set_cursor_visible(false);

        if window.set_cursor_grab(CursorGrabMode::Locked).is_ok() {
            return true;
        }
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
            log::warn!("Cursor grab unavailable: {}", e);
        }
        false
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        self.raw_mouse_look = Self::grab_cursor(&window);

        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window), self.config.vsync));
        let scene = SceneManager::new(&renderer, &self.config.texture_dir);

        self.renderer = Some(renderer);
        self.scene = Some(scene);
        self.window = Some(window);

        log::info!("Viewer initialized");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(new_size.width, new_size.height);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key_code) = event.physical_key {
                    self.view.input_mut().process_keyboard(key_code, event.state);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                // Under a locked grab look runs on device deltas; both
                // streams together would double-apply every movement
                if !self.raw_mouse_look {
                    self.view
                        .handle_cursor(Vec2::new(position.x as f32, position.y as f32));
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.view.handle_scroll(y);
            }

            WindowEvent::RedrawRequested => {
                let Some(renderer) = &mut self.renderer else {
                    return;
                };

                let uniforms = self.view.tick(renderer.aspect_ratio());

                if self.view.close_requested() {
                    log::info!("Quit key pressed, shutting down");
                    event_loop.exit();
                    return;
                }

                renderer.update_view(&uniforms);

                if let Some(scene) = &self.scene {
                    if let Some(mut frame) = renderer.begin_frame() {
                        scene.render(renderer, &mut frame);
                        renderer.end_frame(frame);
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.raw_mouse_look {
                self.view
                    .handle_mouse_motion(Vec2::new(delta.0 as f32, delta.1 as f32));
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
