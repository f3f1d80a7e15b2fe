use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::carousel::CarouselBinding;
use crate::config::BackgroundConfig;
use crate::controller::BackgroundController;
use crate::frame::FrameIterator;
use crate::renderer::PanelRenderer;

/// Window shell: owns the background controller and the carousel binding
pub struct App {
    window: Option<Arc<Window>>,
    controller: BackgroundController<PanelRenderer>,
    binding: CarouselBinding,
    clock: FrameIterator,
    initial_size: LogicalSize<u32>,
}

impl App {
    pub fn new(config: BackgroundConfig, width: u32, height: u32) -> Self {
        let binding = CarouselBinding::new(config.slide_count, config.narrow_breakpoint);
        Self {
            window: None,
            controller: BackgroundController::new(config),
            binding,
            clock: FrameIterator::new(),
            initial_size: LogicalSize::new(width, height),
        }
    }

    fn start_background(&mut self, window: Arc<Window>) {
        let renderer =
            match pollster::block_on(PanelRenderer::new(window.clone(), self.controller.config())) {
                Ok(renderer) => Some(renderer),
                Err(e) => {
                    log::warn!("Failed to initialize renderer: {:#}", e);
                    None
                }
            };
        self.controller.start(renderer);

        let logical = window.inner_size().to_logical::<f64>(window.scale_factor());
        self.binding
            .on_resize(logical.width, logical.height, &mut self.controller);
        window.request_redraw();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.controller.stop();
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Story Background")
                .with_inner_size(self.initial_size),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window.clone());
        self.start_background(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match code {
                KeyCode::ArrowRight => self.binding.next(&mut self.controller),
                KeyCode::ArrowLeft => self.binding.prev(&mut self.controller),
                _ => {}
            },
            WindowEvent::Resized(size) => {
                if let Some(window) = &self.window {
                    let logical = size.to_logical::<f64>(window.scale_factor());
                    self.binding
                        .on_resize(logical.width, logical.height, &mut self.controller);
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(frame) = self.clock.next() else {
                    return;
                };
                if self.controller.on_frame(frame.time) {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            _ => {}
        }
    }
}
