use std::time::Duration;
use crate::core::surface::RenderSurface;
use crate::scene::Scene;

/// Render loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Per-frame driver over an output surface
///
/// The loop does not schedule itself; the host calls [`RenderLoop::frame`]
/// on each display refresh and asks for another refresh while it returns
/// true.
pub struct RenderLoop<S: RenderSurface> {
    surface: S,
    state: LoopState,
    frames: u64,
}

impl<S: RenderSurface> RenderLoop<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Stopped {
            log::debug!("Render loop started");
        }
        self.state = LoopState::Running;
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("Render loop stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames drawn since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Run one frame at timestamp `now`; returns whether to reschedule
    pub fn frame(&mut self, scene: &mut Scene, now: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.admit_textures(scene);
        self.resize_to_display(scene);
        scene.advance_pulse(now);

        if let Err(e) = self.surface.draw(&scene.camera, scene.visible_panels()) {
            log::error!("Render error: {:#}", e);
        }
        self.frames += 1;

        self.is_running()
    }

    /// Hand textures to the surface once the whole set has loaded
    pub fn admit_textures(&mut self, scene: &mut Scene) {
        let Some(images) = scene.take_ready_images() else {
            return;
        };

        match self.surface.install_panels(scene.panels.panels(), images) {
            Ok(()) => {
                log::info!("All {} panel textures loaded", scene.panels.len());
                scene.show_panels();
            }
            Err(e) => log::error!("Failed to install panel textures: {:#}", e),
        }
    }

    /// Match the drawing buffer, projection and resolution uniforms to the
    /// measured display size
    ///
    /// Returns true when the buffer was resized. Degenerate measurements
    /// skip the frame's resize work entirely.
    pub fn resize_to_display(&mut self, scene: &mut Scene) -> bool {
        let display = self.surface.display_size();
        if display.is_degenerate() {
            return false;
        }

        scene.camera.fit_viewport_height(display.height as f32);

        let target = display.buffer_size();
        let needs_resize = target != self.surface.buffer_size();
        if needs_resize {
            log::debug!("Resizing drawing buffer to {}x{}", target.0, target.1);
            self.surface.resize_buffer(target.0, target.1);
            scene.camera.set_aspect(display.aspect());
            scene.panels.set_resolution(display.viewport());
        }

        scene.camera.update_projection_matrix();
        needs_resize
    }
}
