use std::time::Duration;
use crate::config::BackgroundConfig;
use crate::core::surface::RenderSurface;
use crate::loader::TextureLoader;
use crate::pulse::PulseAnimation;
use crate::render_loop::RenderLoop;
use crate::scene::Scene;

/// Carousel layout, chosen from the viewport shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// One slide per view; two consecutive slides share a panel
    Narrow,
    /// Two slides per view, advancing in groups of two
    Wide,
}

impl LayoutMode {
    /// Portrait viewports and widths under `breakpoint` get the narrow layout
    pub fn for_viewport(width: f64, height: f64, breakpoint: f64) -> Self {
        if width / height < 1.0 || width < breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub fn slides_per_group(self) -> usize {
        match self {
            LayoutMode::Narrow => 1,
            LayoutMode::Wide => 2,
        }
    }

    /// Background panel for a carousel index
    ///
    /// Wide mode only remaps on group boundaries (even indices); odd
    /// indices and indices past the last panel map to nothing.
    pub fn panel_for_slide(self, index: usize, panel_count: usize) -> Option<usize> {
        let panel = match self {
            LayoutMode::Narrow => index / 2,
            LayoutMode::Wide if index % 2 == 0 => index / 2,
            LayoutMode::Wide => return None,
        };
        (panel < panel_count).then_some(panel)
    }
}

/// Owns the background scene and its render loop
///
/// External code (the carousel binding) pans the camera and arms the
/// pulse between frames; the host drives frames through
/// [`BackgroundController::on_frame`].
pub struct BackgroundController<S: RenderSurface> {
    config: BackgroundConfig,
    scene: Option<Scene>,
    render_loop: Option<RenderLoop<S>>,
    loader: Option<TextureLoader>,
    active_panel: Option<usize>,
}

impl<S: RenderSurface> BackgroundController<S> {
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            config,
            scene: None,
            render_loop: None,
            loader: None,
            active_panel: None,
        }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// Build the scene, start decoding textures and start the loop
    ///
    /// Without a surface the background is skipped entirely and every
    /// other call becomes a no-op.
    pub fn start(&mut self, surface: Option<S>) {
        let sources: Vec<_> = self
            .config
            .scenes
            .iter()
            .enumerate()
            .map(|(index, scene)| (index, self.config.resolve_source(&scene.src)))
            .collect();
        self.start_with_loader(surface, || TextureLoader::spawn(sources));
    }

    /// Like [`start`](Self::start) with a caller-supplied texture loader
    pub fn start_with_loader(
        &mut self,
        surface: Option<S>,
        loader: impl FnOnce() -> TextureLoader,
    ) {
        let Some(surface) = surface else {
            log::warn!("No output surface, skipping background");
            return;
        };
        if self.render_loop.is_some() {
            log::warn!("Background already started");
            return;
        }

        let display = surface.display_size();
        let viewport = if display.is_degenerate() {
            [1.0, 1.0]
        } else {
            display.viewport()
        };

        let scene = Scene::build(&self.config, viewport);
        log::info!(
            "Background scene built: {} panels, pulse target {:?}",
            scene.panels.len(),
            scene.panels.pulse_target()
        );
        self.active_panel = scene.panels.active_panel(scene.camera.x());
        self.scene = Some(scene);
        self.loader = Some(loader());

        let mut render_loop = RenderLoop::new(surface);
        render_loop.start();
        self.render_loop = Some(render_loop);
    }

    /// Stop scheduling frames; pending texture loads are dropped
    pub fn stop(&mut self) {
        if let Some(render_loop) = self.render_loop.as_mut() {
            render_loop.stop();
        }
        self.loader = None;
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.as_ref().is_some_and(RenderLoop::is_running)
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn render_loop(&self) -> Option<&RenderLoop<S>> {
        self.render_loop.as_ref()
    }

    pub fn render_loop_mut(&mut self) -> Option<&mut RenderLoop<S>> {
        self.render_loop.as_mut()
    }

    /// Camera horizontal position, 0 before start
    pub fn camera_x(&self) -> f32 {
        self.scene.as_ref().map_or(0.0, |scene| scene.camera.x())
    }

    pub fn set_camera_x(&mut self, x: f32) {
        if let Some(scene) = self.scene.as_mut() {
            scene.camera.set_x(x);
        }
    }

    pub fn pulse(&self) -> Option<&PulseAnimation> {
        self.scene.as_ref().map(|scene| &scene.pulse)
    }

    /// Arm a pulse cycle; false when capped or not started
    pub fn request_pulse(&mut self) -> bool {
        self.scene.as_mut().is_some_and(|scene| scene.pulse.request())
    }

    pub fn reset_pulse_repeats(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.pulse.reset_repeats();
        }
    }

    /// Panel the carousel last moved to
    pub fn active_panel(&self) -> Option<usize> {
        self.active_panel
    }

    /// Slide-change handler: pan to the slide's panel and arm the pulse
    /// when entering the pulse panel from elsewhere
    pub fn show_slide(&mut self, mode: LayoutMode, index: usize) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };
        let Some(panel) = mode.panel_for_slide(index, scene.panels.len()) else {
            log::trace!("Slide {} has no panel in {:?} layout", index, mode);
            return;
        };

        let x = scene.panels.offset_of(panel);
        let entering = self.active_panel != Some(panel);
        let is_pulse_panel = scene.panels.pulse_target() == Some(panel);

        self.set_camera_x(x);
        if entering && is_pulse_panel {
            self.reset_pulse_repeats();
            self.request_pulse();
        }
        self.active_panel = Some(panel);
    }

    /// Display refresh: collect finished texture loads, then run one frame
    ///
    /// Returns whether another frame should be scheduled.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        let (Some(render_loop), Some(scene)) = (self.render_loop.as_mut(), self.scene.as_mut())
        else {
            return false;
        };

        if let Some(loader) = self.loader.as_ref() {
            for event in loader.poll() {
                scene.admit(event);
            }
        }

        render_loop.frame(scene, now)
    }
}
