use std::time::Duration;
use crate::camera::Camera;
use crate::config::BackgroundConfig;
use crate::loader::{LoadBarrier, LoadEvent, PanelImage};
use crate::panel::{Panel, PanelRegistry};
use crate::pulse::PulseAnimation;

/// Panels, camera and pulse state for one controller lifetime
#[derive(Debug)]
pub struct Scene {
    pub camera: Camera,
    pub panels: PanelRegistry,
    pub pulse: PulseAnimation,
    textures: LoadBarrier<PanelImage>,
    visible: bool,
}

impl Scene {
    /// Build panels and camera for the current viewport; nothing is visible
    /// until every texture has been admitted
    pub fn build(config: &BackgroundConfig, viewport: [f32; 2]) -> Self {
        let panels = PanelRegistry::build(
            &config.scenes,
            config.panel_width,
            viewport,
            config.pulse_panel,
        );
        let camera = Camera::new(viewport, config.camera_distance, config.near, config.far);

        Self {
            camera,
            textures: LoadBarrier::new(panels.len()),
            panels,
            pulse: PulseAnimation::new(config.pulse_duration(), config.pulse_repeat_cap),
            visible: false,
        }
    }

    /// Record a texture load completion
    pub fn admit(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded { index, image } => self.textures.complete(index, image),
            LoadEvent::Failed { index, error } => {
                if self.textures.has_failed() {
                    log::debug!("Panel {} texture failed: {:#}", index, error);
                } else {
                    log::warn!(
                        "Panel {} texture failed, background stays blank: {:#}",
                        index,
                        error
                    );
                }
                self.textures.fail(index);
            }
        }
    }

    /// Images for every panel, handed out once when the last texture lands
    pub fn take_ready_images(&mut self) -> Option<Vec<PanelImage>> {
        self.textures.release()
    }

    /// Mark all panels as part of the drawn scene
    pub fn show_panels(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn textures_failed(&self) -> bool {
        self.textures.has_failed()
    }

    /// Panels whose texture failed to load
    pub fn failed_panels(&self) -> &[usize] {
        self.textures.failed_slots()
    }

    /// Panels the draw should include: all of them or none
    pub fn visible_panels(&self) -> &[Panel] {
        if self.visible {
            self.panels.panels()
        } else {
            &[]
        }
    }

    /// Frame step 3: run the pulse and copy its progress to the target panel
    pub fn advance_pulse(&mut self, now: Duration) {
        if let Some(progress) = self.pulse.advance(now) {
            self.panels.set_pulse_progress(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::build(&BackgroundConfig::default(), [1280.0, 720.0])
    }

    #[test]
    fn test_scene_starts_hidden() {
        let scene = scene();
        assert_eq!(scene.panels.len(), 4);
        assert!(scene.visible_panels().is_empty());
        assert_eq!(scene.camera.x(), 0.0);
    }

    #[test]
    fn test_images_released_only_when_all_loaded() {
        let mut scene = scene();
        for index in 0..3 {
            scene.admit(LoadEvent::Loaded {
                index,
                image: PanelImage::solid(1, 1, [0; 4]),
            });
        }
        assert!(scene.take_ready_images().is_none());

        scene.admit(LoadEvent::Loaded {
            index: 3,
            image: PanelImage::solid(1, 1, [0; 4]),
        });
        assert_eq!(scene.take_ready_images().map(|images| images.len()), Some(4));
    }

    #[test]
    fn test_failure_keeps_scene_empty() {
        let mut scene = scene();
        scene.admit(LoadEvent::Failed {
            index: 2,
            error: anyhow::anyhow!("missing"),
        });
        for index in [0, 1, 3] {
            scene.admit(LoadEvent::Loaded {
                index,
                image: PanelImage::solid(1, 1, [0; 4]),
            });
        }
        assert!(scene.textures_failed());
        assert_eq!(scene.failed_panels(), &[2]);
        assert!(scene.take_ready_images().is_none());
    }

    #[test]
    fn test_pulse_writes_target_panel() {
        let mut scene = scene();
        scene.pulse.request();
        scene.advance_pulse(Duration::ZERO);
        scene.advance_pulse(Duration::from_millis(1000));

        assert_eq!(scene.panels.get(1).map(|p| p.progress), Some(1.0));
        assert_eq!(scene.panels.get(0).map(|p| p.progress), Some(0.0));
    }
}
