use std::path::PathBuf;
use crate::config::SceneDescriptor;
use crate::types::PanelUniform;

/// One textured background plane
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub src: PathBuf,
    /// Horizontal position of the panel centre, `index * panel_width`
    pub offset_x: f32,
    /// Base hue rotation in degrees
    pub hue_rotation: f32,
    pub slide_index: u32,
    /// Viewport size in logical pixels
    pub resolution: [f32; 2],
    /// Pulse progress in [0, 1]
    pub progress: f32,
}

impl Panel {
    pub fn to_uniform(&self) -> PanelUniform {
        PanelUniform {
            resolution: self.resolution,
            offset_x: self.offset_x,
            hue_rotation: self.hue_rotation,
            progress: self.progress,
            slide_index: self.slide_index,
            _pad: [0.0; 2],
        }
    }
}

/// Fixed, ordered strip of panels laid out side by side along x
#[derive(Debug, Clone)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    panel_width: f32,
    pulse_target: Option<usize>,
}

impl PanelRegistry {
    /// Build one panel per descriptor, in descriptor order
    ///
    /// `pulse_panel` is resolved here once; an index past the end leaves
    /// the registry without a pulse target.
    pub fn build(
        descriptors: &[SceneDescriptor],
        panel_width: f32,
        viewport: [f32; 2],
        pulse_panel: usize,
    ) -> Self {
        let panels = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| Panel {
                src: descriptor.src.clone(),
                offset_x: panel_width * index as f32,
                hue_rotation: descriptor.hue_rotation,
                slide_index: index as u32,
                resolution: viewport,
                progress: 0.0,
            })
            .collect::<Vec<_>>();

        let pulse_target = (pulse_panel < panels.len()).then_some(pulse_panel);

        Self {
            panels,
            panel_width,
            pulse_target,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Camera x that centres panel `index`
    pub fn offset_of(&self, index: usize) -> f32 {
        self.panel_width * index as f32
    }

    pub fn pulse_target(&self) -> Option<usize> {
        self.pulse_target
    }

    /// Panel whose offset equals `camera_x`, if any
    pub fn active_panel(&self, camera_x: f32) -> Option<usize> {
        self.panels.iter().position(|panel| panel.offset_x == camera_x)
    }

    /// Update every panel's resolution uniform
    pub fn set_resolution(&mut self, viewport: [f32; 2]) {
        for panel in &mut self.panels {
            panel.resolution = viewport;
        }
    }

    /// Write pulse progress into the pulse target; no-op without one
    pub fn set_pulse_progress(&mut self, progress: f32) {
        if let Some(panel) = self.pulse_target.and_then(|i| self.panels.get_mut(i)) {
            panel.progress = progress;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackgroundConfig;

    fn registry() -> PanelRegistry {
        let config = BackgroundConfig::default();
        PanelRegistry::build(&config.scenes, 2048.0, [1280.0, 720.0], 1)
    }

    #[test]
    fn test_offsets_follow_descriptor_order() {
        let registry = registry();
        let offsets: Vec<f32> = registry.panels().iter().map(|p| p.offset_x).collect();
        assert_eq!(offsets, vec![0.0, 2048.0, 4096.0, 6144.0]);

        for (index, panel) in registry.panels().iter().enumerate() {
            assert_eq!(panel.offset_x, registry.offset_of(index));
            assert_eq!(panel.slide_index, index as u32);
        }
        assert_eq!(registry.get(1).map(|p| p.hue_rotation), Some(330.0));
    }

    #[test]
    fn test_initial_uniforms() {
        let registry = registry();
        let uniform = registry.panels()[2].to_uniform();
        assert_eq!(uniform.resolution, [1280.0, 720.0]);
        assert_eq!(uniform.offset_x, 4096.0);
        assert_eq!(uniform.progress, 0.0);
        assert_eq!(uniform.slide_index, 2);
    }

    #[test]
    fn test_pulse_target_resolution() {
        assert_eq!(registry().pulse_target(), Some(1));

        let scenes = vec![SceneDescriptor::new("only.png", 0.0)];
        let single = PanelRegistry::build(&scenes, 2048.0, [1.0, 1.0], 1);
        assert_eq!(single.pulse_target(), None);
    }

    #[test]
    fn test_pulse_progress_only_touches_target() {
        let mut registry = registry();
        registry.set_pulse_progress(0.75);

        let progress: Vec<f32> = registry.panels().iter().map(|p| p.progress).collect();
        assert_eq!(progress, vec![0.0, 0.75, 0.0, 0.0]);
    }

    #[test]
    fn test_set_resolution_updates_all() {
        let mut registry = registry();
        registry.set_resolution([640.0, 960.0]);
        assert!(registry.panels().iter().all(|p| p.resolution == [640.0, 960.0]));
    }

    #[test]
    fn test_active_panel_lookup() {
        let registry = registry();
        assert_eq!(registry.active_panel(4096.0), Some(2));
        assert_eq!(registry.active_panel(100.0), None);
    }
}
