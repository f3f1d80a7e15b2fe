#![allow(dead_code)]

use std::time::Duration;
use story_background::camera::Camera;
use story_background::config::BackgroundConfig;
use story_background::controller::BackgroundController;
use story_background::core::surface::{DisplaySize, RenderSurface};
use story_background::loader::{LoadEvent, PanelImage, TextureLoader};
use story_background::panel::Panel;
use std::sync::mpsc::Sender;

/// What one draw call saw
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub panel_count: usize,
    pub camera_x: f32,
    pub progress: Vec<f32>,
    pub buffer: (u32, u32),
    pub resolution: Option<[f32; 2]>,
}

/// Surface that records every call instead of touching a GPU
pub struct MockSurface {
    pub display: DisplaySize,
    pub buffer: (u32, u32),
    pub resizes: Vec<(u32, u32)>,
    pub installs: usize,
    pub draws: Vec<DrawRecord>,
    pub fail_install: bool,
    pub fail_draw: bool,
}

impl MockSurface {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            display: DisplaySize::new(width, height, pixel_ratio),
            buffer: (0, 0),
            resizes: Vec::new(),
            installs: 0,
            draws: Vec::new(),
            fail_install: false,
            fail_draw: false,
        }
    }

    pub fn last_draw(&self) -> &DrawRecord {
        self.draws.last().expect("no frame drawn yet")
    }
}

impl RenderSurface for MockSurface {
    fn display_size(&self) -> DisplaySize {
        self.display
    }

    fn buffer_size(&self) -> (u32, u32) {
        self.buffer
    }

    fn resize_buffer(&mut self, width: u32, height: u32) {
        self.buffer = (width, height);
        self.resizes.push((width, height));
    }

    fn install_panels(&mut self, panels: &[Panel], images: Vec<PanelImage>) -> anyhow::Result<()> {
        if self.fail_install {
            anyhow::bail!("install refused");
        }
        assert_eq!(panels.len(), images.len());
        self.installs += 1;
        Ok(())
    }

    fn draw(&mut self, camera: &Camera, panels: &[Panel]) -> anyhow::Result<()> {
        self.draws.push(DrawRecord {
            panel_count: panels.len(),
            camera_x: camera.x(),
            progress: panels.iter().map(|p| p.progress).collect(),
            buffer: self.buffer,
            resolution: panels.first().map(|p| p.resolution),
        });
        if self.fail_draw {
            anyhow::bail!("device lost");
        }
        Ok(())
    }
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

pub fn image() -> PanelImage {
    PanelImage::solid(2, 1, [200, 100, 50, 255])
}

/// Controller over a mock surface with a hand-fed texture loader
pub fn started(surface: MockSurface) -> (BackgroundController<MockSurface>, Sender<LoadEvent>) {
    let mut controller = BackgroundController::new(BackgroundConfig::default());
    let (sender, loader) = TextureLoader::channel();
    controller.start_with_loader(Some(surface), move || loader);
    (controller, sender)
}

/// Send a successful load for every default scene
pub fn load_all(sender: &Sender<LoadEvent>) {
    for index in 0..4 {
        sender
            .send(LoadEvent::Loaded {
                index,
                image: image(),
            })
            .unwrap();
    }
}

pub fn surface(controller: &BackgroundController<MockSurface>) -> &MockSurface {
    controller.render_loop().unwrap().surface()
}

pub fn surface_mut(controller: &mut BackgroundController<MockSurface>) -> &mut MockSurface {
    controller.render_loop_mut().unwrap().surface_mut()
}
