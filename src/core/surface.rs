use crate::camera::Camera;
use crate::loader::PanelImage;
use crate::panel::Panel;

/// Output surface measurement in logical pixels plus device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    /// Width in logical pixels
    pub width: f64,
    /// Height in logical pixels
    pub height: f64,
    /// Physical pixels per logical pixel
    pub pixel_ratio: f64,
}

impl DisplaySize {
    /// Create new display size
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Drawing buffer size in physical pixels
    ///
    /// Rounded, so a logical size derived from a physical one maps back to
    /// the same physical size.
    pub fn buffer_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    /// Zero, negative or non-finite measurements can't drive a projection
    pub fn is_degenerate(&self) -> bool {
        let (width, height) = self.buffer_size();
        !(self.width.is_finite() && self.height.is_finite() && self.pixel_ratio.is_finite())
            || width == 0
            || height == 0
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Width / height in logical pixels
    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }

    /// Viewport dimensions fed to the panel resolution uniform
    pub fn viewport(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Output surface driven by the render loop
///
/// The wgpu renderer is the production implementation; tests substitute
/// a recording mock.
pub trait RenderSurface {
    /// Measure the surface's current size
    fn display_size(&self) -> DisplaySize;

    /// Currently configured drawing buffer size in physical pixels
    fn buffer_size(&self) -> (u32, u32);

    /// Reconfigure the drawing buffer
    fn resize_buffer(&mut self, width: u32, height: u32);

    /// Upload textures for every panel, in panel order
    fn install_panels(&mut self, panels: &[Panel], images: Vec<PanelImage>) -> anyhow::Result<()>;

    /// Draw the visible panels once from the camera
    fn draw(&mut self, camera: &Camera, panels: &[Panel]) -> anyhow::Result<()>;
}
