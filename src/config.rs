// config.rs - Background configuration (JSON file + defaults)
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PANEL_WIDTH: f32 = 2048.0;
pub const PANEL_HEIGHT: f32 = 1024.0;
pub const CAMERA_DISTANCE: f32 = 1000.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;
pub const PULSE_DURATION_MS: u64 = 1000;
/// Even, so a full set of ping-pong cycles ends back at the resting hue
pub const PULSE_REPEAT_CAP: u32 = 4;
pub const PULSE_PANEL: usize = 1;
/// Viewports narrower than this (logical px) use the one-slide layout
pub const NARROW_BREAKPOINT: f64 = 769.0;
pub const SLIDE_COUNT: usize = 8;
pub const CLEAR_COLOR: [u8; 3] = [0xEE, 0xEE, 0xEE];

/// One background image and its base hue rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    pub src: PathBuf,
    #[serde(default)]
    pub hue_rotation: f32,
}

impl SceneDescriptor {
    pub fn new(src: impl Into<PathBuf>, hue_rotation: f32) -> Self {
        Self {
            src: src.into(),
            hue_rotation,
        }
    }
}

fn default_scenes() -> Vec<SceneDescriptor> {
    vec![
        SceneDescriptor::new("img/scene-1.png", 0.0),
        SceneDescriptor::new("img/scene-2.png", 330.0),
        SceneDescriptor::new("img/scene-3.png", 0.0),
        SceneDescriptor::new("img/scene-4.png", 0.0),
    ]
}

fn default_panel_width() -> f32 {
    PANEL_WIDTH
}

fn default_panel_height() -> f32 {
    PANEL_HEIGHT
}

fn default_camera_distance() -> f32 {
    CAMERA_DISTANCE
}

fn default_near() -> f32 {
    CAMERA_NEAR
}

fn default_far() -> f32 {
    CAMERA_FAR
}

fn default_pulse_duration_ms() -> u64 {
    PULSE_DURATION_MS
}

fn default_pulse_repeat_cap() -> u32 {
    PULSE_REPEAT_CAP
}

fn default_pulse_panel() -> usize {
    PULSE_PANEL
}

fn default_narrow_breakpoint() -> f64 {
    NARROW_BREAKPOINT
}

fn default_slide_count() -> usize {
    SLIDE_COUNT
}

fn default_clear_color() -> [u8; 3] {
    CLEAR_COLOR
}

/// Everything the background needs, loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default = "default_scenes")]
    pub scenes: Vec<SceneDescriptor>,
    /// Image paths are resolved against this directory when relative
    #[serde(default)]
    pub assets_dir: PathBuf,
    #[serde(default = "default_panel_width")]
    pub panel_width: f32,
    #[serde(default = "default_panel_height")]
    pub panel_height: f32,
    #[serde(default = "default_camera_distance")]
    pub camera_distance: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
    #[serde(default = "default_pulse_duration_ms")]
    pub pulse_duration_ms: u64,
    #[serde(default = "default_pulse_repeat_cap")]
    pub pulse_repeat_cap: u32,
    #[serde(default = "default_pulse_panel")]
    pub pulse_panel: usize,
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: f64,
    #[serde(default = "default_slide_count")]
    pub slide_count: usize,
    #[serde(default = "default_clear_color")]
    pub clear_color: [u8; 3],
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            scenes: default_scenes(),
            assets_dir: PathBuf::new(),
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            camera_distance: CAMERA_DISTANCE,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            pulse_duration_ms: PULSE_DURATION_MS,
            pulse_repeat_cap: PULSE_REPEAT_CAP,
            pulse_panel: PULSE_PANEL,
            narrow_breakpoint: NARROW_BREAKPOINT,
            slide_count: SLIDE_COUNT,
            clear_color: CLEAR_COLOR,
        }
    }
}

impl BackgroundConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.panel_width > 0.0 && self.panel_height > 0.0) {
            anyhow::bail!(
                "panel size must be positive, got {}x{}",
                self.panel_width,
                self.panel_height
            );
        }
        if !(self.near > 0.0 && self.far > self.near) {
            anyhow::bail!("invalid clip planes: near {} far {}", self.near, self.far);
        }
        if self.camera_distance <= 0.0 || self.camera_distance >= self.far {
            anyhow::bail!(
                "camera distance {} must lie between 0 and the far plane {}",
                self.camera_distance,
                self.far
            );
        }
        Ok(())
    }

    pub fn pulse_duration(&self) -> Duration {
        Duration::from_millis(self.pulse_duration_ms)
    }

    /// Image path with `assets_dir` applied
    pub fn resolve_source(&self, src: &Path) -> PathBuf {
        if src.is_absolute() {
            src.to_path_buf()
        } else {
            self.assets_dir.join(src)
        }
    }

    /// Clear color as linear floats (the surface format is sRGB)
    pub fn clear_color_linear(&self) -> [f64; 3] {
        self.clear_color.map(|c| srgb_to_linear(c as f64 / 255.0))
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
