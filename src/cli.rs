// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::BackgroundConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "story-background")]
#[command(about = "Story carousel with an animated panel background", long_about = None)]
pub struct Cli {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory scene image paths are resolved against
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Number of carousel slides
    #[arg(long)]
    pub slides: Option<usize>,
}

impl Cli {
    /// Load the configuration file (or defaults) and apply flag overrides
    pub fn load_config(&self) -> anyhow::Result<BackgroundConfig> {
        let mut config = match &self.config {
            Some(path) => BackgroundConfig::load(path)?,
            None => BackgroundConfig::default(),
        };
        if let Some(assets) = &self.assets {
            config.assets_dir = assets.clone();
        }
        if let Some(slides) = self.slides {
            config.slide_count = slides;
        }
        config.validate()?;
        Ok(config)
    }
}
