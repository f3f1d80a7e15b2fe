pub mod app;
pub mod camera;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod frame;
pub mod loader;
pub mod panel;
pub mod pulse;
pub mod render_loop;
pub mod renderer;
pub mod scene;
pub mod types;

pub use config::BackgroundConfig;
pub use controller::{BackgroundController, LayoutMode};
pub use core::surface::{DisplaySize, RenderSurface};
