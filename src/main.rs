use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use story_background::app::App;
use story_background::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    log::info!(
        "{} scenes, {} slides, assets in {:?}",
        config.scenes.len(),
        config.slide_count,
        config.assets_dir
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, cli.width, cli.height);

    println!("Story Background - Controls: Left/Right to change slide, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
