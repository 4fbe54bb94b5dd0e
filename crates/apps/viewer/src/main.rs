use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use phong_viewer::{Args, ViewerApp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(args);

    event_loop.run_app(&mut app)?;
    Ok(())
}
