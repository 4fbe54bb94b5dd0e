//! Command line interface
//!
//! Everything here is an in-memory default for one run; nothing is
//! read from or written to configuration files.

use clap::Parser;

/// Interactive Phong-shaded sphere viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "phong-viewer", version, about)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "phong")]
    pub title: String,

    /// Start in borderless fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Sphere radius in pixels
    #[arg(long, default_value_t = 100.0)]
    pub radius: f32,

    /// Angular sampling step in degrees
    #[arg(long, default_value_t = 0.5)]
    pub step: f32,

    /// Drawn point size in pixels
    #[arg(long, default_value_t = 2.0)]
    pub point_size: f32,

    /// Start with term clamping disabled
    #[arg(long)]
    pub no_clamp: bool,

    /// Start with coefficient-sum scaling enabled
    #[arg(long)]
    pub scale: bool,

    /// Render a single frame and exit
    #[arg(long)]
    pub debug: bool,

    /// Save the first rendered frame as a PNG and exit
    #[arg(long)]
    pub capture_frame: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["phong-viewer"])
    }
}
