// Phong sphere viewer
// Frame driver over the scene crates: window, input, GL point drawing

pub mod app;
pub mod bindings;
pub mod cli;
pub mod input;
pub mod render;

// Re-export commonly used types
pub use app::ViewerApp;
pub use cli::Args;
pub use input::KeyboardState;
pub use render::PointRenderer;
