pub mod cli;
pub mod config;
pub mod core;
pub mod description;
pub mod error;
pub mod math;
pub mod scene;
pub mod types;
pub mod window;

pub use config::ViewerConfig;
pub use crate::core::{Viewport, ViewportSize};
pub use description::{SceneDescription, SceneObject};
pub use error::{Result, ViewerError};
pub use scene::{MaterialPalette, Scene};
