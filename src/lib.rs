pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::AppState;
pub use crate::core::components::{Balloon, BalloonState, Cloud, Crosshair};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
