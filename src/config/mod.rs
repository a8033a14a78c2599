mod loader;
mod types;

pub use loader::load_config;
pub use types::{Config, DisplayConfig, KeyBindings, PhysicsConfig};
