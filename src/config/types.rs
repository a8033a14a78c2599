// Configuration types
// Defaults reproduce the fixed rules of the game; the file mostly exists
// so keys and colors can be remapped without rebuilding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyBindings {
    pub paddle_up: String,
    pub paddle_down: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: "Up".to_string(),
            paddle_down: "Down".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhysicsConfig {
    // Play-field size in virtual pixels
    pub field_width: f32,
    pub field_height: f32,

    // Score that ends a round
    pub end_score: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            field_width: 640.0,
            field_height: 480.0,
            end_score: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Foreground (paddles, ball, midline, score) and background colors,
    // RGB values 0-255
    pub fg_color: [u8; 3],
    pub bg_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            fg_color: [255, 255, 255],
            bg_color: [0, 0, 0],
        }
    }
}
