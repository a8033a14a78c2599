// Configuration file loading and creation

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pongtty");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create a default one if it doesn't exist
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Write a default configuration file with a commented header
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("failed to serialize defaults")?;

    let commented_toml = format!(
        "# pongtty configuration file\n\
         # Restart the game for changes to take effect\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Esc\", \"Enter\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Should round-trip cleanly - parsed values must match the defaults
        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.physics.field_width, config.physics.field_width);
        assert_eq!(parsed.physics.end_score, config.physics.end_score);
        assert_eq!(parsed.keybindings.paddle_up, config.keybindings.paddle_up);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        // Should be able to parse partial config with #[serde(default)]
        let partial_toml = r#"
            [keybindings]
            paddle_up = "W"
            paddle_down = "S"
            quit = "Q"
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        // Custom values
        assert_eq!(config.keybindings.paddle_up, "W");

        // Default values should still be there
        assert_eq!(config.physics.field_width, 640.0);
        assert_eq!(config.physics.end_score, 30);
        assert_eq!(config.display.target_fps, 60);
    }
}
