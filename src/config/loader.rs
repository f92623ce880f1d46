// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

/// Load configuration from a specific path
pub fn load_config_from(config_path: &Path) -> Result<Config, io::Error> {
    if config_path.exists() {
        let contents = fs::read_to_string(config_path)?;
        Ok(parse_config(&contents))
    } else {
        create_default_config(config_path)?;
        Ok(Config::default())
    }
}

/// Parse config text, falling back to defaults when it is malformed or unplayable
pub fn parse_config(contents: &str) -> Config {
    let config: Config = match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to parse config file: {}", e);
            tracing::warn!("Using default configuration");
            return Config::default();
        }
    };

    if let Err(e) = config.validate() {
        tracing::warn!("Invalid configuration ({}), using defaults", e);
        return Config::default();
    }
    config
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# Pong Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\", etc.\n\
         #\n\
         # Speeds: 5 (slow), 10 (medium), 15 (fast) are the presets B/N cycle through\n\
         #\n\
         # Opponent: \"computer\" or \"human\"\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    tracing::info!("Created default config file at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Opponent;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.physics.ball_speed, config.physics.ball_speed);
        assert_eq!(parsed.physics.world_width, config.physics.world_width);
        assert_eq!(
            parsed.keybindings.left_paddle_up,
            config.keybindings.left_paddle_up
        );
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.ai.opponent, config.ai.opponent);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let partial_toml = r#"
            [physics]
            ball_speed = 15.0

            [ai]
            opponent = "human"
        "#;

        let config = parse_config(partial_toml);

        // Custom values
        assert_eq!(config.physics.ball_speed, 15.0);
        assert_eq!(config.ai.opponent, Opponent::Human);

        // Default values should still be there
        assert_eq!(config.physics.paddle_speed, 5.0);
        assert_eq!(config.physics.world_height, 480);
        assert_eq!(config.keybindings.left_paddle_up, "Up");
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = parse_config("[physics\nball_speed = ");
        assert_eq!(config.physics.ball_speed, 10.0);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = parse_config("[physics]\nwinning_score = 0\n");
        assert_eq!(config.physics.winning_score, 10);
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = std::env::temp_dir().join(format!("pong-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.physics.winning_score, 10);
        assert!(path.exists());

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded.keybindings.quit, "Q");

        fs::remove_dir_all(&dir).ok();
    }
}
