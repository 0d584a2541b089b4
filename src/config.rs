use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "sectrain";

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct Config {
    /// Overrides where the persisted progress/badge documents live.
    pub data_dir: Option<PathBuf>,
}

fn config_path() -> Result<PathBuf, AppError> {
    let config_dir = dirs::config_dir().ok_or(AppError::DataDirNotFound)?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Load the config file; a missing file or unavailable config directory
/// means defaults.
pub fn load() -> Result<Config, AppError> {
    let path = match config_path() {
        Ok(path) => path,
        Err(_) => return Ok(Config::default()),
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Directory holding `progress.json` and `badges.json`.
pub fn data_dir(config: &Config) -> Result<PathBuf, AppError> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    let config_dir = dirs::config_dir().ok_or(AppError::DataDirNotFound)?;
    Ok(config_dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_has_no_override() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/sectrain-data")),
        };
        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("data_dir = \"/tmp/sectrain-data\""));
    }

    #[test]
    fn test_config_deserialization() {
        let config: Config = toml::from_str("data_dir = \"/var/lib/sectrain\"").unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/sectrain")));
    }

    #[test]
    fn test_empty_config_parses_to_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_data_dir_honors_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/elsewhere")),
        };
        assert_eq!(data_dir(&config).unwrap(), PathBuf::from("/tmp/elsewhere"));
    }
}
