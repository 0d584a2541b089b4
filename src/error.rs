use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Failed to encode state: {0}")]
    StateFormatError(#[from] serde_json::Error),

    #[error("Could not locate a config directory for this platform.")]
    DataDirNotFound,
}
