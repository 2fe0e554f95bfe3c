//! Error types for scenario loading.
//!
//! The physics core never fails; everything here belongs to the
//! file/YAML boundary in front of it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unknown magnet type: {0}")]
    UnknownMagnetType(String),

    #[error("Invalid motor direction: {0} (expected 1 or -1)")]
    InvalidMotorDirection(i64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
