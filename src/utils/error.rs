use thiserror::Error;

/// Exit status for bad config values, matching clap usage errors.
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Error, Debug)]
pub enum RiftError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RiftError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RiftError::IoError(e) => format!("Could not read or write a file: {}", e),
            RiftError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            RiftError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RiftError::IoError(_) => "Check that the file exists and is readable",
            RiftError::TomlError(_) => "Fix the syntax in the config file or drop --config",
            RiftError::InvalidConfigValueError { .. } => "Use one of the listed values in the config file",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RiftError::InvalidConfigValueError { .. } => USAGE_EXIT_CODE,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RiftError>;
