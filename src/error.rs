use thiserror::Error;

/// Errors raised around the version core: configuration and file access.
///
/// Version parsing itself never fails.
#[derive(Error, Debug)]
pub enum CompatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in project-semver
pub type Result<T> = std::result::Result<T, CompatError>;

impl CompatError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CompatError::Config(msg.into())
    }
}
