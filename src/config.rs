use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CompatError, Result};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "project-semver.toml";

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV_VAR: &str = "PROJECT_SEMVER_CONFIG";

/// Represents the complete configuration for project-semver.
///
/// Names the version under test and the runtime versions it is checked against.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Version under test; the compiled-in version when absent
    #[serde(default)]
    pub declared: Option<String>,

    /// Component name to the runtime version it reports
    #[serde(default)]
    pub components: BTreeMap<String, String>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Configuration for behavior customization.
///
/// Controls how verdicts are turned into a process outcome.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Exit non-zero when any check is incompatible
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Rejects entries that would silently parse as `0.0.0`.
    pub fn validate(&self) -> Result<()> {
        if let Some(declared) = &self.declared {
            ensure_version("'declared'", declared)?;
        }

        for (name, version) in &self.components {
            ensure_version(&format!("component '{}'", name), version)?;
        }

        Ok(())
    }
}

/// Rejects a blank version string, whatever its source.
///
/// `what` names the value in the error message.
pub fn ensure_version(what: &str, version: &str) -> Result<()> {
    if version.trim().is_empty() {
        return Err(CompatError::config(format!(
            "{} must not be an empty version",
            what
        )));
    }
    Ok(())
}

/// Parses configuration from TOML text and validates it.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `PROJECT_SEMVER_CONFIG` environment variable
/// 3. `project-semver.toml` in current directory
/// 4. `project-semver.toml` in user config directory
/// 5. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = resolve_config_path(config_path) else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let text = fs::read_to_string(&path)?;
    parse_config(&text)
}

fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
