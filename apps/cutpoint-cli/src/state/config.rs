//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CUTPOINT_*`)
//! 2. Config file (`--config`, `$CUTPOINT_CONFIG`, or the platform config dir)
//! 3. Defaults (this file)
//!
//! ## Example `cutpoint.toml`
//! ```toml
//! default_volume_cc = 970
//! thousands_separator = "."
//! unit_label = "botellas"
//! json = false
//! log_filter = "warn,cutpoint=debug"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use cutpoint_core::display::{DisplayOptions, DEFAULT_THOUSANDS_SEPARATOR};
use cutpoint_core::{supported_volumes, BottleVolumeClass, DEFAULT_UNIT_LABEL};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Prefix of the environment variables that override settings.
pub const ENV_PREFIX: &str = "CUTPOINT";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CUTPOINT_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Class selected on startup and after a reset.
    pub default_volume_cc: u32,

    /// Digit grouping character for displayed counts.
    pub thousands_separator: char,

    /// Unit appended to displayed counts.
    pub unit_label: String,

    /// Print JSON instead of text unless a command says otherwise.
    pub json: bool,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Plant defaults: 1000cc bottles, es-AR grouping, Spanish unit label.
    fn default() -> Self {
        ConfigState {
            default_volume_cc: BottleVolumeClass::default().cc(),
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            unit_label: DEFAULT_UNIT_LABEL.to_string(),
            json: false,
            log_filter: "warn,cutpoint=info".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the usual places.
    ///
    /// An explicit path must exist; the platform default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApiError> {
        let (path, required) = match explicit {
            Some(path) => (Some(path.to_path_buf()), true),
            None => match std::env::var_os(CONFIG_PATH_ENV) {
                Some(path) => (Some(PathBuf::from(path)), true),
                None => (default_config_path(), false),
            },
        };

        Self::from_sources(path.as_deref(), required, ENV_PREFIX)
    }

    /// Loads from one optional file plus environment variables with `env_prefix`.
    pub fn from_sources(
        path: Option<&Path>,
        required: bool,
        env_prefix: &str,
    ) -> Result<Self, ApiError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!(?path, required, "config file source");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        let settings = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let config: ConfigState = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ApiError> {
        if BottleVolumeClass::from_cc(self.default_volume_cc).is_none() {
            return Err(ApiError::config(format!(
                "default_volume_cc must be one of {:?}, got {}",
                supported_volumes(),
                self.default_volume_cc
            )));
        }

        if self.thousands_separator.is_ascii_digit() {
            return Err(ApiError::config("thousands_separator cannot be a digit"));
        }

        Ok(())
    }

    /// The class restored by a reset.
    pub fn default_class(&self) -> BottleVolumeClass {
        BottleVolumeClass::from_cc(self.default_volume_cc).unwrap_or_default()
    }

    /// Rendering settings for result lines.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            thousands_separator: self.thousands_separator,
            unit_label: self.unit_label.clone(),
        }
    }
}

/// Platform config file location.
///
/// ## Platform-Specific Paths
/// - **Linux**: `~/.config/cutpoint/cutpoint.toml`
/// - **macOS**: `~/Library/Application Support/com.cutpoint.cutpoint/cutpoint.toml`
/// - **Windows**: `%APPDATA%\cutpoint\cutpoint\config\cutpoint.toml`
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "cutpoint", "cutpoint")
        .map(|dirs| dirs.config_dir().join("cutpoint.toml"))
}
