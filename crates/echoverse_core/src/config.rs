//! Layered configuration for EchoVerse.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from echoverse.toml)
//! - User overrides (~/.config/echoverse/echoverse.toml, then ./echoverse.toml)
//! - Automatic merging with user values taking precedence
//!
//! The rewrite temperature, the voice-to-model table and the synthesis input
//! cap are fixed in code.

use config::{Config, File, FileFormat};
use echoverse_error::{ConfigError, EchoverseError, EchoverseResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Text-generation service settings.
///
/// ```toml
/// [rewrite]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// model = "gemini-2.5-flash"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RewriteSettings {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Model identifier used for every rewrite
    pub model: String,
}

/// Speech-synthesis service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SynthesisSettings {
    /// Inference API root; the model id is appended as a path segment
    pub base_url: String,
}

/// Transport settings shared by both clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl HttpSettings {
    /// Timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Where the credential file lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StorageSettings {
    /// Override for the configuration directory (defaults to the platform config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<PathBuf>,
}

impl StorageSettings {
    /// Resolve the directory holding `credentials.json`.
    ///
    /// # Errors
    ///
    /// Returns an error when no override is set and the platform has no
    /// configuration directory.
    pub fn resolve_config_dir(&self) -> EchoverseResult<PathBuf> {
        if let Some(dir) = &self.config_dir {
            return Ok(dir.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("echoverse"))
            .ok_or_else(|| {
                EchoverseError::from(ConfigError::new(
                    "No configuration directory available; set [storage] config_dir",
                ))
            })
    }
}

/// Top-level EchoVerse configuration.
///
/// # Example
///
/// ```no_run
/// use echoverse_core::EchoverseConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = EchoverseConfig::load()?;
/// println!("Rewriting with {}", config.rewrite.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EchoverseConfig {
    /// Text-generation service
    pub rewrite: RewriteSettings,
    /// Speech-synthesis service
    pub synthesis: SynthesisSettings,
    /// Transport settings
    pub http: HttpSettings,
    /// Credential file location
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../echoverse.toml");

impl EchoverseConfig {
    /// The bundled defaults, with no user overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> EchoverseResult<Self> {
        Self::from_builder(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> EchoverseResult<Self> {
        debug!("Loading configuration from file");

        Self::from_builder(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present file fails to parse.
    #[instrument]
    pub fn load() -> EchoverseResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("echoverse/echoverse.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("echoverse").required(false));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> EchoverseResult<Self> {
        builder
            .build()
            .map_err(|e| {
                EchoverseError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                EchoverseError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
