//! Configuration file support for brocadectl
//!
//! Loads and validates client configuration from TOML files.
//! Default location: /etc/fcswitch/brocadectl.toml

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fcswitch_common::{FcSwitchError, FcSwitchResult, Fid, ShellRunner};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "/etc/fcswitch/brocadectl.toml";

/// How the switch CLI is reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Program that forwards a command to the switch CLI
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the FOS command
    #[serde(default)]
    pub args: Vec<String>,
}

/// Switch defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// Logical switch used when a command names none
    #[serde(default)]
    pub fid: Option<Fid>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Complete brocadectl configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Transport configuration
    #[serde(default)]
    pub transport: TransportConfig,

    /// Switch defaults
    #[serde(default)]
    pub switch: SwitchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_program() -> String {
    "ssh".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from file, or `None` if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> FcSwitchResult<Option<Self>> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map(Some).map_err(|e| match e {
                FcSwitchError::Configuration { message, .. } => {
                    FcSwitchError::configuration(path.display().to_string(), message)
                }
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FcSwitchError::Io(e)),
        }
    }

    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> FcSwitchResult<Self> {
        Self::load(path).map(Option::unwrap_or_default)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> FcSwitchResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| FcSwitchError::configuration("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> FcSwitchResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FcSwitchError::configuration("config", e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> FcSwitchResult<()> {
        if self.transport.program.trim().is_empty() {
            return Err(FcSwitchError::configuration(
                "transport.program",
                "must not be empty",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(FcSwitchError::configuration(
                "logging.level",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Build the runner described by the transport section
    pub fn runner(&self) -> ShellRunner {
        ShellRunner::new(&self.transport.program, &self.transport.args)
    }
}
