//! Error types for switch command execution.
//!
//! Parsing never fails; every error in this workspace originates at the
//! command runner or in configuration handling. All errors implement
//! `std::error::Error` via `thiserror`.

use std::io;
use thiserror::Error;

/// Result type alias for switch client operations.
pub type FcSwitchResult<T> = Result<T, FcSwitchError>;

/// Errors that can occur while talking to a fabric switch.
#[derive(Debug, Error)]
pub enum FcSwitchError {
    /// Failed to spawn the transport program.
    #[error("Failed to execute switch command '{command}': {source}")]
    ShellExec {
        /// The command that failed to execute.
        command: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Transport program returned a non-zero exit code.
    #[error("Switch command failed: '{command}' (exit code {exit_code}): {output}")]
    CommandFailed {
        /// The command that failed.
        command: String,
        /// The exit code.
        exit_code: i32,
        /// Combined stdout/stderr output.
        output: String,
    },

    /// The session to the switch could not carry the command.
    #[error("Transport error for '{command}': {message}")]
    Transport {
        /// The command being sent.
        command: String,
        /// Error message.
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration for {field}: {message}")]
    Configuration {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// IO error outside of command execution (config files).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FcSwitchError {
    /// Creates a transport error.
    pub fn transport(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient condition
    /// that may succeed on retry.
    ///
    /// Nothing in this workspace retries; callers decide.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FcSwitchError::Transport { .. } | FcSwitchError::CommandFailed { .. }
        )
    }
}
