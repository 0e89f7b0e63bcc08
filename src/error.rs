//! Crate-wide error type for render task operations.
//!
//! Missing settings, a missing active document, and a failed task lookup
//! are deliberately *not* errors in this crate; they shorten the command
//! string or produce [`CommandOutcome::NotFound`](crate::CommandOutcome).
//! [`Error`] covers the failures that do need reporting: unreadable or
//! malformed settings files, misconfigured registries, and shell
//! execution failures.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during render task operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    SettingsRead {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or does not match the schema.
    #[error("failed to parse settings file {path}: {source}")]
    SettingsParse {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Settings string is not valid TOML or does not match the schema.
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Extension builder was missing a required field or was given
    /// conflicting registrations.
    #[error("invalid extension configuration: {0}")]
    Validation(String),

    /// Command id was not registered with the extension.
    ///
    /// Unlike a failed *task* lookup (which is a silent
    /// [`NotFound`](crate::CommandOutcome::NotFound)), an unknown command
    /// id is a caller bug.
    #[error("unknown command: {command_id}")]
    UnknownCommand {
        /// The id that was not registered.
        command_id: String,
    },

    /// No task provider is registered for a task type.
    #[error("no task provider registered for type {task_type:?}")]
    NoProvider {
        /// The task type that had no provider.
        task_type: String,
    },

    /// Shell execution of a task failed (spawn error or non-zero exit).
    #[error("task execution failed: {0}")]
    Execution(String),
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }
}
