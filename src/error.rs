//! Error types for the assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The display text of `AssistantError` is the exact reply the user sees.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command can fail with.
///
/// Every handler failure ends up here and is reported by printing it; none
/// of them ends the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrong number of arguments for the command
    #[error("Give me name and phone please.")]
    MissingArguments,

    /// No contact with that name
    #[error("Give me the right name, please.")]
    UnknownName(String),

    /// No contact to attach a birthday to
    #[error("Contact not found")]
    ContactNotFound(String),

    /// Contact is missing or has no birthday
    #[error("Birthday not found")]
    BirthdayNotFound(String),

    /// Contact has no phone at the requested position or value
    #[error("Give me the right index, please.")]
    PhoneNotFound(String),

    /// Command token not recognized
    #[error("Invalid command.")]
    InvalidCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for command results
pub type CommandResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
