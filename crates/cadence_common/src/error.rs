// --- File: crates/cadence_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Cadence errors.
///
/// Each crate can extend this by implementing `From<SpecificError> for CadenceError`.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A feature is switched off in the runtime configuration
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CadenceError {
    fn status_code(&self) -> u16 {
        match self {
            CadenceError::ParseError(_) => 400,
            CadenceError::ConfigError(_) => 500,
            CadenceError::UnavailableError(_) => 503,
            CadenceError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, CadenceError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, CadenceError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, CadenceError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| CadenceError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, CadenceError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| CadenceError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<config::ConfigError> for CadenceError {
    fn from(err: config::ConfigError) -> Self {
        CadenceError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> CadenceError {
    CadenceError::ConfigError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> CadenceError {
    CadenceError::UnavailableError(message.to_string())
}
