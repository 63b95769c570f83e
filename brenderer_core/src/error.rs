//! Error types for bRenderer
//!
//! This module defines the error types used throughout the crate,
//! including backend collaborator failures and resource construction.

use std::fmt;

/// Result type for bRenderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// bRenderer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend collaborator error (file system, image decoder, shader compiler, model loader)
    BackendError(String),

    /// Invalid resource (bad descriptor, inconsistent pixel data, etc.)
    InvalidResource(String),

    /// A file or named entry could not be found
    NotFound(String),

    /// Initialization failed (engine, resource manager)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
