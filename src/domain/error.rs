//! Error types for the Vitrine plugin.
//!
//! This module defines the centralized error type [`VitrineError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Vitrine plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from catalog loading to I/O failures and configuration issues. Note that most
/// display-level conditions (missing fields, malformed prices, out-of-range variant
/// selections) are recovered by defaulting and never become errors; only boundary
/// failures are represented here.
///
/// # Examples
///
/// ```
/// use vitrine::domain::VitrineError;
///
/// fn validate_config() -> Result<(), VitrineError> {
///     Err(VitrineError::Config("missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum VitrineError {
    /// The catalog source could not be read or parsed.
    ///
    /// Occurs when the product list document is unreachable or structurally
    /// invalid. The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot communicate with its background worker
    /// thread, typically during the initial catalog load.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Vitrine operations.
///
/// This is a type alias for `std::result::Result<T, VitrineError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, VitrineError>;
