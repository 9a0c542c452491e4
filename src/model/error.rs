//! Error types for sidebar-toc.
//!
//! Hierarchical error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the CLI entry point
//!   - [`TreeError`] - Navigation tree file reading and parsing failures
//!   - [`LocationError`](crate::location::LocationError) - Unusable page URL
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber setup failures
//!
//! The sidebar controller has no error path of its own: once the tree and
//! location are typed values, rendering and marking cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The navigation tree could not be loaded.
    #[error("Failed to load navigation tree: {0}")]
    Tree(#[from] TreeError),

    /// The page location given on the command line is not an absolute URL.
    #[error("Invalid page location: {0}")]
    Location(#[from] crate::location::LocationError),

    /// The configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Writing the rendered sidebar failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when loading the navigation tree.
///
/// The tree is trusted generator output, so these only cover getting it off
/// disk and through the deserializer; the structure itself is not validated.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The tree file could not be read.
    #[error("Failed to read tree file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The tree file is not valid JSON for a navigation tree.
    #[error("Invalid JSON navigation tree: {reason}")]
    Json {
        /// Parser error message.
        reason: String,
    },

    /// The tree file is not valid TOML for a navigation tree.
    #[error("Invalid TOML navigation tree: {reason}")]
    Toml {
        /// Parser error message.
        reason: String,
    },

    /// The file extension does not name a supported format.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use sidebar_toc::model::error::TreeError;
    ///
    /// let err = TreeError::UnsupportedFormat {
    ///     path: PathBuf::from("book.yaml"),
    ///     extension: Some("yaml".to_string()),
    /// };
    /// assert!(err.to_string().contains("book.yaml"));
    /// ```
    #[error("Unsupported tree format for {path} (expected .json or .toml)")]
    UnsupportedFormat {
        /// Path that was given.
        path: PathBuf,
        /// Extension found, if any.
        extension: Option<String>,
    },
}
