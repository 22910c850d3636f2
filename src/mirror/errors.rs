//! # Error Types
//!
//! This module defines custom error types used throughout the `mirror`
//! module.

use std::{io, path::PathBuf};

use thiserror;

/// Errors that occur when a manifest entry is being parsed.
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    /// A manifest entry did not start with the expected `./` prefix.
    ///
    /// The manifest format guarantees every entry is a relative path
    /// prefixed with `./`; anything else means the manifest itself is
    /// malformed, and the whole run is aborted.
    #[error("Unexpected manifest entry '{token}': entries must start with './'")]
    MissingPrefix {
        /// The offending manifest token.
        token: String,
    },
}

/// Errors that occur in the Mirror Runner.
///
/// Some of these relate to downloads over HTTP.  Others relate to local
/// conditions such as directory creation.
#[derive(thiserror::Error, Debug)]
pub enum MirrorError {
    /// Failed to perform an HTTP request.
    #[error("Failed to fetch '{url}': {error}")]
    Fetch {
        /// The URL that could not be fetched.
        url: String,
        /// The underlying HTTP error.
        #[source]
        error: reqwest::Error,
    },

    /// An HTTP request completed with a non-success status code.
    #[error("Request to '{url}' returned status {status}")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The status code returned by the server.
        status: reqwest::StatusCode,
    },

    /// Failed to create a destination directory.
    #[error("Failed to create '{path}': {error}")]
    IoCreate {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to write a downloaded file.
    #[error("Failed to write '{path}': {error}")]
    IoWrite {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The manifest contained a malformed entry.
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] ManifestError),

    /// Failed to create a progress bar.
    #[error("Failed to create progress bar: {0}")]
    ProgressBar(String),
}
