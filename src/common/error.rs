// ghfeed - Latest releases and commits of a GitHub repository from its Atom feeds
// Copyright (C) 2025 ghfeed contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error handling for ghfeed - structured errors with context and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ghfeed operations
pub type Result<T> = std::result::Result<T, GhFeedError>;

/// Main error type for ghfeed
#[derive(Error, Debug)]
pub enum GhFeedError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Feed retrieval errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Output file could not be created or truncated
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// A write failed after the output was opened
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors raised while fetching or parsing a feed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Connection to {url} failed: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP error {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("Invalid feed document at {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// The output file could not be created or truncated
#[derive(Error, Debug)]
#[error("cannot create {}: {source}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A write failed mid-stream
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("writing to the console failed: {0}")]
    Console(#[source] std::io::Error),

    #[error("writing to {} failed: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Classify a reqwest failure for the given URL
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else if err.is_body() || err.is_decode() {
            FetchError::Body { url: url.to_string(), reason: err.to_string() }
        } else {
            FetchError::ConnectionFailed { url: url.to_string(), reason: err.to_string() }
        }
    }
}

impl GhFeedError {
    /// Get an error code for scripting purposes
    pub fn code(&self) -> &'static str {
        match self {
            GhFeedError::Config(_) => "E001",
            GhFeedError::Fetch(_) => "E020",
            GhFeedError::File(_) => "E030",
            GhFeedError::Write(_) => "E031",
            GhFeedError::Io(_) => "E070",
            GhFeedError::Other(_) => "E999",
        }
    }

    /// Get a recovery suggestion for this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            GhFeedError::Config(_) => {
                Some("Check your config file at ~/.config/ghfeed/config.toml")
            }
            GhFeedError::Fetch(FetchError::Timeout { .. }) => {
                Some("Check your internet connection or increase network.timeout_secs in config")
            }
            GhFeedError::Fetch(FetchError::HttpStatus { status: 404, .. }) => {
                Some("Check the repository URL, e.g. https://github.com/<owner>/<repo>")
            }
            GhFeedError::Fetch(FetchError::ConnectionFailed { .. }) => {
                Some("If the server uses a certificate your system does not trust, retry with --insecure")
            }
            GhFeedError::Fetch(FetchError::Parse { .. }) => {
                Some("The URL did not return an Atom/RSS document; check the repository URL")
            }
            GhFeedError::File(_) => {
                Some("Make sure the output directory exists and is writable")
            }
            _ => None,
        }
    }
}
