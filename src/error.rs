// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the library.
//!
//! The pipeline itself never fails: malformed entries, empty corpora and
//! out-of-vocabulary queries are all ordinary outcomes. What can fail is the
//! glue around it, reading the corpus from disk and loading configuration.

use std::fmt;
use std::path::PathBuf;

/// Errors from corpus loading and configuration.
#[derive(Debug)]
pub enum Error {
    /// The corpus or config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The corpus file is not valid UTF-8.
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    /// The config file is not valid JSON for `EngineConfig`.
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A config value is out of range.
    InvalidConfig { field: &'static str, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Error::Decode { path, source } => {
                write!(f, "{} is not valid UTF-8: {}", path.display(), source)
            }
            Error::Config { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
            Error::InvalidConfig { field, reason } => {
                write!(f, "invalid config value for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Decode { source, .. } => Some(source),
            Error::Config { source, .. } => Some(source),
            Error::InvalidConfig { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
