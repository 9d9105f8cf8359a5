// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading the bibliography from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read `path` as UTF-8 text.
pub fn load_corpus(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded corpus");
    Ok(text)
}
