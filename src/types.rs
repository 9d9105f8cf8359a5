// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the retrieval pipeline.
//!
//! A `PaperRecord` is what the parser produces and what a search hands back.
//! A `SearchHit` pairs a record with its cosine score and its position in the
//! sampled set, which is also the tiebreaker when two scores are equal.
//!
//! # Invariants
//!
//! - **PaperRecord**: all five fields were extracted from the same entry and
//!   `abstract_text` is non-empty. There is no constructor for partial records.
//!
//! - **DocId**: `doc_id < sample.len()`. It indexes the sampled set, not the
//!   full corpus, so it is only meaningful next to the engine that issued it.
//!
//! - **SearchHit**: `0.0 < score <= 1.0` once it leaves the ranker (the noise
//!   threshold has already been applied).

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a document within the sampled set.
///
/// Keeps sampled-set positions from being mixed up with corpus positions,
/// which are plain `usize` values on [`crate::SampledSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

impl TryFrom<usize> for DocId {
    type Error = std::num::TryFromIntError;

    fn try_from(pos: usize) -> Result<Self, Self::Error> {
        u32::try_from(pos).map(DocId)
    }
}

// =============================================================================
// RECORD TYPES
// =============================================================================

/// One bibliography entry with every required field present.
///
/// `year` stays a string: the source format does not guarantee a number and
/// nothing downstream does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub title: String,
    pub author: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub year: String,
    pub url: String,
}

impl fmt::Display for PaperRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}). {}.",
            self.title, self.author, self.year, self.url
        )
    }
}

/// A ranked search result.
///
/// Borrows the record from the engine that produced it, so hits are cheap to
/// build and cannot outlive the index they were scored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a> {
    pub doc_id: DocId,
    pub score: f64,
    pub record: &'a PaperRecord,
}
