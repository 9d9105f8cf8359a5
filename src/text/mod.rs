// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: the one place that decides what a term is.
//!
//! Indexing and querying must tokenize identically or the vocabulary lookups
//! silently miss, so both go through [`Analyzer`].
//!
//! # Rules
//!
//! 1. Optionally strip accents (NFD, drop combining marks)
//! 2. Optionally lowercase
//! 3. Split into maximal runs of word characters (alphanumeric or `_`)
//! 4. Keep runs of at least [`MIN_TOKEN_CHARS`] characters
//! 5. Drop stop words
//!
//! "state-of-the-art" yields `state` and `art`; "don't" yields `don`.

mod stop_words;

pub use stop_words::{is_english_stop_word, ENGLISH_STOP_WORDS};

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::{AnalyzerConfig, StopWords};

/// Shortest token that is indexed, in characters.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Tokenizer configured once and shared by index and query paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Normalize and split `text` into index terms, in order, duplicates kept.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0usize;

        for c in normalized.chars() {
            if is_word_char(c) {
                current.push(c);
                current_chars += 1;
            } else if !current.is_empty() {
                self.emit(&mut tokens, std::mem::take(&mut current), current_chars);
                current_chars = 0;
            }
        }
        if !current.is_empty() {
            self.emit(&mut tokens, current, current_chars);
        }

        tokens
    }

    fn emit(&self, tokens: &mut Vec<String>, token: String, chars: usize) {
        if chars >= MIN_TOKEN_CHARS && !self.is_stop_word(&token) {
            tokens.push(token);
        }
    }

    fn is_stop_word(&self, token: &str) -> bool {
        match self.config.stop_words {
            StopWords::English => is_english_stop_word(token),
            StopWords::None => false,
        }
    }

    fn normalize(&self, text: &str) -> String {
        let stripped = if self.config.strip_accents {
            strip_accents(text)
        } else {
            text.to_string()
        };
        if self.config.lowercase {
            stripped.to_lowercase()
        } else {
            stripped
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Remove diacritics: "café" → "cafe", "naïve" → "naive".
///
/// NFD decomposes characters into base + combining marks, then the marks are
/// dropped.
#[cfg(feature = "unicode-normalization")]
pub fn strip_accents(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without `unicode-normalization` accents are left alone.
#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_accents(value: &str) -> String {
    value.to_string()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
