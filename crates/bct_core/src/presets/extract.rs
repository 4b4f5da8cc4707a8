//! Name extraction from the firmware's `structures.h`.
//!
//! The firmware declares presets, contexts and locations one per line, e.g.
//!
//! ```text
//! static struct bap_preset preset_16_2_1 = { .name = "16_2_1", ... };
//! ```
//!
//! Only the quoted name is needed, so this is a line scanner and not a C
//! parser: a line counts when it mentions both the category keyword and
//! `.name`, and the name is the first quoted string in the third
//! `=`-separated token. Lines of any other shape are skipped without error.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::catalog::PresetCatalog;
use crate::models::{CUSTOM, NOT_SET};

/// Errors reading the header file.
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Failed to read header {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Kind of declaration to pull names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCategory {
    Preset,
    Context,
    Location,
}

impl NameCategory {
    /// Substring a declaration line must contain.
    pub fn keyword(self) -> &'static str {
        match self {
            NameCategory::Preset => "preset",
            NameCategory::Context => "context",
            NameCategory::Location => "location",
        }
    }
}

/// What happens to a candidate line that doesn't have the expected shape.
///
/// Only one policy exists: the line contributes nothing and no error is
/// raised, so dropdown contents depend solely on well-formed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    #[default]
    SkipSilently,
}

/// Pull the name out of one declaration line, if it has one.
pub fn extract_name(line: &str, category: NameCategory) -> Option<&str> {
    if !line.contains(category.keyword()) || !line.contains(".name") {
        return None;
    }
    line.split('=').nth(2)?.split('"').nth(1)
}

/// Collect names of one category from header text, in file order.
pub fn extract_names(text: &str, category: NameCategory) -> Vec<String> {
    let mut names = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        match extract_name(line, category) {
            Some(name) => names.push(name.to_string()),
            None if line.contains(category.keyword()) && line.contains(".name") => {
                tracing::trace!(
                    line = line_no + 1,
                    policy = ?MalformedLinePolicy::SkipSilently,
                    "Skipping malformed {} line",
                    category.keyword()
                );
            }
            None => {}
        }
    }
    names
}

/// Dropdown vocabularies built from the header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderNames {
    pub presets: Vec<String>,
    pub contexts: Vec<String>,
    pub locations: Vec<String>,
}

impl HeaderNames {
    /// Build the vocabularies from header text.
    pub fn from_text(text: &str) -> Self {
        let mut presets = vec![NOT_SET.to_string(), CUSTOM.to_string()];
        presets.extend(extract_names(text, NameCategory::Preset));

        let mut contexts = vec![NOT_SET.to_string()];
        contexts.extend(extract_names(text, NameCategory::Context));

        let mut locations = vec![NOT_SET.to_string()];
        locations.extend(extract_names(text, NameCategory::Location));

        Self {
            presets,
            contexts,
            locations,
        }
    }

    /// Read and scan the header file once.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HeaderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HeaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let names = Self::from_text(&text);
        tracing::debug!(
            presets = names.presets.len(),
            contexts = names.contexts.len(),
            locations = names.locations.len(),
            "Loaded names from {}",
            path.display()
        );
        Ok(names)
    }

    /// Vocabularies used when no header is available: the catalog presets,
    /// and nothing but the placeholder for contexts and locations.
    pub fn from_catalog(catalog: &PresetCatalog) -> Self {
        let mut presets = vec![NOT_SET.to_string(), CUSTOM.to_string()];
        presets.extend(
            catalog
                .names()
                .filter(|name| *name != NOT_SET)
                .map(str::to_string),
        );

        Self {
            presets,
            contexts: vec![NOT_SET.to_string()],
            locations: vec![NOT_SET.to_string()],
        }
    }

    /// Load from `path`, falling back to [`HeaderNames::from_catalog`] with a
    /// warning when the file can't be read.
    pub fn load_or_fallback(path: impl AsRef<Path>, catalog: &PresetCatalog) -> Self {
        match Self::load(path) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("{}; using built-in preset names", e);
                Self::from_catalog(catalog)
            }
        }
    }
}
