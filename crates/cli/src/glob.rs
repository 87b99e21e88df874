// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path globs attached to triggers.

use std::fmt;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

/// A path glob plus the declared encoding of matching files.
///
/// `*` does not cross `/`; `**/` matches any number of directories and
/// `{a,b}` alternation is supported.
#[derive(Clone)]
pub struct Glob {
    pattern: String,
    encoding: Option<String>,
    matcher: GlobMatcher,
}

impl Glob {
    pub fn new(pattern: impl Into<String>, encoding: Option<String>) -> Result<Self, globset::Error> {
        let pattern = pattern.into();
        let matcher = GlobBuilder::new(&pattern)
            .literal_separator(true)
            .build()?
            .compile_matcher();
        Ok(Self {
            pattern,
            encoding,
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.encoding == other.encoding
    }
}

impl Eq for Glob {}

impl fmt::Debug for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glob")
            .field("pattern", &self.pattern)
            .field("encoding", &self.encoding)
            .finish()
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
