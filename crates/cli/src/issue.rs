// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reported matches.

use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::buffer::Buffer;
use crate::rule::Rule;

/// Span of an issue. Lines are 1-based, columns 0-based, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// One match of a rule in a buffer, or a file-level flag when `range` is
/// `None`.
#[derive(Debug, Clone)]
pub struct Issue {
    buffer: Arc<Buffer>,
    range: Option<Range<usize>>,
    rule: Arc<Rule>,
    text: Option<String>,
    captures: BTreeMap<String, String>,
}

impl Issue {
    pub fn new(
        buffer: Arc<Buffer>,
        range: Option<Range<usize>>,
        rule: Arc<Rule>,
        text: Option<String>,
    ) -> Self {
        Self {
            buffer,
            range,
            rule,
            text,
            captures: BTreeMap::new(),
        }
    }

    /// Issue covering the whole file.
    pub fn file_level(buffer: Arc<Buffer>, rule: Arc<Rule>) -> Self {
        Self::new(buffer, None, rule, None)
    }

    pub fn with_captures(mut self, captures: BTreeMap<String, String>) -> Self {
        self.captures = captures;
        self
    }

    pub fn buffer(&self) -> &Arc<Buffer> {
        &self.buffer
    }

    pub fn path(&self) -> &Path {
        self.buffer.path()
    }

    pub fn range(&self) -> Option<&Range<usize>> {
        self.range.as_ref()
    }

    pub fn rule(&self) -> &Arc<Rule> {
        &self.rule
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Captured text of each token variable.
    pub fn captures(&self) -> &BTreeMap<String, String> {
        &self.captures
    }

    pub fn location(&self) -> Option<Location> {
        let range = self.range.as_ref()?;
        let (start_line, start_column) = self.buffer.location_for_position(range.start)?;
        let (end_line, end_column) = self.buffer.location_for_position(range.end)?;
        Some(Location {
            start_line,
            start_column,
            end_line,
            end_column,
        })
    }

    /// Identity used to suppress duplicate reports within one file.
    pub fn key(&self) -> (Option<Range<usize>>, String, Option<String>) {
        (
            self.range.clone(),
            self.rule.id().to_string(),
            self.text.clone(),
        )
    }
}
