// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory file content with byte position mapping.
//!
//! All positions are byte offsets into the UTF-8 content. Lines are 1-based,
//! columns are 0-based byte offsets from the start of the line.
//!
//! Line ranges come from splitting on `\n` without dropping trailing empty
//! segments: `"a\n"` has two lines, `0..1` and `2..2`. A position equal to a
//! line's end (the terminator itself, or end of content) belongs to that line,
//! so `"Lorem\nipsum"` maps position 5 to `(1, 5)` and position 6 to `(2, 0)`.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File content plus its path, with a lazily built line index.
#[derive(Debug)]
pub struct Buffer {
    path: PathBuf,
    content: String,
    line_ranges: OnceLock<Vec<Range<usize>>>,
}

impl Buffer {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            line_ranges: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Byte ranges of each line, excluding the `\n` terminator.
    ///
    /// Ranges are contiguous (each starts one byte after the previous end) and
    /// the last range always ends at `content.len()`.
    pub fn line_ranges(&self) -> &[Range<usize>] {
        self.line_ranges.get_or_init(|| {
            let bytes = self.content.as_bytes();
            let mut ranges = Vec::new();
            let mut start = 0;
            for newline in memchr::memchr_iter(b'\n', bytes) {
                ranges.push(start..newline);
                start = newline + 1;
            }
            ranges.push(start..bytes.len());
            ranges
        })
    }

    /// Convert a byte position to `(line, column)`.
    ///
    /// Returns `None` when `position` is past the end of the content.
    pub fn location_for_position(&self, position: usize) -> Option<(usize, usize)> {
        let ranges = self.line_ranges();
        let index = ranges.partition_point(|range| range.end < position);
        let range = ranges.get(index)?;
        Some((index + 1, position - range.start))
    }

    /// Convert `(line, column)` back to a byte position.
    ///
    /// Returns `None` for line 0, lines past the end, or columns past the
    /// line's end.
    pub fn position_for_location(&self, line: usize, column: usize) -> Option<usize> {
        let range = self.line_ranges().get(line.checked_sub(1)?)?;
        let position = range.start + column;
        (position <= range.end).then_some(position)
    }

    /// The nth (1-based) line including its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        let range = self.line_ranges().get(line.checked_sub(1)?)?;
        let end = if range.end < self.content.len() {
            range.end + 1
        } else {
            range.end
        };
        self.content.get(range.start..end)
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
