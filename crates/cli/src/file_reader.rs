// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File reading with a size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for linting
#![allow(unsafe_code)]
//!
//! Files below [`MMAP_THRESHOLD`] are read into memory, larger ones are
//! memory-mapped. Content must be valid UTF-8 either way.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at least this large are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid byte sequence in UTF-8")]
    InvalidUtf8,
}

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(String),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> Result<Self, ReadError> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            let bytes = fs::read(path)?;
            let content = String::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8)?;
            Ok(FileContent::Owned(content))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and stale data on concurrent modification is acceptable for linting.
            let mmap = unsafe { Mmap::map(&file)? };
            mapped_str(&mmap)?;
            Ok(FileContent::Mapped(mmap))
        }
    }

    pub fn as_str(&self) -> Result<&str, ReadError> {
        match self {
            FileContent::Owned(s) => Ok(s),
            FileContent::Mapped(m) => mapped_str(m),
        }
    }

    pub fn into_string(self) -> Result<String, ReadError> {
        match self {
            FileContent::Owned(s) => Ok(s),
            FileContent::Mapped(m) => Ok(mapped_str(&m)?.to_string()),
        }
    }
}

fn mapped_str(mmap: &Mmap) -> Result<&str, ReadError> {
    std::str::from_utf8(mmap).map_err(|_| ReadError::InvalidUtf8)
}

/// Read `path` as UTF-8 text.
pub fn read_to_string(path: &Path) -> Result<String, ReadError> {
    FileContent::read(path)?.into_string()
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
