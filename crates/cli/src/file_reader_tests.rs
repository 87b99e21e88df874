// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use tempfile::TempDir;

#[test]
fn small_file_is_owned() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("small.txt");
    fs::write(&path, "hello\n").unwrap();

    let content = FileContent::read(&path).unwrap();
    assert!(matches!(content, FileContent::Owned(_)));
    assert_eq!(content.as_str().unwrap(), "hello\n");
}

#[test]
fn large_file_is_mapped() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("large.txt");
    let text = "a".repeat(MMAP_THRESHOLD as usize + 1);
    fs::write(&path, &text).unwrap();

    let content = FileContent::read(&path).unwrap();
    assert!(matches!(content, FileContent::Mapped(_)));
    assert_eq!(content.as_str().unwrap().len(), text.len());
    assert_eq!(content.into_string().unwrap(), text);
}

#[test]
fn invalid_utf8_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\n").unwrap();

    let err = read_to_string(&path).unwrap_err();
    assert!(matches!(err, ReadError::InvalidUtf8));
    assert_eq!(err.to_string(), "invalid byte sequence in UTF-8");
}

#[test]
fn invalid_utf8_in_large_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("large.bin");
    let mut bytes = vec![b'a'; MMAP_THRESHOLD as usize];
    bytes.push(0xff);
    fs::write(&path, bytes).unwrap();

    assert!(matches!(FileContent::read(&path), Err(ReadError::InvalidUtf8)));
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_to_string(&tmp.path().join("missing")).unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}
