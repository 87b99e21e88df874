// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use crate::buffer::Buffer;
use crate::config::{Config, ConfigLoader, ImportLoader};

/// Creates a temp directory with a `goodcheck.yml` holding `config`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("goodcheck.yml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Loads a config from YAML without touching the filesystem.
pub fn load_config(yaml: &str) -> Config {
    let path = Path::new("goodcheck.yml");
    let import_loader = ImportLoader::new(std::env::temp_dir().join("goodcheck-test-cache"), path, false);
    ConfigLoader::new(path, import_loader).load(yaml).unwrap()
}

pub fn buffer(path: &str, content: &str) -> Arc<Buffer> {
    Arc::new(Buffer::new(path, content))
}
