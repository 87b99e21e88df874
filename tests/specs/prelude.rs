// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command running the goodcheck binary in `dir`, with the home
/// directory inside the project and colors disabled.
pub fn goodcheck_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("goodcheck"));
    cmd.current_dir(dir)
        .env("GOODCHECK_HOME", dir.join(".goodcheck-home"))
        .env("NO_COLOR", "1")
        .env_remove("GOODCHECK_LOG");
    cmd
}

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with a `goodcheck.yml`.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("goodcheck.yml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn cmd(&self) -> Command {
        goodcheck_cmd(self.path())
    }
}
