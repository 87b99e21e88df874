// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File discovery for `check` targets.
//!
//! Directories are walked with the `ignore` crate with its ignore-file
//! filters turned off. Hidden entries, symlinks, the config file and
//! excluded paths are skipped below a target; a target given as a file is
//! always yielded.

use std::fs;
use std::path::{Component, Path, PathBuf};

use globset::GlobSet;
use ignore::{DirEntry, WalkBuilder};

/// Walker settings.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Config file to leave out of directory walks.
    pub config_file: Option<PathBuf>,
    /// Paths excluded from directory walks.
    pub exclude: GlobSet,
    /// Skip entries whose name starts with `.`.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            exclude: GlobSet::empty(),
            hidden: true,
        }
    }
}

/// A file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path as reported to the user, without a leading `./`.
    pub path: PathBuf,
    pub size: u64,
    /// 0 for a target given as a file.
    pub depth: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub symlinks_skipped: usize,
    pub errors: usize,
}

pub struct FileWalker {
    config: WalkerConfig,
    /// Canonical config file path, resolved once.
    config_file: Option<PathBuf>,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let config_file = config
            .config_file
            .as_ref()
            .and_then(|path| fs::canonicalize(path).ok());
        Self {
            config,
            config_file,
        }
    }

    /// Walk every target in order and collect the files found.
    pub fn walk_targets(&self, targets: &[PathBuf]) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for target in targets {
            self.walk_into(target, &mut files, &mut stats);
        }
        (files, stats)
    }

    /// Walk a single target.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        self.walk_into(root, &mut files, &mut stats);
        (files, stats)
    }

    fn walk_into(&self, root: &Path, files: &mut Vec<WalkedFile>, stats: &mut WalkStats) {
        if root.is_file() {
            let size = fs::metadata(root).map(|m| m.len()).unwrap_or(0);
            stats.files_found += 1;
            files.push(WalkedFile {
                path: normalize(root).to_path_buf(),
                size,
                depth: 0,
            });
            return;
        }

        tracing::debug!("walking {}", root.display());
        let exclude = self.config.exclude.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(self.config.hidden)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0 || !exclude.is_match(normalize(entry.path()))
            });

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("walk error: {err}");
                    stats.errors += 1;
                    continue;
                }
            };

            if entry.path_is_symlink() {
                tracing::debug!("skipping symlink {}", entry.path().display());
                stats.symlinks_skipped += 1;
                continue;
            }
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if entry.depth() > 0 && self.is_config_file(&entry) {
                tracing::debug!("skipping config file {}", entry.path().display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            stats.files_found += 1;
            files.push(WalkedFile {
                path: normalize(entry.path()).to_path_buf(),
                size,
                depth: entry.depth(),
            });
        }
    }

    fn is_config_file(&self, entry: &DirEntry) -> bool {
        let Some(config_file) = &self.config_file else {
            return false;
        };
        if entry.file_name() != config_file.file_name().unwrap_or_default() {
            return false;
        }
        fs::canonicalize(entry.path()).is_ok_and(|path| path == *config_file)
    }
}

/// Strip leading `./` components so paths read like `app/models/user.rb`.
pub fn normalize(path: &Path) -> &Path {
    let mut components = path.components();
    loop {
        let rest = components.as_path();
        match components.next() {
            Some(Component::CurDir) => {}
            _ => return if rest.as_os_str().is_empty() { path } else { rest },
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
