// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! `goodcheck.yml` is deserialized into DTOs (`dto`), then converted into
//! rules (`loader`). Imports are read through `import`.

pub mod dto;
pub mod import;
pub mod loader;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

pub use import::{ImportError, ImportLoader};
pub use loader::{ConfigLoader, SUPPORTED_ENCODINGS};

use crate::pattern::PatternError;
use crate::rule::{Rule, Trigger, TriggerError};

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "goodcheck.yml";

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "GOODCHECK_HOME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}: invalid configuration: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("rule `{id}`: {source}")]
    Rule {
        id: String,
        #[source]
        source: RuleError,
    },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("invalid exclude pattern `{pattern}`: {source}")]
    Exclude {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Why a single rule failed to load.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Trigger(#[from] TriggerError),

    #[error("invalid glob `{pattern}`: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("unsupported encoding `{0}`, files are read as UTF-8")]
    Encoding(String),

    #[error("{0}")]
    Schema(String),
}

/// Loaded rules plus traversal exclusions.
#[derive(Debug, Clone)]
pub struct Config {
    rules: Vec<Arc<Rule>>,
    exclude: Vec<String>,
    exclude_set: GlobSet,
}

impl Config {
    pub fn new(rules: Vec<Arc<Rule>>, exclude: Vec<String>) -> Result<Self, ConfigError> {
        let exclude_set = build_exclude_set(&exclude)?;
        Ok(Self {
            rules,
            exclude,
            exclude_set,
        })
    }

    pub fn rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    pub fn exclude_paths(&self) -> &[String] {
        &self.exclude
    }

    pub fn exclude_set(&self) -> &GlobSet {
        &self.exclude_set
    }

    /// Whether `path` (or a directory containing it) is excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_set.is_match(path)
    }

    /// Rules and triggers applying to `path`.
    ///
    /// An empty `filter` selects every rule; otherwise a rule is selected when
    /// its id equals a filter entry or starts with the entry plus `.`.
    pub fn rules_for_path<'a>(
        &'a self,
        path: &'a Path,
        filter: &'a [String],
    ) -> impl Iterator<Item = (&'a Arc<Rule>, &'a Trigger)> + 'a {
        self.rules
            .iter()
            .filter(move |rule| filter.is_empty() || filter.iter().any(|f| rule.matches_filter(f)))
            .flat_map(move |rule| {
                rule.triggers()
                    .iter()
                    .filter(move |trigger| trigger.fires_for(path))
                    .map(move |trigger| (rule, trigger))
            })
    }
}

/// Exclusion patterns match the path itself and anything below it.
fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let base = pattern.strip_prefix("./").unwrap_or(pattern);
        let base = base.trim_end_matches('/');
        for candidate in [base.to_string(), format!("{base}/**")] {
            let glob = GlobBuilder::new(&candidate)
                .literal_separator(true)
                .build()
                .map_err(|source| ConfigError::Exclude {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }
    }
    builder.build().map_err(|source| ConfigError::Exclude {
        pattern: patterns.join(", "),
        source,
    })
}

/// `$GOODCHECK_HOME`, or `~/.goodcheck`.
pub fn home_dir() -> Option<PathBuf> {
    match std::env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir().map(|home| home.join(".goodcheck")),
    }
}

/// Directory for downloaded imports.
pub fn cache_dir(home: &Path) -> PathBuf {
    home.join("cache")
}

/// Read and load the config file at `path`.
pub fn load_file(path: &Path, home: &Path, force_download: bool) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let import_loader = ImportLoader::new(cache_dir(home), path, force_download);
    ConfigLoader::new(path, import_loader).load(&content)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
