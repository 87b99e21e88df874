// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading imported rule files.
//!
//! Local names resolve against the directory of the config file. Remote
//! names are fetched with `curl` and cached by the SHA-256 of the URL.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};

use sha2::{Digest, Sha256};

/// How long a downloaded import stays fresh.
pub const CACHE_EXPIRY: Duration = Duration::from_secs(3 * 60);

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unsupported URI scheme `{scheme}` in {name}")]
    UnsupportedScheme { name: String, scheme: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download {url}: {message}")]
    Download { url: String, message: String },

    #[error("failed to write cache {}: {source}", path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where an import name points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource<'a> {
    File(&'a str),
    Http(&'a str),
    Unsupported(&'a str),
}

impl<'a> ImportSource<'a> {
    pub fn parse(name: &'a str) -> Self {
        match scheme(name) {
            None => Self::File(name),
            Some(("file", rest)) => Self::File(rest.strip_prefix("//").unwrap_or(rest)),
            Some(("http" | "https", _)) => Self::Http(name),
            Some((scheme, _)) => Self::Unsupported(scheme),
        }
    }
}

/// Split `scheme:rest` when `name` starts with a URI scheme.
fn scheme(name: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = name.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        // Windows drive letters.
        && scheme.len() > 1;
    valid.then_some((scheme, rest))
}

#[derive(Debug, Clone)]
pub struct ImportLoader {
    cache_dir: PathBuf,
    config_dir: PathBuf,
    expires_in: Duration,
    force_download: bool,
}

impl ImportLoader {
    pub fn new(cache_dir: impl Into<PathBuf>, config_path: &Path, force_download: bool) -> Self {
        let config_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            cache_dir: cache_dir.into(),
            config_dir,
            expires_in: CACHE_EXPIRY,
            force_download,
        }
    }

    pub fn with_expiry(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Read the content behind an import name and hand it to `process`.
    ///
    /// A download is cached only after `process` succeeds.
    pub fn load<T, E>(&self, name: &str, process: impl FnOnce(&str) -> Result<T, E>) -> Result<T, E>
    where
        E: From<ImportError>,
    {
        match ImportSource::parse(name) {
            ImportSource::File(path) => {
                let content = self.load_file(path)?;
                process(&content)
            }
            ImportSource::Http(url) => self.load_http(url, process),
            ImportSource::Unsupported(scheme) => Err(ImportError::UnsupportedScheme {
                name: name.to_string(),
                scheme: scheme.to_string(),
            }
            .into()),
        }
    }

    fn load_file(&self, path: &str) -> Result<String, ImportError> {
        let path = self.config_dir.join(path);
        tracing::debug!("reading import {}", path.display());
        fs::read_to_string(&path).map_err(|source| ImportError::Read { path, source })
    }

    pub fn cache_path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(cache_name(url))
    }

    fn load_http<T, E>(&self, url: &str, process: impl FnOnce(&str) -> Result<T, E>) -> Result<T, E>
    where
        E: From<ImportError>,
    {
        let path = self.cache_path(url);
        tracing::info!("cache name for {url}: {}", path.display());

        if self.force_download {
            tracing::debug!("downloading {url}: forced");
        } else if !path.is_file() {
            tracing::debug!("downloading {url}: no cache found");
        } else if self.is_expired(&path) {
            tracing::debug!("downloading {url}: cache expired");
        } else {
            tracing::info!("reading {url} from cache");
            let content = fs::read_to_string(&path)
                .map_err(|source| ImportError::Read { path, source })?;
            return process(&content);
        }

        let content = download(url)?;
        let value = process(&content)?;
        self.write_cache(&path, &content)?;
        Ok(value)
    }

    fn is_expired(&self, path: &Path) -> bool {
        let modified = fs::metadata(path).and_then(|m| m.modified());
        match modified {
            Ok(modified) => SystemTime::now()
                .duration_since(modified)
                .map(|age| age > self.expires_in)
                .unwrap_or(false),
            Err(_) => true,
        }
    }

    fn write_cache(&self, path: &Path, content: &str) -> Result<(), ImportError> {
        let cache_error = |source| ImportError::Cache {
            path: path.to_path_buf(),
            source,
        };
        fs::create_dir_all(&self.cache_dir).map_err(cache_error)?;
        fs::write(path, content).map_err(cache_error)
    }
}

/// Hex SHA-256 of the URL.
pub fn cache_name(url: &str) -> String {
    Sha256::digest(url.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn download(url: &str) -> Result<String, ImportError> {
    tracing::info!("downloading {url}");
    let output = Command::new("curl")
        .args(["-fsSL", url])
        .output()
        .map_err(|e| ImportError::Download {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ImportError::Download {
            url: url.to_string(),
            message: stderr.trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| ImportError::Download {
        url: url.to_string(),
        message: "response is not valid UTF-8".to_string(),
    })
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
