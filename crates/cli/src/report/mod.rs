// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue reporting for `check`.
//!
//! A [`Reporter`] receives the progress of an analysis as hooks and renders
//! issues as text lines or a JSON array.

mod json;
mod text;

use std::path::Path;

use termcolor::{ColorChoice, StandardStream};

use crate::issue::Issue;
use crate::rule::Rule;

pub use json::JsonReporter;
pub use text::TextReporter;

/// `--format` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Hooks called while `check` runs.
pub trait Reporter {
    fn analysis_started(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called once after every file was scanned.
    fn analysis_finished(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn file(&mut self, path: &Path) -> anyhow::Result<()> {
        tracing::debug!("Checking {}...", path.display());
        Ok(())
    }

    fn rule(&mut self, rule: &Rule) -> anyhow::Result<()> {
        tracing::debug!("Checking rule {}...", rule.id());
        Ok(())
    }

    fn issue(&mut self, issue: &Issue) -> anyhow::Result<()>;

    /// A file that could not be read or decoded.
    fn error(&mut self, path: &Path, error: &dyn std::error::Error) -> anyhow::Result<()> {
        tracing::warn!("{}: {error}", path.display());
        eprintln!("{}: {error}", path.display());
        Ok(())
    }
}

/// Reporter writing to stdout in `format`.
pub fn stdout_reporter(format: ReportFormat, color: ColorChoice) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new(StandardStream::stdout(color))),
        ReportFormat::Json => Box::new(JsonReporter::new(std::io::stdout())),
    }
}

/// The message up to its first line break.
pub(crate) fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
