// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde::Serialize;

use crate::issue::{Issue, Location};

use super::Reporter;

#[derive(Debug, Serialize)]
struct JsonIssue {
    rule_id: String,
    path: String,
    location: Option<Location>,
    message: String,
    justifications: Vec<String>,
}

/// Collects issues and prints them as one JSON array when the analysis
/// finishes.
pub struct JsonReporter<W> {
    out: W,
    issues: Vec<JsonIssue>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            issues: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn issue(&mut self, issue: &Issue) -> anyhow::Result<()> {
        let rule = issue.rule();
        self.issues.push(JsonIssue {
            rule_id: rule.id().to_string(),
            path: issue.path().display().to_string(),
            location: issue.location(),
            message: rule.message().to_string(),
            justifications: rule.justifications().to_vec(),
        });
        Ok(())
    }

    fn analysis_finished(&mut self) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, &self.issues)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
