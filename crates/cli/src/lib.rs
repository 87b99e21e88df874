// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Goodcheck: a regexp based customizable linter.
//!
//! Rules from `goodcheck.yml` are compiled into [`pattern::Pattern`]s grouped
//! in [`rule::Trigger`]s, and each file is scanned by the [`analyzer::Analyzer`]
//! into [`issue::Issue`]s for a [`report::Reporter`].

pub mod analyzer;
pub mod buffer;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod file_reader;
pub mod glob;
pub mod issue;
pub mod pattern;
pub mod report;
pub mod rule;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
