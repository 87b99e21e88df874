// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `goodcheck check` command implementation.
//!
//! Walks the targets, reads each file once, and runs every selected
//! (rule, trigger) pair over it. Duplicate issues within a file are
//! reported once.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use goodcheck::analyzer::Analyzer;
use goodcheck::buffer::Buffer;
use goodcheck::cli::CheckArgs;
use goodcheck::config::Config;
use goodcheck::error::ExitCode;
use goodcheck::file_reader;
use goodcheck::report::{self, Reporter};
use goodcheck::walker::{FileWalker, WalkerConfig};

/// Run the `goodcheck check` command.
pub fn run(args: &CheckArgs, home: &Path) -> anyhow::Result<ExitCode> {
    tracing::info!("rules = [{}]", args.rules.join(", "));
    tracing::info!("format = {:?}", args.format);
    tracing::info!(
        "targets = [{}]",
        args.targets
            .iter()
            .map(|t| t.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let config = crate::load_config(&args.config, home)?;
    for target in &args.targets {
        if std::fs::symlink_metadata(target).is_err() {
            anyhow::bail!("No such file or directory - {}", target.display());
        }
    }

    let mut reporter = report::stdout_reporter(args.format, args.color.choice());
    let issues = check(&config, args, reporter.as_mut())?;

    tracing::info!("{issues} issue(s) found");
    Ok(if issues > 0 {
        ExitCode::IssuesFound
    } else {
        ExitCode::Success
    })
}

/// Scan every target file and return the number of issues reported.
fn check(config: &Config, args: &CheckArgs, reporter: &mut dyn Reporter) -> anyhow::Result<usize> {
    let walker = FileWalker::new(WalkerConfig {
        config_file: Some(args.config.config.clone()),
        exclude: config.exclude_set().clone(),
        ..Default::default()
    });
    let (files, stats) = walker.walk_targets(&args.targets);
    tracing::debug!(
        "found {} file(s), skipped {} symlink(s), {} error(s)",
        stats.files_found,
        stats.symlinks_skipped,
        stats.errors
    );

    let mut count = 0;
    reporter.analysis_started()?;
    for file in &files {
        reporter.file(&file.path)?;
        count += check_file(config, &file.path, &args.rules, reporter)?;
    }
    reporter.analysis_finished()?;
    Ok(count)
}

fn check_file(
    config: &Config,
    path: &Path,
    filter: &[String],
    reporter: &mut dyn Reporter,
) -> anyhow::Result<usize> {
    let mut buffer: Option<Arc<Buffer>> = None;
    let mut seen = HashSet::new();
    let mut count = 0;

    for (rule, trigger) in config.rules_for_path(path, filter) {
        if buffer.is_none() {
            match file_reader::read_to_string(path) {
                Ok(content) => buffer = Some(Arc::new(Buffer::new(path, content))),
                Err(err) => {
                    reporter.error(path, &err)?;
                    return Ok(count);
                }
            }
        }
        let Some(buffer) = &buffer else {
            break;
        };

        reporter.rule(rule)?;
        for issue in Analyzer::new(rule, trigger, buffer).scan() {
            if seen.insert(issue.key()) {
                count += 1;
                reporter.issue(&issue)?;
            }
        }
    }
    Ok(count)
}
