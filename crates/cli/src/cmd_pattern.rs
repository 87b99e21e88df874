// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `goodcheck pattern` command implementation.

use std::io::Write;
use std::path::Path;

use goodcheck::cli::PatternArgs;
use goodcheck::config::Config;
use goodcheck::error::ExitCode;

/// Run the `goodcheck pattern` command.
pub fn run(args: &PatternArgs, home: &Path) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(&args.config, home)?;
    let stdout = std::io::stdout();
    print_patterns(&config, &args.ids, &mut stdout.lock())?;
    Ok(ExitCode::Success)
}

/// Print each selected rule id and the regex of every pattern.
fn print_patterns(config: &Config, ids: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    for rule in config.rules() {
        if !ids.is_empty() && !ids.iter().any(|id| rule.matches_filter(id)) {
            continue;
        }
        writeln!(out, "{}:", rule.id())?;
        for trigger in rule.triggers() {
            for pattern in trigger.patterns() {
                writeln!(out, "  - {}", pattern.regex().as_str())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cmd_pattern_tests.rs"]
mod tests;
