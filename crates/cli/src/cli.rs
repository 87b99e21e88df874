// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::report::ReportFormat;

/// A regexp based customizable linter
#[derive(Parser)]
#[command(name = "goodcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run check with a configuration
    Check(CheckArgs),
    /// Test your configuration
    Test(TestArgs),
    /// Print regexps generated from the patterns
    Pattern(PatternArgs),
    /// Generate a sample configuration file
    Init(InitArgs),
    /// Print version
    Version,
}

/// Options shared by commands that load the configuration.
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show info-level logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Show debug-level logs
    #[arg(short, long)]
    pub debug: bool,

    /// Download imported rules even when cached
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Check only these rules (and rules whose id starts with `RULE.`)
    #[arg(short = 'R', long = "rule", value_name = "RULE")]
    pub rules: Vec<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Files or directories to check
    #[arg(value_name = "PATH", default_value = ".")]
    pub targets: Vec<PathBuf>,
}

#[derive(Args)]
pub struct TestArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,
}

#[derive(Args)]
pub struct PatternArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Rule ids to print (all rules when omitted)
    #[arg(value_name = "RULE_ID")]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Configuration file to write
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

impl Command {
    /// Log level requested by `-v`/`-d`.
    pub fn log_level(&self) -> &'static str {
        let config = match self {
            Command::Check(args) => &args.config,
            Command::Test(args) => &args.config,
            Command::Pattern(args) => &args.config,
            Command::Init(_) | Command::Version => return "error",
        };
        if config.debug {
            "debug"
        } else if config.verbose {
            "info"
        } else {
            "error"
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
