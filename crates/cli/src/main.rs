// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;
mod cmd_init;
mod cmd_pattern;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use goodcheck::cli::{Cli, Command, ConfigArgs};
use goodcheck::config::{self, Config};
use goodcheck::error::ExitCode;

/// Env var overriding the log filter.
const LOG_ENV: &str = "GOODCHECK_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.command.log_level());

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::Error.into()
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("goodcheck={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let home = config::home_dir().unwrap_or_else(|| PathBuf::from(".goodcheck"));
    tracing::info!("home path = {}", home.display());

    match &cli.command {
        Command::Check(args) => cmd_check::run(args, &home),
        Command::Test(args) => cmd_test::run(args, &home),
        Command::Pattern(args) => cmd_pattern::run(args, &home),
        Command::Init(args) => cmd_init::run(args),
        Command::Version => {
            println!("goodcheck {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::Success)
        }
    }
}

/// Load the configuration named by the command's options.
pub(crate) fn load_config(args: &ConfigArgs, home: &Path) -> anyhow::Result<Config> {
    tracing::info!("configuration = {}", args.config.display());
    tracing::info!("force download = {}", args.force);
    let config = config::load_file(&args.config, home, args.force)?;
    Ok(config)
}
