// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color selection and the color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the environment. Only `auto` consults `NO_COLOR` and
    /// whether stdout is a terminal.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                resolve_color(std::io::stdout().is_terminal(), no_color)
            }
        }
    }
}

/// `no_color` wins over `force_color`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if force_color && !no_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Matched text in a reported line.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }

    /// A failed rule test or duplicated id.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
