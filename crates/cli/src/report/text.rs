// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use termcolor::WriteColor;

use crate::color::scheme;
use crate::issue::Issue;

use super::{Reporter, first_line};

/// One line per issue: `path:line:<source line>:\t<message>`.
pub struct TextReporter<W> {
    out: W,
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl<W: WriteColor> Reporter for TextReporter<W> {
    fn issue(&mut self, issue: &Issue) -> anyhow::Result<()> {
        let path = issue.path().display();
        let message = first_line(issue.rule().message());
        let buffer = issue.buffer();

        let Some(location) = issue.location() else {
            let line = chomp(buffer.line(1).unwrap_or(""));
            writeln!(self.out, "{path}:-:{line}:\t{message}")?;
            return Ok(());
        };

        let line = chomp(buffer.line(location.start_line).unwrap_or(""));
        let end = if location.start_line == location.end_line {
            location.end_column.min(line.len())
        } else {
            line.len()
        };
        let start = location.start_column.min(end);

        write!(self.out, "{path}:{}:", location.start_line)?;
        self.out.write_all(line.get(..start).unwrap_or("").as_bytes())?;
        self.out.set_color(&scheme::matched())?;
        self.out.write_all(line.get(start..end).unwrap_or("").as_bytes())?;
        self.out.reset()?;
        self.out.write_all(line.get(end..).unwrap_or("").as_bytes())?;
        writeln!(self.out, ":\t{message}")?;
        Ok(())
    }

    fn analysis_finished(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
