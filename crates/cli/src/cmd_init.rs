// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `goodcheck init` command implementation.

use goodcheck::cli::InitArgs;
use goodcheck::error::ExitCode;

/// Sample configuration written by `init`.
pub const SAMPLE_CONFIG: &str = r#"rules:
  # id, pattern, message are required attributes.
  - id: com.example.github
    pattern: Github
    message: |
      GitHub is GitHub, not Github

      You may misspelling the name of the service!
    justification:
      - When you mean a service different from GitHub
      - When GitHub is renamed
    glob:
      - "**/*.rb"
      - "**/*.{yaml,yml}"
      - "public/**/*.html"
    fail:
      - Signup via Github
    pass:
      - Signup via GitHub

  - id: com.example.no-trailing-whitespace
    pattern:
      regexp: '[ \t]+$'
    message: Remove trailing whitespace
    fail:
      - "foo  "
    pass:
      - foo

  - id: com.example.margin
    pattern:
      token: "margin: ${size:int}px;"
      where:
        size:
          not: [0, 8, 16]
    message: Use the spacing scale for margins
    glob: "**/*.css"
    fail:
      - "margin: 10px;"
    pass:
      - "margin: 16px;"

exclude:
  - node_modules
  - vendor
"#;

/// Run the `goodcheck init` command.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = &args.config;
    if path.is_file() && !args.force {
        eprintln!(
            "{} already exists. Try --force option to overwrite the file.",
            path.display()
        );
        return Ok(ExitCode::Error);
    }

    std::fs::write(path, SAMPLE_CONFIG)?;
    println!("Wrote {}. ✍️", path.display());
    Ok(ExitCode::Success)
}
