// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration loading.

use crate::prelude::*;

#[test]
fn custom_config_path() {
    let project = Project::empty();
    project.file(
        "config/lint.yml",
        "rules:\n  - id: todo\n    pattern: TODO\n    message: Resolve TODO\n",
    );
    project.file("a.txt", "TODO\n");

    project
        .cmd()
        .args(["check", "-c", "config/lint.yml", "a.txt"])
        .assert()
        .code(2)
        .stdout("a.txt:1:TODO:\tResolve TODO\n");
}

#[test]
fn local_import() {
    let project = Project::with_config("rules: []\nimport:\n  - shared/rules.yml\n");
    project.file(
        "shared/rules.yml",
        "- id: imported\n  pattern: FIXME\n  message: Imported rule\n",
    );
    project.file("a.txt", "FIXME\n");

    project
        .cmd()
        .args(["check", "a.txt"])
        .assert()
        .code(2)
        .stdout("a.txt:1:FIXME:\tImported rule\n");
}

#[test]
fn missing_import_exits_one() {
    let project = Project::with_config("rules: []\nimport: missing.yml\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("missing.yml"));
}

#[test]
fn unsupported_import_scheme_exits_one() {
    let project = Project::with_config("rules: []\nimport: ftp://example.com/rules.yml\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("ftp"));
}

#[test]
fn unsupported_encoding_exits_one() {
    let project = Project::with_config(
        r#"
rules:
  - id: sjis
    pattern: foo
    message: m
    glob:
      pattern: "*.txt"
      encoding: Shift_JIS
"#,
    );

    project
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("sjis"))
        .stderr(predicates::str::contains("Shift_JIS"));
}

#[test]
fn yaml_syntax_error_exits_one() {
    let project = Project::with_config("rules: [\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid configuration"));
}

#[test]
fn debug_flag_logs_to_stderr() {
    let project = Project::with_config("rules: []\n");

    project
        .cmd()
        .args(["check", "-d"])
        .assert()
        .code(0)
        .stderr(predicates::str::contains("loading configuration"));
}
