// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `goodcheck test`.

use crate::prelude::*;

#[test]
fn examples_pass() {
    let project = Project::with_config(
        r#"
rules:
  - id: com.example.1
    pattern: Github
    message: Do you want to write GitHub?
    pass: Signup via GitHub
    fail: Signup via Github
"#,
    );

    project
        .cmd()
        .arg("test")
        .assert()
        .success()
        .stdout(predicates::str::contains("Validating rule id uniqueness..."))
        .stdout(predicates::str::contains("Testing rule com.example.1..."))
        .stdout(predicates::str::contains("OK!"));
}

#[test]
fn failing_examples_exit_one() {
    let project = Project::with_config(
        r#"
rules:
  - id: com.example.1
    pattern: Github
    message: Do you want to write GitHub?
    pass: [GitHub, Github]
    fail: [Github, github]
"#,
    );

    project
        .cmd()
        .arg("test")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("2nd pass example matched."))
        .stdout(predicates::str::contains("2nd fail example didn't match."));
}

#[test]
fn duplicated_ids_exit_one() {
    let project = Project::with_config(
        r#"
rules:
  - id: dup
    pattern: a
    message: m
  - id: dup
    pattern: b
    message: m
"#,
    );

    project
        .cmd()
        .arg("test")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Found 1 duplications."));
}

#[test]
fn deprecated_options_warn_once() {
    let project = Project::with_config(
        r#"
rules:
  - id: a
    message: m
    pattern:
      - literal: foo
        case_insensitive: true
      - literal: bar
        case_insensitive: true
"#,
    );

    let output = project.cmd().arg("test").output().unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.matches("`case_insensitive` option is deprecated").count(),
        1,
        "{stderr}"
    );
}
