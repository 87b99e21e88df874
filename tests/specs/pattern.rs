// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `goodcheck pattern`.

use crate::prelude::*;

const CONFIG: &str = r#"
rules:
  - id: foo
    message: m
    pattern: Github
  - id: bar
    message: m
    pattern:
      regexp: "a+"
"#;

#[test]
fn prints_all_rules() {
    let project = Project::with_config(CONFIG);

    project
        .cmd()
        .arg("pattern")
        .assert()
        .success()
        .stdout("foo:\n  - (?:Github)\nbar:\n  - (?m:a+)\n");
}

#[test]
fn prints_selected_rules() {
    let project = Project::with_config(CONFIG);

    project
        .cmd()
        .args(["pattern", "bar"])
        .assert()
        .success()
        .stdout("bar:\n  - (?m:a+)\n");
}
