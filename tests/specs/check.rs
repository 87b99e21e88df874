// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `goodcheck check`.

use crate::prelude::*;

const GITHUB_RULE: &str = r#"
rules:
  - id: com.example.github
    pattern: Github
    message: |
      Do you want to write GitHub?
      Second line is not printed.
    glob: "**/*.md"
"#;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn no_issues_exits_zero() {
    let project = Project::with_config(GITHUB_RULE);
    project.file("README.md", "Hosted on GitHub\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(0)
        .stdout("");
}

#[test]
fn issues_exit_two() {
    let project = Project::with_config(GITHUB_RULE);
    project.file("README.md", "# Title\nHosted on Github\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout("README.md:2:Hosted on Github:\tDo you want to write GitHub?\n");
}

#[test]
fn missing_config_exits_one() {
    let project = Project::empty();

    project
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("goodcheck.yml"));
}

#[test]
fn invalid_rule_exits_one_naming_rule() {
    let project = Project::with_config(
        "rules:\n  - id: broken.rule\n    message: m\n    pattern:\n      regexp: '('\n",
    );

    project
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("broken.rule"));
}

#[test]
fn missing_target_exits_one() {
    let project = Project::with_config(GITHUB_RULE);

    project
        .cmd()
        .args(["check", "nope"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("nope"));
}

// =============================================================================
// Targets and Traversal
// =============================================================================

#[test]
fn glob_selects_files() {
    let project = Project::with_config(GITHUB_RULE);
    project.file("docs/guide.md", "Github\n");
    project.file("app/main.rb", "Github\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicates::str::contains("docs/guide.md:1:"))
        .stdout(predicates::str::contains("main.rb").not());
}

#[test]
fn explicit_targets_only() {
    let project = Project::with_config(GITHUB_RULE);
    project.file("a/x.md", "Github\n");
    project.file("b/y.md", "Github\n");

    project
        .cmd()
        .args(["check", "b"])
        .assert()
        .code(2)
        .stdout("b/y.md:1:Github:\tDo you want to write GitHub?\n");
}

#[test]
fn hidden_and_excluded_paths_are_skipped() {
    let project = Project::with_config(
        r#"
rules:
  - id: todo
    pattern: TODO
    message: Resolve TODO
exclude:
  - vendor
"#,
    );
    project.file(".hidden/a.txt", "TODO\n");
    project.file("vendor/lib.txt", "TODO\n");
    project.file("app.txt", "TODO\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout("app.txt:1:TODO:\tResolve TODO\n");
}

#[test]
fn explicit_hidden_file_is_checked() {
    let project = Project::with_config("rules:\n  - id: todo\n    pattern: TODO\n    message: Resolve TODO\n");
    project.file(".env", "TODO\n");

    project
        .cmd()
        .args(["check", ".env"])
        .assert()
        .code(2)
        .stdout(".env:1:TODO:\tResolve TODO\n");
}

#[test]
fn config_file_is_not_checked() {
    let project = Project::with_config("rules:\n  - id: todo\n    pattern: TODO\n    message: Resolve TODO\n");

    project.cmd().arg("check").assert().code(0);
}

#[test]
fn invalid_utf8_file_is_reported_and_skipped() {
    let project = Project::with_config("rules:\n  - id: todo\n    pattern: TODO\n    message: Resolve TODO\n");
    std::fs::write(project.path().join("latin1.txt"), b"caf\xe9 TODO\n").unwrap();
    project.file("ok.txt", "TODO\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout("ok.txt:1:TODO:\tResolve TODO\n")
        .stderr(predicates::str::contains("invalid byte sequence in UTF-8"));
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn rule_filter_selects_rules() {
    let project = Project::with_config(
        r#"
rules:
  - id: a
    pattern: foo
    message: A
  - id: a.child
    pattern: bar
    message: A child
  - id: b
    pattern: baz
    message: B
"#,
    );
    project.file("x.txt", "foo bar baz\n");

    project
        .cmd()
        .args(["check", "-R", "a"])
        .assert()
        .code(2)
        .stdout("x.txt:1:foo bar baz:\tA\nx.txt:1:foo bar baz:\tA child\n");
}

#[test]
fn negated_rule_reports_file() {
    let project = Project::with_config(
        r#"
rules:
  - id: doctype
    not:
      pattern: "<!DOCTYPE html>"
    message: Write DOCTYPE
    glob: "**/*.html"
"#,
    );
    project.file("index.html", "<html>\n</html>\n");
    project.file("ok.html", "<!DOCTYPE html>\n<html></html>\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout("index.html:-:<html>:\tWrite DOCTYPE\n");
}

#[test]
fn duplicate_issues_are_reported_once() {
    let project = Project::with_config(
        r#"
rules:
  - id: ns
    message: Use Swift
    pattern:
      - regexp: N.Array
      - regexp: NSAr.ay
"#,
    );
    project.file("a.m", "NSArray *a;\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout("a.m:1:NSArray *a;:\tUse Swift\n");
}

#[test]
fn token_variables_constrain_matches() {
    let project = Project::with_config(
        r#"
rules:
  - id: margin
    message: Use the spacing scale
    pattern:
      token: "margin: ${size:int}px;"
      where:
        size:
          not: [0, 8, 16]
"#,
    );
    project.file("a.css", "a { margin: 16px; }\nb { margin: 10px; }\n");

    project
        .cmd()
        .arg("check")
        .assert()
        .code(2)
        .stdout("a.css:2:b { margin: 10px; }:\tUse the spacing scale\n");
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn json_format() {
    let project = Project::with_config(GITHUB_RULE);
    project.file("README.md", "Github\n");

    let output = project
        .cmd()
        .args(["check", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "rule_id": "com.example.github",
            "path": "README.md",
            "location": {"start_line": 1, "start_column": 0, "end_line": 1, "end_column": 6},
            "message": "Do you want to write GitHub?\nSecond line is not printed.",
            "justifications": []
        }])
    );
}

#[test]
fn json_format_without_issues_is_empty_array() {
    let project = Project::with_config(GITHUB_RULE);

    project
        .cmd()
        .args(["check", "--format", "json"])
        .assert()
        .code(0)
        .stdout("[]\n");
}

#[test]
fn color_always_highlights_match() {
    let project = Project::with_config(GITHUB_RULE);
    project.file("README.md", "via Github\n");

    project
        .cmd()
        .args(["check", "--color", "always"])
        .assert()
        .code(2)
        .stdout(predicates::str::contains("\x1b[31mGithub"));
}
