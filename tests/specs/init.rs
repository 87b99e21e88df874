// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `goodcheck init`.

use crate::prelude::*;

#[test]
fn init_creates_goodcheck_yml() {
    let project = Project::empty();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Wrote goodcheck.yml"));

    assert!(project.path().join("goodcheck.yml").exists());
}

#[test]
fn init_custom_path() {
    let project = Project::empty();

    project
        .cmd()
        .args(["init", "-c", "lint.yml"])
        .assert()
        .success();

    assert!(project.path().join("lint.yml").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let project = Project::with_config("rules: []\n# existing\n");

    project
        .cmd()
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));

    let config = std::fs::read_to_string(project.path().join("goodcheck.yml")).unwrap();
    assert!(config.contains("# existing"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let project = Project::with_config("rules: []\n# existing\n");

    project.cmd().args(["init", "--force"]).assert().success();

    let config = std::fs::read_to_string(project.path().join("goodcheck.yml")).unwrap();
    assert!(!config.contains("# existing"), "should overwrite");
    assert!(config.contains("com.example.github"));
}

#[test]
fn generated_config_passes_its_own_tests() {
    let project = Project::empty();
    project.cmd().arg("init").assert().success();

    project
        .cmd()
        .arg("test")
        .assert()
        .success()
        .stdout(predicates::str::contains("Testing rule com.example.github..."));
}
