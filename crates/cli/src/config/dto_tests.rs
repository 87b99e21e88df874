// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn parse(yaml: &str) -> ConfigDto {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn empty_document_fields_default() {
    let config = parse("rules: []\n");
    assert!(config.rules.is_empty());
    assert!(config.import.is_none());
    assert!(config.exclude.is_none());
}

#[test]
fn one_or_many_accepts_both_shapes() {
    let one: OneOrMany<String> = serde_yaml::from_str("foo").unwrap();
    let many: OneOrMany<String> = serde_yaml::from_str("[foo, bar]").unwrap();
    assert_eq!(one.into_vec(), vec!["foo"]);
    assert_eq!(many.into_vec(), vec!["foo", "bar"]);
}

#[test]
fn pattern_shapes() {
    let config = parse(
        r#"
rules:
  - id: sample
    message: hello
    pattern:
      - foo
      - literal: bar
        case_sensitive: false
      - regexp: "ba+z"
        multiline: true
      - token: "margin: ${size:int}px"
        where:
          size: [16, "/2./"]
"#,
    );
    let patterns = list(config.rules[0].pattern.clone());
    assert_eq!(patterns.len(), 4);
    assert_eq!(patterns[0], PatternDto::Literal("foo".to_string()));

    let PatternDto::Object(literal) = &patterns[1] else {
        panic!("expected object pattern");
    };
    assert_eq!(literal.literal.as_deref(), Some("bar"));
    assert_eq!(literal.case_sensitive, Some(false));

    let PatternDto::Object(token) = &patterns[3] else {
        panic!("expected object pattern");
    };
    let variables = token.variables.as_ref().unwrap();
    assert_eq!(
        variables["size"],
        VarPatternDto::Allow(OneOrMany::Many(vec![
            VarItemDto::Int(16),
            VarItemDto::Text("/2./".to_string()),
        ]))
    );
}

#[test]
fn var_pattern_shapes() {
    let any: VarPatternDto = serde_yaml::from_str("true").unwrap();
    let single: VarPatternDto = serde_yaml::from_str("gray").unwrap();
    let negated: VarPatternDto = serde_yaml::from_str("not: [gray, white]").unwrap();

    assert_eq!(any, VarPatternDto::Any(true));
    assert_eq!(
        single,
        VarPatternDto::Allow(OneOrMany::One(VarItemDto::Text("gray".to_string())))
    );
    assert!(matches!(negated, VarPatternDto::Not { .. }));
}

#[test]
fn glob_shapes() {
    let globs: OneOrMany<GlobDto> =
        serde_yaml::from_str("['**/*.rb', {pattern: '*.yml', encoding: UTF-8}]").unwrap();
    assert_eq!(
        globs.into_vec(),
        vec![
            GlobDto::Pattern("**/*.rb".to_string()),
            GlobDto::Object {
                pattern: "*.yml".to_string(),
                encoding: Some("UTF-8".to_string()),
            },
        ]
    );
}

#[test]
fn negated_rule_and_triggers() {
    let config = parse(
        r#"
rules:
  - id: doctype
    message: Write DOCTYPE
    not:
      pattern: "<!DOCTYPE html>"
  - id: multi
    message: hello
    trigger:
      - pattern: foo
        glob: "*.rb"
      - not:
          pattern: bar
"#,
    );
    assert!(config.rules[0].not.is_some());
    let triggers = list(config.rules[1].trigger.clone());
    assert_eq!(triggers.len(), 2);
    assert!(triggers[1].not.is_some());
}

#[test]
fn unknown_rule_key_is_rejected() {
    let result = serde_yaml::from_str::<ConfigDto>(
        "rules:\n  - id: a\n    message: b\n    pattrn: c\n",
    );
    assert!(result.is_err());
}
