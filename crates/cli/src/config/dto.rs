// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw shapes of `goodcheck.yml`, as deserialized.
//!
//! These carry no validation beyond what serde enforces; `loader` turns them
//! into rules.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Flatten an optional one-or-many field.
pub fn list<T>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDto {
    #[serde(default)]
    pub rules: Vec<RuleDto>,

    /// Names of rule files to import.
    #[serde(default)]
    pub import: Option<OneOrMany<String>>,

    /// Paths skipped while walking directories.
    #[serde(default)]
    pub exclude: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDto {
    pub id: String,
    pub message: String,
    pub justification: Option<OneOrMany<String>>,
    pub pattern: Option<OneOrMany<PatternDto>>,
    pub not: Option<NotDto>,
    pub trigger: Option<OneOrMany<TriggerDto>>,
    pub glob: Option<OneOrMany<GlobDto>>,
    pub pass: Option<OneOrMany<String>>,
    pub fail: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerDto {
    pub pattern: Option<OneOrMany<PatternDto>>,
    pub not: Option<NotDto>,
    pub glob: Option<OneOrMany<GlobDto>>,
    pub pass: Option<OneOrMany<String>>,
    pub fail: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotDto {
    pub pattern: OneOrMany<PatternDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatternDto {
    /// Bare string: case-sensitive literal.
    Literal(String),
    Object(PatternObjectDto),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternObjectDto {
    pub literal: Option<String>,
    pub regexp: Option<String>,
    pub token: Option<String>,
    pub case_sensitive: Option<bool>,
    /// Deprecated inverse of `case_sensitive`.
    pub case_insensitive: Option<bool>,
    pub multiline: Option<bool>,
    #[serde(rename = "where")]
    pub variables: Option<BTreeMap<String, VarPatternDto>>,
    /// Deprecated per-pattern glob.
    pub glob: Option<OneOrMany<GlobDto>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VarPatternDto {
    /// `true` declares an unconstrained variable.
    Any(bool),
    Not { not: OneOrMany<VarItemDto> },
    Allow(OneOrMany<VarItemDto>),
}

/// One `where:` value. Strings shaped like `/re/` or `/re/i` are regexes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VarItemDto {
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GlobDto {
    Pattern(String),
    Object {
        pattern: String,
        encoding: Option<String>,
    },
}

#[cfg(test)]
#[path = "dto_tests.rs"]
mod tests;
