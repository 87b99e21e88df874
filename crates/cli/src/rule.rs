// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules and their triggers.

use std::path::Path;

use regex::Regex;

use crate::glob::Glob;
use crate::pattern::{self, Pattern, Token};

#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("negated trigger must have at least one pattern")]
    NegatedWithoutPatterns,

    #[error("failed to combine patterns: {0}")]
    Union(#[from] regex::Error),
}

/// One firing condition of a rule.
#[derive(Debug, Clone)]
pub struct Trigger {
    patterns: Vec<Pattern>,
    globs: Vec<Glob>,
    passes: Vec<String>,
    fails: Vec<String>,
    negated: bool,
    by_pattern: bool,
    skips_fail_examples: bool,
    /// Alternation of every pattern without variables.
    plain: Option<Regex>,
}

impl Trigger {
    pub fn new(patterns: Vec<Pattern>, globs: Vec<Glob>, negated: bool) -> Result<Self, TriggerError> {
        if negated && patterns.is_empty() {
            return Err(TriggerError::NegatedWithoutPatterns);
        }

        let plain_patterns: Vec<&Pattern> = patterns
            .iter()
            .filter(|p| p.as_variable_token().is_none())
            .collect();
        let plain = if plain_patterns.is_empty() {
            None
        } else {
            Some(pattern::union(plain_patterns)?)
        };

        Ok(Self {
            patterns,
            globs,
            passes: Vec::new(),
            fails: Vec::new(),
            negated,
            by_pattern: false,
            skips_fail_examples: false,
            plain,
        })
    }

    pub fn with_examples(mut self, passes: Vec<String>, fails: Vec<String>) -> Self {
        self.passes = passes;
        self.fails = fails;
        self
    }

    /// Mark the trigger as built from a rule's `pattern` or `not` key.
    pub fn by_pattern(mut self) -> Self {
        self.by_pattern = true;
        self
    }

    pub fn skip_fail_examples(mut self, skip: bool) -> Self {
        self.skips_fail_examples = skip;
        self
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn globs(&self) -> &[Glob] {
        &self.globs
    }

    pub fn passes(&self) -> &[String] {
        &self.passes
    }

    pub fn fails(&self) -> &[String] {
        &self.fails
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_by_pattern(&self) -> bool {
        self.by_pattern
    }

    pub fn skips_fail_examples(&self) -> bool {
        self.skips_fail_examples
    }

    pub fn plain_regex(&self) -> Option<&Regex> {
        self.plain.as_ref()
    }

    /// Token patterns with variables, in declaration order.
    pub fn variable_tokens(&self) -> impl Iterator<Item = (&Pattern, &Token)> + '_ {
        self.patterns
            .iter()
            .filter_map(|p| p.as_variable_token().map(|token| (p, token)))
    }

    /// A trigger without globs applies to every file.
    pub fn fires_for(&self, path: &Path) -> bool {
        self.globs.is_empty() || self.globs.iter().any(|glob| glob.is_match(path))
    }
}

/// A named lint rule.
#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    message: String,
    justifications: Vec<String>,
    triggers: Vec<Trigger>,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        justifications: Vec<String>,
        triggers: Vec<Trigger>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            justifications,
            triggers,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn justifications(&self) -> &[String] {
        &self.justifications
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// `filter` selects this rule or a dotted child of it.
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.id == filter
            || self
                .id
                .strip_prefix(filter)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
