// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan a buffer for one trigger of a rule.
//!
//! Patterns without variables are joined into one alternation and scanned
//! forward without overlap. Token patterns with variables are scanned one by
//! one, keeping only matches whose captures pass their `where:` constraints.
//!
//! A trigger without patterns flags the whole file once. A negated trigger
//! flags the whole file once when none of its patterns is present, where a
//! variable token counts as present only through a match that passes its
//! constraints.

use std::collections::{BTreeMap, HashSet};
use std::ops::Range;
use std::sync::Arc;

use regex::Captures;

use crate::buffer::Buffer;
use crate::issue::Issue;
use crate::pattern::Token;
use crate::rule::{Rule, Trigger};

#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    rule: &'a Arc<Rule>,
    trigger: &'a Trigger,
    buffer: &'a Arc<Buffer>,
}

impl<'a> Analyzer<'a> {
    pub fn new(rule: &'a Arc<Rule>, trigger: &'a Trigger, buffer: &'a Arc<Buffer>) -> Self {
        Self {
            rule,
            trigger,
            buffer,
        }
    }

    /// Issues this trigger fires in the buffer.
    ///
    /// Each call starts a fresh scan from the beginning of the buffer.
    pub fn scan(self) -> Box<dyn Iterator<Item = Issue> + 'a> {
        if self.trigger.patterns().is_empty() {
            return Box::new(std::iter::once(self.file_issue()));
        }

        if self.trigger.is_negated() {
            let fires = !self.any_present();
            return Box::new(fires.then(|| self.file_issue()).into_iter());
        }

        Box::new(self.plain_issues().chain(self.variable_issues()))
    }

    fn file_issue(&self) -> Issue {
        Issue::file_level(Arc::clone(self.buffer), Arc::clone(self.rule))
    }

    fn match_issue(&self, range: Range<usize>, text: &str) -> Issue {
        Issue::new(
            Arc::clone(self.buffer),
            Some(range),
            Arc::clone(self.rule),
            Some(text.to_string()),
        )
    }

    fn plain_issues(self) -> impl Iterator<Item = Issue> + 'a {
        let content = self.buffer.content();
        let mut seen: HashSet<Range<usize>> = HashSet::new();
        self.trigger
            .plain_regex()
            .into_iter()
            .flat_map(move |re| re.find_iter(content))
            .filter(move |m| seen.insert(m.range()))
            .map(move |m| self.match_issue(m.range(), m.as_str()))
    }

    fn variable_issues(self) -> impl Iterator<Item = Issue> + 'a {
        let content = self.buffer.content();
        self.trigger
            .variable_tokens()
            .flat_map(move |(pattern, token)| {
                pattern
                    .regex()
                    .captures_iter(content)
                    .filter(move |caps| token.test_variables(caps))
                    .filter_map(move |caps| {
                        let whole = caps.get(0)?;
                        let issue = self
                            .match_issue(whole.range(), whole.as_str())
                            .with_captures(captured_variables(token, &caps));
                        Some(issue)
                    })
            })
    }

    fn any_present(&self) -> bool {
        let content = self.buffer.content();
        let plain = self
            .trigger
            .plain_regex()
            .is_some_and(|re| re.is_match(content));

        plain
            || self.trigger.variable_tokens().any(|(pattern, token)| {
                pattern
                    .regex()
                    .captures_iter(content)
                    .any(|caps| token.test_variables(&caps))
            })
    }
}

fn captured_variables(token: &Token, caps: &Captures<'_>) -> BTreeMap<String, String> {
    token
        .variables()
        .keys()
        .filter_map(|name| {
            token
                .capture(caps, name)
                .map(|m| (name.clone(), m.as_str().to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
