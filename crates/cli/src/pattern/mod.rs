// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns.
//!
//! Every pattern compiles eagerly to a single [`Regex`]. Flags are embedded as
//! an inline group (`(?m:...)`) so several patterns can be joined into one
//! alternation without losing their individual flags.

mod token;
mod var;

use std::collections::BTreeMap;

use regex::{Captures, Match, Regex};

pub use token::{CompiledToken, compile_token};
pub use var::{Fragment, VAR_TYPES, VarMatcher, VarPattern, VarType};

/// Errors raised while building a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regexp `{source_text}`: {error}")]
    Regex {
        source_text: String,
        #[source]
        error: regex::Error,
    },

    #[error("unknown type `{type_name}` for variable `{name}`")]
    UnknownType { name: String, type_name: String },

    #[error("invalid regexp `{source_text}` in where clause of `{name}`: {error}")]
    VarRegex {
        name: String,
        source_text: String,
        #[source]
        error: regex::Error,
    },
}

/// A matchable unit of a trigger.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(Literal),
    Regexp(Regexp),
    Token(Token),
}

#[derive(Debug, Clone)]
pub struct Literal {
    source: String,
    case_sensitive: bool,
    regex: Regex,
}

#[derive(Debug, Clone)]
pub struct Regexp {
    source: String,
    case_sensitive: bool,
    multiline: bool,
    regex: Regex,
}

/// Token pattern with optional typed variables.
#[derive(Debug, Clone)]
pub struct Token {
    source: String,
    case_sensitive: bool,
    regex: Regex,
    variables: BTreeMap<String, VarPattern>,
    /// Capture groups per variable, in the order they appear in the regex.
    groups: BTreeMap<String, Vec<String>>,
}

fn flag_group(flags: &str, body: &str) -> String {
    if flags.is_empty() {
        format!("(?:{body})")
    } else {
        format!("(?{flags}:{body})")
    }
}

fn compile(source: &str, text: String) -> Result<Regex, PatternError> {
    Regex::new(&text).map_err(|error| PatternError::Regex {
        source_text: source.to_string(),
        error,
    })
}

impl Pattern {
    /// Match `source` verbatim.
    pub fn literal(source: impl Into<String>, case_sensitive: bool) -> Result<Self, PatternError> {
        let source = source.into();
        let flags = if case_sensitive { "" } else { "i" };
        let regex = compile(&source, flag_group(flags, &regex::escape(&source)))?;
        Ok(Self::Literal(Literal {
            source,
            case_sensitive,
            regex,
        }))
    }

    /// Match a regular expression. `^` and `$` always match at line
    /// boundaries; `multiline` additionally lets `.` match a newline.
    pub fn regexp(
        source: impl Into<String>,
        case_sensitive: bool,
        multiline: bool,
    ) -> Result<Self, PatternError> {
        let source = source.into();
        let mut flags = String::from("m");
        if multiline {
            flags.push('s');
        }
        if !case_sensitive {
            flags.push('i');
        }
        let regex = compile(&source, flag_group(&flags, &source))?;
        Ok(Self::Regexp(Regexp {
            source,
            case_sensitive,
            multiline,
            regex,
        }))
    }

    /// Compile a token pattern. Placeholders whose names appear in
    /// `variables` become typed captures.
    pub fn token(
        source: impl Into<String>,
        case_sensitive: bool,
        mut variables: BTreeMap<String, VarPattern>,
    ) -> Result<Self, PatternError> {
        let source = source.into();
        let compiled = compile_token(&source, &mut variables)?;
        let flags = if case_sensitive { "ms" } else { "msi" };
        let regex = compile(&source, flag_group(flags, &compiled.regex))?;
        Ok(Self::Token(Token {
            source,
            case_sensitive,
            regex,
            variables,
            groups: compiled.groups,
        }))
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Literal(p) => &p.source,
            Self::Regexp(p) => &p.source,
            Self::Token(p) => &p.source,
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        match self {
            Self::Literal(p) => p.case_sensitive,
            Self::Regexp(p) => p.case_sensitive,
            Self::Token(p) => p.case_sensitive,
        }
    }

    pub fn regex(&self) -> &Regex {
        match self {
            Self::Literal(p) => &p.regex,
            Self::Regexp(p) => &p.regex,
            Self::Token(p) => &p.regex,
        }
    }

    /// The token pattern, when it declares variables.
    pub fn as_variable_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) if !token.variables.is_empty() => Some(token),
            _ => None,
        }
    }
}

impl Regexp {
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }
}

impl Token {
    pub fn variables(&self) -> &BTreeMap<String, VarPattern> {
        &self.variables
    }

    /// The text captured for `name`, if any of its groups participated.
    pub fn capture<'h>(&self, captures: &Captures<'h>, name: &str) -> Option<Match<'h>> {
        self.groups
            .get(name)?
            .iter()
            .find_map(|group| captures.name(group))
    }

    /// Check every declared variable's capture against its constraint.
    ///
    /// Variables declared but absent from the source have nothing to test.
    pub fn test_variables(&self, captures: &Captures<'_>) -> bool {
        self.variables.iter().all(|(name, var)| {
            match self.capture(captures, name) {
                Some(m) => var.test(m.as_str()),
                None => !self.groups.contains_key(name),
            }
        })
    }
}

/// Join patterns into one alternation, leftmost-first in the given order.
///
/// Group names are dropped, so patterns may reuse a name. The union is only
/// used for match spans.
pub fn union<'a>(patterns: impl IntoIterator<Item = &'a Pattern>) -> Result<Regex, regex::Error> {
    let joined = patterns
        .into_iter()
        .map(|p| strip_group_names(p.regex().as_str()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&joined)
}

/// Rewrite `(?P<name>...)` and `(?<name>...)` as plain `(...)`.
///
/// Escapes and character classes are copied through untouched.
fn strip_group_names(regex: &str) -> String {
    let mut out = String::with_capacity(regex.len());
    let mut class_depth = 0usize;
    let mut rest = regex;

    while let Some(c) = rest.chars().next() {
        let len = match c {
            '\\' => 1 + rest[1..].chars().next().map_or(0, char::len_utf8),
            '[' => {
                class_depth += 1;
                let mut len = 1;
                if rest[len..].starts_with('^') {
                    len += 1;
                }
                // A leading `]` is a literal member of the class.
                if rest[len..].starts_with(']') {
                    len += 1;
                }
                len
            }
            ']' if class_depth > 0 => {
                class_depth -= 1;
                1
            }
            '(' if class_depth == 0 => {
                let named = rest
                    .strip_prefix("(?P<")
                    .or_else(|| rest.strip_prefix("(?<"))
                    .and_then(|after| after.find('>').map(|end| &after[end + 1..]));
                if let Some(after) = named {
                    out.push('(');
                    rest = after;
                    continue;
                }
                1
            }
            _ => c.len_utf8(),
        };
        out.push_str(&rest[..len]);
        rest = &rest[len..];
    }

    out
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
