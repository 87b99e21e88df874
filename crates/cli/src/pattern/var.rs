// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed token variables and their `where:` constraints.

use std::fmt;

use regex::Regex;

/// Type of a `${name:type}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    String,
    Int,
    Float,
    Number,
    Word,
    Identifier,
    Url,
    Email,
}

/// Every known type name. Placeholders with other type names are rejected
/// when the variable is declared.
pub const VAR_TYPES: &[(&str, VarType)] = &[
    ("string", VarType::String),
    ("int", VarType::Int),
    ("float", VarType::Float),
    ("number", VarType::Number),
    ("word", VarType::Word),
    ("identifier", VarType::Identifier),
    ("url", VarType::Url),
    ("email", VarType::Email),
];

const INT_PREFIXED: &str = concat!(
    r"0[xX][0-9a-fA-F]+(?:_[0-9a-fA-F]+)*",
    r"|0[bB][01]+(?:_[01]+)*",
    r"|0[oO][0-7]+(?:_[0-7]+)*",
    r"|0[dD][0-9]+(?:_[0-9]+)*",
);
const DECIMAL: &str = r"[0-9]+(?:_[0-9]+)*";
const FLOAT: &str = r"[0-9]+(?:_[0-9]+)*(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?";
const QUOTED_BODY_DOUBLE: &str = r#"(?:[^"\\]|\\.)*"#;
const QUOTED_BODY_SINGLE: &str = r"(?:[^'\\]|\\.)*";
const EMAIL_LOCAL: &str = r"[a-zA-Z0-9.!#$%\&'*+/=?^_`{|}\~\-]+";
const EMAIL_LABEL: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?";

/// Regex text for one placeholder plus the capture groups it defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub regex: String,
    pub groups: Vec<String>,
}

impl VarType {
    pub fn from_name(name: &str) -> Option<Self> {
        VAR_TYPES
            .iter()
            .find(|(type_name, _)| *type_name == name)
            .map(|(_, ty)| *ty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::Word => "word",
            Self::Identifier => "identifier",
            Self::Url => "url",
            Self::Email => "email",
        }
    }

    /// Build the regex fragment that captures this type into `group`.
    ///
    /// `string` needs a second group for the single-quoted alternative since
    /// a group name may appear only once per regex.
    pub fn fragment(&self, group: &str) -> Fragment {
        let regex = match self {
            Self::String => {
                let single = format!("{group}__sq");
                let regex = format!(
                    r#"(?:"(?P<{group}>{QUOTED_BODY_DOUBLE})"|'(?P<{single}>{QUOTED_BODY_SINGLE})')"#
                );
                return Fragment {
                    regex,
                    groups: vec![group.to_string(), single],
                };
            }
            Self::Int => format!(r"(?P<{group}>[+-]?\b(?:{INT_PREFIXED}|{DECIMAL}))"),
            Self::Float => format!(r"(?P<{group}>[+-]?\b{FLOAT})"),
            Self::Number => format!(r"(?P<{group}>[+-]?\b(?:{INT_PREFIXED}|{FLOAT}))"),
            Self::Word => format!(r"(?P<{group}>\S+)"),
            Self::Identifier => format!(r"(?P<{group}>[a-zA-Z_]\w*)\b"),
            Self::Url => format!(
                r#"(?P<{group}>\b(?:[a-zA-Z][a-zA-Z0-9+.\-]*://|www\.)[^\s"')]+)"#
            ),
            Self::Email => {
                format!(r"(?P<{group}>{EMAIL_LOCAL}@{EMAIL_LABEL}(?:\.{EMAIL_LABEL})*)")
            }
        };
        Fragment {
            regex,
            groups: vec![group.to_string()],
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One allowed (or denied) value of a variable.
#[derive(Debug, Clone)]
pub enum VarMatcher {
    /// Compared for equality after casting both sides to the variable's type.
    Literal(String),
    /// Tested for a match anywhere in the captured text.
    Regex(Regex),
}

/// Constraint on a token variable's captured text.
#[derive(Debug, Clone, Default)]
pub struct VarPattern {
    patterns: Vec<VarMatcher>,
    negated: bool,
    var_type: Option<VarType>,
}

impl VarPattern {
    /// Unconstrained variable: every capture passes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(patterns: Vec<VarMatcher>, negated: bool) -> Self {
        Self {
            patterns,
            negated,
            var_type: None,
        }
    }

    pub fn patterns(&self) -> &[VarMatcher] {
        &self.patterns
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Type resolved from the placeholder, set while compiling the token.
    pub fn var_type(&self) -> Option<VarType> {
        self.var_type
    }

    pub fn set_var_type(&mut self, var_type: VarType) {
        self.var_type = Some(var_type);
    }

    /// Test a captured value against the allow (or deny) list.
    pub fn test(&self, text: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let value = Value::cast(text, self.var_type);
        let matched = self.patterns.iter().any(|pat| value.matches(text, pat));
        matched != self.negated
    }
}

/// A captured value after type-directed casting.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Value<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
    /// Numeric cast failed; never equal to anything.
    Invalid,
}

impl<'a> Value<'a> {
    fn cast(text: &'a str, var_type: Option<VarType>) -> Self {
        match var_type {
            Some(VarType::Int) => parse_int(text).map_or(Self::Invalid, Self::Int),
            Some(VarType::Float | VarType::Number) => {
                parse_float(text).map_or(Self::Invalid, Self::Float)
            }
            _ => Self::Text(text),
        }
    }

    fn matches(&self, text: &str, pattern: &VarMatcher) -> bool {
        match (self, pattern) {
            (Self::Invalid, _) => false,
            (_, VarMatcher::Regex(re)) => re.is_match(text),
            (Self::Int(v), VarMatcher::Literal(lit)) => parse_int(lit) == Some(*v),
            (Self::Float(v), VarMatcher::Literal(lit)) => parse_float(lit) == Some(*v),
            (Self::Text(s), VarMatcher::Literal(lit)) => s == lit,
        }
    }
}

/// Parse an integer literal in decimal, `0x`, `0b`, `0o`, `0d` or leading-zero
/// octal form, with optional sign and `_` separators.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: String = body.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();

    let (radix, rest) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0d") {
        (10, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    if rest.is_empty() || body.starts_with('_') || body.ends_with('_') {
        return None;
    }
    let value = i64::from_str_radix(rest, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a float, falling back to the integer forms.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.starts_with('_') || trimmed.ends_with('_') {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != '_').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => parse_int(trimmed).map(|v| v as f64),
    }
}

#[cfg(test)]
#[path = "var_tests.rs"]
mod tests;
