// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token pattern compiler.
//!
//! A token pattern is a snippet of source text. It is split into tokens
//! (brackets, words, punctuation runs, whitespace) and rejoined so that any
//! amount of whitespace may appear between tokens, and at least some where
//! the source had whitespace.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::PatternError;
use super::var::{VarPattern, VarType};

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\$\{([A-Za-z_][A-Za-z0-9_]*)(?::([A-Za-z_][A-Za-z0-9_]*))?\}")
        .expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\s+").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?:[A-Za-z0-9_]+|[\p{L}&&[^\x00-\x7F]]+)").expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"\A[!"#$%\&'=\-^\~¥\\|`@*:+;/?.,]+"##).expect("valid regex pattern")
});

const BRACKETS: &[char] = &['(', ')', '{', '}', '[', ']', '<', '>'];
const SPACE: &str = r"\s+";
const GAP: &str = r"\s*";

/// Result of compiling a token source, before flags are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledToken {
    pub regex: String,
    /// Capture groups per variable name.
    pub groups: BTreeMap<String, Vec<String>>,
}

#[derive(Debug)]
enum Piece {
    Text(String),
    Space,
    Variable { regex: String, var_type: VarType },
}

impl Piece {
    fn regex(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Space => SPACE,
            Self::Variable { regex, .. } => regex,
        }
    }
}

/// Compile `source` into regex text.
///
/// Placeholders naming a key of `variables` become captures; the resolved
/// type is stored back on the variable. Other placeholders match their own
/// text verbatim.
pub fn compile_token(
    source: &str,
    variables: &mut BTreeMap<String, VarPattern>,
) -> Result<CompiledToken, PatternError> {
    let mut pieces = Vec::new();
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut rest = source;

    while let Some(first) = rest.chars().next() {
        if let Some((len, piece)) = placeholder(rest, variables, &mut groups)? {
            pieces.push(piece);
            rest = &rest[len..];
            continue;
        }

        let (len, piece) = if BRACKETS.contains(&first) {
            (first.len_utf8(), Piece::Text(regex::escape(&rest[..first.len_utf8()])))
        } else if let Some(m) = WHITESPACE.find(rest) {
            (m.end(), Piece::Space)
        } else if let Some(m) = WORD.find(rest).or_else(|| PUNCTUATION.find(rest)) {
            (m.end(), Piece::Text(regex::escape(m.as_str())))
        } else {
            (first.len_utf8(), Piece::Text(regex::escape(&rest[..first.len_utf8()])))
        };
        pieces.push(piece);
        rest = &rest[len..];
    }

    Ok(CompiledToken {
        regex: join(&pieces),
        groups,
    })
}

fn placeholder(
    rest: &str,
    variables: &mut BTreeMap<String, VarPattern>,
    groups: &mut BTreeMap<String, Vec<String>>,
) -> Result<Option<(usize, Piece)>, PatternError> {
    let Some(caps) = PLACEHOLDER.captures(rest) else {
        return Ok(None);
    };
    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return Ok(None);
    };
    let name = name.as_str();
    let Some(var) = variables.get_mut(name) else {
        return Ok(Some((whole.end(), Piece::Text(regex::escape(whole.as_str())))));
    };

    let var_type = match caps.get(2) {
        Some(type_name) => {
            VarType::from_name(type_name.as_str()).ok_or_else(|| PatternError::UnknownType {
                name: name.to_string(),
                type_name: type_name.as_str().to_string(),
            })?
        }
        None => VarType::Word,
    };
    var.set_var_type(var_type);

    let seen = groups.entry(name.to_string()).or_default();
    let group = if seen.is_empty() {
        name.to_string()
    } else {
        format!("{name}__{}", seen.len())
    };
    let fragment = var_type.fragment(&group);
    seen.extend(fragment.groups);

    Ok(Some((
        whole.end(),
        Piece::Variable {
            regex: fragment.regex,
            var_type,
        },
    )))
}

fn join(pieces: &[Piece]) -> String {
    let mut out = String::new();

    if let Some(first) = pieces.first() {
        let leading_boundary = match first {
            Piece::Text(text) => text.starts_with(|c: char| c.is_alphabetic()),
            Piece::Variable { var_type, .. } => {
                matches!(var_type, VarType::Word | VarType::Identifier)
            }
            Piece::Space => false,
        };
        if leading_boundary {
            out.push_str(r"\b");
        }
    }

    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            let previous = &pieces[i - 1];
            if !matches!(previous, Piece::Space) && !matches!(piece, Piece::Space) {
                out.push_str(GAP);
            }
        }
        out.push_str(piece.regex());
    }

    if let Some(Piece::Text(text)) = pieces.last()
        && text.ends_with(|c: char| c.is_alphabetic())
    {
        out.push_str(r"\b");
    }

    out
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
