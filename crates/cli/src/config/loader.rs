// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! DTO to rule conversion.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::RegexBuilder;

use super::dto::{
    self, ConfigDto, GlobDto, OneOrMany, PatternDto, PatternObjectDto, RuleDto, TriggerDto,
    VarItemDto, VarPatternDto,
};
use super::import::ImportLoader;
use super::{Config, ConfigError, RuleError};
use crate::glob::Glob;
use crate::pattern::{Pattern, PatternError, VarMatcher, VarPattern};
use crate::rule::{Rule, Trigger};

/// Encoding labels accepted on globs. Files are always read as UTF-8.
pub const SUPPORTED_ENCODINGS: &[&str] = &["UTF-8", "utf-8", "utf8", "US-ASCII", "ASCII"];

const CASE_INSENSITIVE_DEPRECATED: &str =
    "`case_insensitive` option is deprecated. Use `case_sensitive` option instead.";
const PATTERN_GLOB_DEPRECATED: &str =
    "Pattern with glob is deprecated. Use `trigger` with `glob` instead.";

/// Builds a [`Config`] from YAML, following imports.
pub struct ConfigLoader {
    path: PathBuf,
    import_loader: ImportLoader,
    warnings: BTreeSet<&'static str>,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>, import_loader: ImportLoader) -> Self {
        Self {
            path: path.into(),
            import_loader,
            warnings: BTreeSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deprecation warnings printed so far.
    pub fn warnings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.warnings.iter().copied()
    }

    pub fn load(&mut self, content: &str) -> Result<Config, ConfigError> {
        tracing::info!("loading configuration {}", self.path.display());
        let origin = self.path.display().to_string();
        let dto: ConfigDto = serde_yaml::from_str(content)
            .map_err(|source| ConfigError::Yaml { origin, source })?;

        let mut rules = Vec::new();
        for rule in dto.rules {
            rules.push(self.load_rule(rule)?);
        }

        for name in &dto::list(dto.import) {
            tracing::info!("importing rules from {name}");
            let import_loader = self.import_loader.clone();
            let imported = import_loader.load(name, |content| self.load_imported(name, content))?;
            rules.extend(imported);
        }

        let exclude = dto::list(dto.exclude);
        Config::new(rules, exclude)
    }

    fn load_imported(&mut self, name: &str, content: &str) -> Result<Vec<Arc<Rule>>, ConfigError> {
        let dtos: Vec<RuleDto> = serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            origin: name.to_string(),
            source,
        })?;
        dtos.into_iter().map(|dto| self.load_rule(dto)).collect()
    }

    fn load_rule(&mut self, dto: RuleDto) -> Result<Arc<Rule>, ConfigError> {
        tracing::debug!("loading rule {}", dto.id);
        let id = dto.id.clone();
        let rule_error = |source| ConfigError::Rule {
            id: id.clone(),
            source,
        };

        let message = chomp(&dto.message).to_string();
        let justifications = dto::list(dto.justification.clone());
        let triggers = self.load_triggers(dto).map_err(rule_error)?;

        Ok(Arc::new(Rule::new(id, message, justifications, triggers)))
    }

    fn load_triggers(&mut self, dto: RuleDto) -> Result<Vec<Trigger>, RuleError> {
        let globs = load_globs(dto.glob)?;
        let passes = dto::list(dto.pass);
        let fails = dto::list(dto.fail);

        match (dto.pattern, dto.not, dto.trigger) {
            (Some(patterns), None, None) => {
                self.triggers_by_pattern(patterns, false, globs, passes, fails)
            }
            (None, Some(not), None) => {
                self.triggers_by_pattern(not.pattern, true, globs, passes, fails)
            }
            (None, None, Some(triggers)) => {
                if !globs.is_empty() || !passes.is_empty() || !fails.is_empty() {
                    return Err(RuleError::Schema(
                        "`glob`, `pass` and `fail` must be given per trigger".to_string(),
                    ));
                }
                triggers
                    .into_vec()
                    .into_iter()
                    .map(|t| self.load_trigger(t))
                    .collect()
            }
            (None, None, None) => {
                if globs.is_empty() {
                    return Err(RuleError::Schema(
                        "rule needs one of `pattern`, `not`, `trigger` or `glob`".to_string(),
                    ));
                }
                Ok(vec![
                    Trigger::new(Vec::new(), globs, false)?.with_examples(passes, fails),
                ])
            }
            _ => Err(RuleError::Schema(
                "only one of `pattern`, `not` and `trigger` may be given".to_string(),
            )),
        }
    }

    fn load_trigger(&mut self, dto: TriggerDto) -> Result<Trigger, RuleError> {
        let globs = load_globs(dto.glob)?;
        let (patterns, negated) = match (dto.pattern, dto.not) {
            (Some(patterns), None) => (patterns.into_vec(), false),
            (None, Some(not)) => (not.pattern.into_vec(), true),
            (None, None) => (Vec::new(), false),
            (Some(_), Some(_)) => {
                return Err(RuleError::Schema(
                    "trigger may not have both `pattern` and `not`".to_string(),
                ));
            }
        };

        let patterns = patterns
            .into_iter()
            .map(|p| self.load_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Trigger::new(patterns, globs, negated)?
            .with_examples(dto::list(dto.pass), dto::list(dto.fail)))
    }

    /// Triggers for a rule's `pattern` or `not` key.
    ///
    /// Patterns with their own `glob` are grouped into separate triggers by
    /// glob list. Those triggers get no `fail` examples, and the trigger of
    /// the remaining patterns skips its `fail` examples since they may target
    /// the globbed patterns.
    fn triggers_by_pattern(
        &mut self,
        patterns: OneOrMany<PatternDto>,
        negated: bool,
        globs: Vec<Glob>,
        passes: Vec<String>,
        fails: Vec<String>,
    ) -> Result<Vec<Trigger>, RuleError> {
        let mut plain = Vec::new();
        let mut globbed: Vec<(Vec<Glob>, Vec<Pattern>)> = Vec::new();

        for dto in patterns.into_vec() {
            let own_globs = match &dto {
                PatternDto::Object(PatternObjectDto { glob: Some(g), .. }) => {
                    Some(load_globs(Some(g.clone()))?)
                }
                _ => None,
            };
            let pattern = self.load_pattern(dto)?;

            match own_globs {
                None => plain.push(pattern),
                Some(own_globs) => {
                    self.warn_once(PATTERN_GLOB_DEPRECATED);
                    match globbed.iter_mut().find(|(g, _)| *g == own_globs) {
                        Some((_, group)) => group.push(pattern),
                        None => globbed.push((own_globs, vec![pattern])),
                    }
                }
            }
        }

        let mut triggers = Vec::new();
        if !plain.is_empty() {
            let skip_fails = !globbed.is_empty() && !fails.is_empty();
            triggers.push(
                Trigger::new(plain, globs, negated)?
                    .with_examples(passes.clone(), fails)
                    .by_pattern()
                    .skip_fail_examples(skip_fails),
            );
        }
        for (own_globs, group) in globbed {
            triggers.push(
                Trigger::new(group, own_globs, negated)?
                    .with_examples(passes.clone(), Vec::new())
                    .by_pattern(),
            );
        }
        Ok(triggers)
    }

    fn load_pattern(&mut self, dto: PatternDto) -> Result<Pattern, RuleError> {
        let dto = match dto {
            PatternDto::Literal(source) => return Ok(Pattern::literal(source, true)?),
            PatternDto::Object(dto) => dto,
        };

        let case_sensitive = self.case_sensitive(&dto)?;
        match (dto.literal, dto.regexp, dto.token) {
            (Some(source), None, None) => {
                reject_where(dto.variables.is_some(), "literal")?;
                Ok(Pattern::literal(source, case_sensitive)?)
            }
            (None, Some(source), None) => {
                reject_where(dto.variables.is_some(), "regexp")?;
                let multiline = dto.multiline.unwrap_or(false);
                Ok(Pattern::regexp(source, case_sensitive, multiline)?)
            }
            (None, None, Some(source)) => {
                let variables = dto
                    .variables
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(name, var)| {
                        let pattern = load_var_pattern(&name, var)?;
                        Ok((name, pattern))
                    })
                    .collect::<Result<BTreeMap<_, _>, RuleError>>()?;
                Ok(Pattern::token(source, case_sensitive, variables)?)
            }
            _ => Err(RuleError::Schema(
                "pattern needs exactly one of `literal`, `regexp` and `token`".to_string(),
            )),
        }
    }

    fn case_sensitive(&mut self, dto: &PatternObjectDto) -> Result<bool, RuleError> {
        match (dto.case_sensitive, dto.case_insensitive) {
            (Some(_), Some(_)) => Err(RuleError::Schema(
                "`case_sensitive` and `case_insensitive` cannot be given together".to_string(),
            )),
            (Some(sensitive), None) => Ok(sensitive),
            (None, Some(insensitive)) => {
                self.warn_once(CASE_INSENSITIVE_DEPRECATED);
                Ok(!insensitive)
            }
            (None, None) => Ok(true),
        }
    }

    fn warn_once(&mut self, message: &'static str) {
        if self.warnings.insert(message) {
            tracing::warn!("{message}");
            eprintln!("[Warning] {message}");
        }
    }
}

fn chomp(message: &str) -> &str {
    message
        .strip_suffix("\r\n")
        .or_else(|| message.strip_suffix('\n'))
        .unwrap_or(message)
}

fn reject_where(has_where: bool, kind: &str) -> Result<(), RuleError> {
    if has_where {
        return Err(RuleError::Schema(format!(
            "`where` is only allowed on token patterns, not {kind}"
        )));
    }
    Ok(())
}

fn load_globs(dto: Option<OneOrMany<GlobDto>>) -> Result<Vec<Glob>, RuleError> {
    dto::list(dto)
        .into_iter()
        .map(|glob| {
            let (pattern, encoding) = match glob {
                GlobDto::Pattern(pattern) => (pattern, None),
                GlobDto::Object { pattern, encoding } => (pattern, encoding),
            };
            if let Some(encoding) = &encoding
                && !SUPPORTED_ENCODINGS.contains(&encoding.as_str())
            {
                return Err(RuleError::Encoding(encoding.clone()));
            }
            Glob::new(&pattern, encoding).map_err(|source| RuleError::Glob { pattern, source })
        })
        .collect()
}

fn load_var_pattern(name: &str, dto: VarPatternDto) -> Result<VarPattern, RuleError> {
    let (items, negated) = match dto {
        VarPatternDto::Any(true) => return Ok(VarPattern::empty()),
        VarPatternDto::Any(false) => {
            return Err(RuleError::Schema(format!(
                "variable `{name}` must be `true`, a list, or `not:` a list"
            )));
        }
        VarPatternDto::Not { not } => (not.into_vec(), true),
        VarPatternDto::Allow(items) => (items.into_vec(), false),
    };

    let matchers = items
        .into_iter()
        .map(|item| var_matcher(name, item))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VarPattern::new(matchers, negated))
}

fn var_matcher(name: &str, item: VarItemDto) -> Result<VarMatcher, RuleError> {
    let text = match item {
        VarItemDto::Int(v) => return Ok(VarMatcher::Literal(v.to_string())),
        VarItemDto::Float(v) => return Ok(VarMatcher::Literal(v.to_string())),
        VarItemDto::Text(text) => text,
    };

    let Some(body) = text.strip_prefix('/') else {
        return Ok(VarMatcher::Literal(text));
    };
    let (source, case_insensitive) = if let Some(source) = body.strip_suffix("/i") {
        (source, true)
    } else if let Some(source) = body.strip_suffix('/') {
        (source, false)
    } else {
        return Ok(VarMatcher::Literal(text));
    };

    RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .build()
        .map(VarMatcher::Regex)
        .map_err(|error| {
            RuleError::Pattern(PatternError::VarRegex {
                name: name.to_string(),
                source_text: source.to_string(),
                error,
            })
        })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
