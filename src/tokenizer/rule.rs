//! # Rules and Rule Tables
//!
//! A [`Rule`] recognizes one lexical category: a regex, the [`TokenType`] given to
//! what it matches, and an optional [`Refinement`] that splits each match further.
//! A [`RuleTable`] is the ordered list of rules describing one language. Order is
//! precedence: a span claimed by an earlier rule can never be claimed by a later one.
//!
//! ## Claimed Text
//!
//! If a pattern has explicit capture groups and group 1 takes part in a match,
//! only group 1 is claimed. The rest of the match is context: leading context may
//! overlap text claimed by earlier rules and stays available to later ones. This
//! replaces look-ahead and look-behind, which the `regex` crate does not support:
//!
//! ```text
//! (?m)(?:^|[^\\])(//.*$)    line comment not preceded by a backslash
//! (?:^|\W)(-?\d+)\b         integer not glued to an identifier
//! ```
//!
//! ## Construction
//!
//! Patterns are compiled when a rule is created, so an invalid pattern surfaces as
//! [`TokenizerError::InvalidPattern`] while the table is being built, never while
//! scanning.

use std::sync::Arc;

use regex::{Captures, Regex};
use regex_automata::{meta, util::captures::Captures as SearchCaptures};

use super::{
    error::{TokenizerError, TokenizerResult},
    micro::MicroTokenizer,
    token::{Token, TokenType},
};

/// Signature of a custom refinement.
pub type RefineFn = dyn Fn(&Token) -> Vec<Token> + Send + Sync;

/// Stage-2 processing attached to a rule.
#[derive(Clone)]
pub enum Refinement {
    Micro(MicroTokenizer),
    Custom(Arc<RefineFn>),
}

impl Refinement {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Token) -> Vec<Token> + Send + Sync + 'static,
    {
        Refinement::Custom(Arc::new(f))
    }

    pub fn apply(&self, token: &Token) -> Vec<Token> {
        match self {
            Refinement::Micro(micro) => micro.refine(token),
            Refinement::Custom(f) => f(token),
        }
    }
}

impl From<MicroTokenizer> for Refinement {
    fn from(micro: MicroTokenizer) -> Self {
        Refinement::Micro(micro)
    }
}

impl std::fmt::Debug for Refinement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Refinement::Micro(micro) => f.debug_tuple("Micro").field(micro).finish(),
            Refinement::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A pattern, the type of what it matches, and an optional refinement.
///
/// The pattern is compiled twice: as a [`Regex`] for callers and as a
/// [`meta::Regex`] the engine uses for searches bounded to one gap.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    searcher: meta::Regex,
    kind: TokenType,
    refinement: Option<Refinement>,
    claims_group: bool,
}

impl Rule {
    /// Compiles `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidPattern`] if the pattern does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use enlighter::tokenizer::rule::Rule;
    /// # use enlighter::tokenizer::token::TokenType;
    /// let rule = Rule::new("control", r"\b(if|else)\b", TokenType::ControlKeyword).unwrap();
    /// assert_eq!(rule.name(), "control");
    /// assert!(Rule::new("broken", r"(if", TokenType::Keyword).is_err());
    /// ```
    pub fn new<S: Into<String>>(name: S, pattern: &str, kind: TokenType) -> TokenizerResult<Self> {
        let name = name.into();
        let pattern = match Regex::new(pattern) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::error!("rule '{}' has an invalid pattern: {}", name, e);
                return Err(TokenizerError::invalid_pattern(name, e));
            }
        };
        let searcher = match meta::Regex::new(pattern.as_str()) {
            Ok(searcher) => searcher,
            Err(e) => {
                tracing::error!("rule '{}' cannot be searched: {}", name, e);
                return Err(TokenizerError::UnsupportedPattern { rule: name, source: e });
            }
        };
        let claims_group = pattern.captures_len() > 1;
        Ok(Self {
            name,
            pattern,
            searcher,
            kind,
            refinement: None,
            claims_group,
        })
    }

    pub fn with_refinement<R: Into<Refinement>>(mut self, refinement: R) -> Self {
        self.refinement = Some(refinement.into());
        self
    }

    /// Returns the same rule producing tokens of another type.
    pub fn retyped(mut self, kind: TokenType) -> Self {
        self.kind = kind;
        self
    }

    pub fn renamed<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn searcher(&self) -> &meta::Regex {
        &self.searcher
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn refinement(&self) -> Option<&Refinement> {
        self.refinement.as_ref()
    }

    /// Whether matches claim group 1 rather than the whole match.
    pub fn claims_group(&self) -> bool {
        self.claims_group
    }

    /// Byte range this rule claims for one match: group 1 when the pattern has
    /// groups and group 1 participated, the whole match otherwise.
    pub fn claim(&self, captures: &Captures<'_>) -> Option<(usize, usize)> {
        let whole = captures.get(0).map(|m| (m.start(), m.end()));
        let group = captures.get(1).map(|m| (m.start(), m.end()));
        self.select(whole, group)
    }

    /// [`Rule::claim`] for the engine's bounded searches.
    pub(crate) fn claim_search(&self, captures: &SearchCaptures) -> Option<(usize, usize)> {
        let whole = captures.get_match().map(|m| (m.start(), m.end()));
        let group = captures.get_group(1).map(|s| (s.start, s.end));
        self.select(whole, group)
    }

    fn select(
        &self,
        whole: Option<(usize, usize)>,
        group: Option<(usize, usize)>,
    ) -> Option<(usize, usize)> {
        if self.claims_group {
            group.or(whole)
        } else {
            whole
        }
    }
}

/// Ordered rules of one language.
#[derive(Debug, Clone)]
pub struct RuleTable {
    language: String,
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new<S: Into<String>>(language: S, rules: Vec<Rule>) -> Self {
        Self {
            language: language.into(),
            rules,
        }
    }

    /// A table without rules. Everything it tokenizes is plain text.
    pub fn empty<S: Into<String>>(language: S) -> Self {
        Self::new(language, Vec::new())
    }

    pub fn builder<S: Into<String>>(language: S) -> RuleTableBuilder {
        RuleTableBuilder::new(language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Position of the first rule called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.name() == name)
    }

    /// Inserts `rule` directly ahead of the rule called `before`, giving it
    /// priority over that rule and everything after it.
    pub fn with_rule_before(mut self, before: &str, rule: Rule) -> TokenizerResult<Self> {
        let index = self
            .position(before)
            .ok_or_else(|| TokenizerError::UnknownRule {
                name: before.to_string(),
            })?;
        self.rules.insert(index, rule);
        Ok(self)
    }

    /// Replaces the rule called `rule.name()` in place, keeping its priority.
    pub fn with_rule_replaced(mut self, rule: Rule) -> TokenizerResult<Self> {
        let index = self
            .position(rule.name())
            .ok_or_else(|| TokenizerError::UnknownRule {
                name: rule.name().to_string(),
            })?;
        self.rules[index] = rule;
        Ok(self)
    }
}

/// Collects rules in priority order.
///
/// Compilation errors are kept until [`RuleTableBuilder::build`], which reports
/// the first one.
#[derive(Debug)]
pub struct RuleTableBuilder {
    language: String,
    rules: Vec<Rule>,
    error: Option<TokenizerError>,
}

impl RuleTableBuilder {
    pub fn new<S: Into<String>>(language: S) -> Self {
        Self {
            language: language.into(),
            rules: Vec::new(),
            error: None,
        }
    }

    /// Compiles and appends a rule without refinement.
    pub fn rule(self, name: &str, pattern: &str, kind: TokenType) -> Self {
        self.push_result(Rule::new(name, pattern, kind))
    }

    /// Compiles and appends a rule whose matches are refined.
    pub fn refined<R: Into<Refinement>>(
        self,
        name: &str,
        pattern: &str,
        kind: TokenType,
        refinement: R,
    ) -> Self {
        self.push_result(Rule::new(name, pattern, kind).map(|r| r.with_refinement(refinement)))
    }

    /// Appends an already compiled rule.
    pub fn push(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn extend<I: IntoIterator<Item = Rule>>(mut self, rules: I) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn build(self) -> TokenizerResult<RuleTable> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(RuleTable::new(self.language, self.rules)),
        }
    }

    fn push_result(mut self, rule: TokenizerResult<Rule>) -> Self {
        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
        self
    }
}
