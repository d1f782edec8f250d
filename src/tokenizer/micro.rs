//! # Micro Tokenization
//!
//! Stage-2 analysis of a single, already classified token. A coarse rule such as
//! "quoted string" claims the whole literal; a [`MicroTokenizer`] then splits the
//! literal into finer pieces (escape sequences, interpolation markers) while the
//! rest of the literal keeps the outer token's type.
//!
//! ## Guarantees
//!
//! * Sub-tokens never leave the outer token: their text, joined in order, is the
//!   outer token's text.
//! * No sub-token is empty.
//! * Refinement is one level deep. Sub-tokens produced here are final.

use std::sync::Arc;

use regex::{Captures, Regex};

use super::{
    error::{TokenizerError, TokenizerResult},
    token::{Token, TokenType},
};

/// Signature of a custom classifier.
pub type ClassifyFn = dyn Fn(&Captures<'_>) -> Vec<Token> + Send + Sync;

/// Decides which tokens replace one inner match.
#[derive(Clone)]
pub enum Classifier {
    /// The whole match becomes one token of the given type.
    Uniform(TokenType),
    /// The match is handed to a function. The returned tokens must cover the
    /// match text exactly.
    Custom(Arc<ClassifyFn>),
}

impl Classifier {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Vec<Token> + Send + Sync + 'static,
    {
        Classifier::Custom(Arc::new(f))
    }

    pub fn classify(&self, captures: &Captures<'_>) -> Vec<Token> {
        match self {
            Classifier::Uniform(kind) => captures
                .get(0)
                .map(|m| vec![Token::new(m.as_str(), *kind)])
                .unwrap_or_default(),
            Classifier::Custom(f) => f(captures),
        }
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classifier::Uniform(kind) => f.debug_tuple("Uniform").field(kind).finish(),
            Classifier::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An inner pattern paired with its classifier.
#[derive(Debug, Clone)]
pub struct MicroTokenizer {
    pattern: Regex,
    classifier: Classifier,
}

impl MicroTokenizer {
    /// Compiles the inner pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str, classifier: Classifier) -> TokenizerResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TokenizerError::invalid_pattern(format!("micro:{}", pattern), e))?;
        Ok(Self {
            pattern,
            classifier,
        })
    }

    /// Shorthand for a tokenizer whose matches all become `kind`.
    pub fn uniform(pattern: &str, kind: TokenType) -> TokenizerResult<Self> {
        Self::new(pattern, Classifier::Uniform(kind))
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn refine(&self, token: &Token) -> Vec<Token> {
        micro_tokenize(token, &self.pattern, &self.classifier)
    }
}

/// Splits `token` into sub-tokens.
///
/// Every non-overlapping match of `inner` inside the token text is passed to
/// `classify`; the text between matches is emitted with the outer token's type.
/// Empty matches are ignored. If the classifier returns nothing for a match, the
/// match text is kept with the outer type.
///
/// # Examples
///
/// ```
/// # use regex::Regex;
/// # use enlighter::tokenizer::micro::{micro_tokenize, Classifier};
/// # use enlighter::tokenizer::token::{Token, TokenType};
/// let token = Token::new(r#""a\tb""#, TokenType::String);
/// let escapes = Regex::new(r"\\.").unwrap();
/// let parts = micro_tokenize(&token, &escapes, &Classifier::Uniform(TokenType::Escape));
/// assert_eq!(parts, vec![
///     Token::new("\"a", TokenType::String),
///     Token::new(r"\t", TokenType::Escape),
///     Token::new("b\"", TokenType::String),
/// ]);
/// ```
#[tracing::instrument(level = "trace", skip(token, inner, classify), fields(kind = %token.kind()))]
pub fn micro_tokenize(token: &Token, inner: &Regex, classify: &Classifier) -> Vec<Token> {
    let text = token.text();
    let outer = token.kind();
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for captures in inner.captures_iter(text) {
        let Some(m) = captures.get(0) else {
            continue;
        };
        if m.is_empty() {
            continue;
        }

        if m.start() > cursor {
            tokens.push(Token::new(&text[cursor..m.start()], outer));
        }

        let parts: Vec<Token> = classify
            .classify(&captures)
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();
        if parts.is_empty() {
            tokens.push(Token::new(m.as_str(), outer));
        } else {
            tokens.extend(parts);
        }
        cursor = m.end();
    }

    if cursor < text.len() {
        tokens.push(Token::new(&text[cursor..], outer));
    }

    tracing::trace!("refined into {} tokens", tokens.len());
    tokens
}
