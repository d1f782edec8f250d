//! # Shared Rule Library
//!
//! Lexical classes most languages agree on (quoted strings, C-style comments,
//! numbers, calls) compiled once and handed to language definitions by value.
//! A definition takes a copy of whichever fragments it needs with
//! [`RuleLibrary::get`] and orders them as the language requires.
//!
//! The library is an ordinary value, built with [`RuleLibrary::new`] and passed
//! explicitly, so tables built from it stay independent of each other.

use crate::tokenizer::{
    error::{TokenizerError, TokenizerResult},
    micro::MicroTokenizer,
    rule::Rule,
    token::TokenType,
};

const FRAGMENTS: &[(&str, &str, TokenType)] = &[
    // strings, single line unless escaped
    ("sq_strings", r"'(?:[^'\\\n]|\\[\s\S])*'", TokenType::String),
    ("dq_strings", r#""(?:[^"\\\n]|\\[\s\S])*""#, TokenType::String),
    ("bq_strings", r"`(?:[^`\\]|\\[\s\S])*`", TokenType::Template),
    // comments
    ("doc_comments", r"/\*\*[\s\S]*?\*/", TokenType::DocComment),
    ("block_comments", r"/\*[\s\S]*?\*/", TokenType::BlockComment),
    // comments end at the line break or at the first claimed span
    ("slash_comments", r"(?:^|[^\\])(//.*)", TokenType::Comment),
    ("pound_comments", r"#.*", TokenType::Comment),
    // grouping and operators
    ("brackets", r"[\[\](){}]", TokenType::Bracket),
    ("punctuation", r"[,;]", TokenType::Punctuation),
    ("operators", r"[-+*/%=<>!&|^~?:.]+", TokenType::Operator),
    // expressions
    ("boolean", r"(?i)\b(true|false)\b", TokenType::Boolean),
    ("null", r"(?i)\b(null)\b", TokenType::Null),
    // calls and properties
    ("prop", r"(?i)\.([a-z_$][\w$]*)\b", TokenType::Property),
    ("method_calls", r"(?i)\.([a-z_$][\w$]*)\s*\(", TokenType::MethodCall),
    ("function_calls", r"(?i)\b([a-z_$][\w$]*)\s*\(", TokenType::FunctionCall),
    // numbers
    ("octal", r"(?i)(?:^|[^\w.])(-?0o[0-7]+)\b", TokenType::Octal),
    ("bin", r"(?i)(?:^|[^\w.])(-?0b[01]+)\b", TokenType::Binary),
    ("hex", r"(?i)(?:^|[^\w.])(-?0x[a-f0-9]+)\b", TokenType::Hex),
    (
        "floats",
        r"(?i)(?:^|[^\w.])(-?(?:\d+\.\d+(?:e[+-]?\d+)?|\d+e[+-]?\d+))\b",
        TokenType::Float,
    ),
    ("int", r"(?:^|[^\w.])(-?\d+)\b", TokenType::Integer),
];

/// Compiled, reusable rule fragments.
#[derive(Debug, Clone)]
pub struct RuleLibrary {
    rules: Vec<Rule>,
    escapes: MicroTokenizer,
    interpolation: MicroTokenizer,
}

impl RuleLibrary {
    /// Compiles every fragment of the library.
    pub fn new() -> TokenizerResult<Self> {
        let rules = FRAGMENTS
            .iter()
            .map(|(name, pattern, kind)| Rule::new(*name, pattern, *kind))
            .collect::<TokenizerResult<Vec<_>>>()?;

        tracing::debug!("compiled {} library rules", rules.len());
        Ok(Self {
            rules,
            escapes: MicroTokenizer::uniform(
                r"(?i)\\(x[a-f0-9]{2}|u[a-f0-9]{4}|.)",
                TokenType::Escape,
            )?,
            interpolation: MicroTokenizer::uniform(r"\$\{.*?\}", TokenType::Interpolation)?,
        })
    }

    /// Returns a copy of the fragment called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnknownRule`] if there is no such fragment.
    pub fn get(&self, name: &str) -> TokenizerResult<Rule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .cloned()
            .ok_or_else(|| TokenizerError::UnknownRule {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    /// Splits escape sequences (`\n`, `\x41`, `\u00e9`) out of a string literal.
    pub fn escapes(&self) -> MicroTokenizer {
        self.escapes.clone()
    }

    /// Splits `${...}` markers out of a template literal.
    pub fn interpolation(&self) -> MicroTokenizer {
        self.interpolation.clone()
    }
}
