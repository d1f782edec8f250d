//! # Language Definitions
//!
//! Every supported language is a function building a [`RuleTable`] from the
//! shared [`RuleLibrary`]. The [`LanguageRegistry`] maps names and aliases to
//! those functions so callers can pick a table by name.
//!
//! ## Built-in Languages
//!
//! | Name         | Aliases | Notes                                         |
//! |--------------|---------|-----------------------------------------------|
//! | `generic`    |         | strings, comments, numbers and calls only     |
//! | `javascript` | `js`    | templates, regex literals, keyword classes    |
//! | `solidity`   | `sol`   | storage types, globals, ether units           |
//!
//! ## Usage Example
//!
//! ```rust
//! use enlighter::language::{library::RuleLibrary, LanguageRegistry};
//! use enlighter::tokenizer::{tokenize, TokenType};
//!
//! let lib = RuleLibrary::new().unwrap();
//! let table = LanguageRegistry::builtin().build("JS", &lib).unwrap();
//! let tokens = tokenize("if (x) return;", &table);
//! assert_eq!(tokens[0].kind(), TokenType::ControlKeyword);
//! ```

pub mod generic;
pub mod javascript;
pub mod library;
pub mod solidity;

use crate::{
    tokenizer::{error::TokenizerResult, rule::RuleTable},
    Error, InternalResult,
};

use self::library::RuleLibrary;

/// Builds a `\b(w1|w2|...)\b` pattern matching any of `words` as a whole word.
pub fn keyword_pattern(words: &[&str]) -> String {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"\b({})\b", alternatives.join("|"))
}

/// Table constructor of one language.
pub type BuildFn = fn(&RuleLibrary) -> TokenizerResult<RuleTable>;

#[derive(Clone)]
pub struct LanguageDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub build: BuildFn,
}

impl std::fmt::Debug for LanguageDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDefinition")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

impl LanguageDefinition {
    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Known languages, looked up by name or alias ignoring ASCII case.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDefinition>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::new()
            .with_language(LanguageDefinition {
                name: "generic",
                aliases: &[],
                build: generic::generic,
            })
            .with_language(LanguageDefinition {
                name: "javascript",
                aliases: &["js"],
                build: javascript::javascript,
            })
            .with_language(LanguageDefinition {
                name: "solidity",
                aliases: &["sol"],
                build: solidity::solidity,
            })
    }

    /// Adds a language. A later definition answering to the same name is
    /// shadowed by the earlier one.
    pub fn with_language(mut self, language: LanguageDefinition) -> Self {
        self.languages.push(language);
        self
    }

    pub fn resolve(&self, name: &str) -> InternalResult<&LanguageDefinition> {
        self.languages
            .iter()
            .find(|l| l.answers_to(name))
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))
    }

    pub fn build(&self, name: &str, lib: &RuleLibrary) -> InternalResult<RuleTable> {
        let language = self.resolve(name)?;
        tracing::debug!("building rule table for {}", language.name);
        Ok((language.build)(lib)?)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|l| l.name)
    }

    pub fn languages(&self) -> &[LanguageDefinition] {
        &self.languages
    }
}
