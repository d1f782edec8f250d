//! # Enlighter: Rule-Driven Source Tokenizer
//!
//! Enlighter splits source code into typed tokens for syntax highlighting. A
//! language is nothing but data: an ordered table of regular-expression rules.
//! One engine applies any table, so adding a language never touches the engine.
//!
//! ## Technical Foundations
//!
//! ### 1. Two-Stage Tokenization
//! - Stage 1: rules claim spans of the input in priority order ([`tokenizer::engine`])
//! - Stage 2: claimed spans may be refined into finer tokens ([`tokenizer::micro`])
//!
//! ### 2. Lossless Output
//! Joining the text of every token reproduces the input exactly. Text no rule
//! claims becomes a plain [`TokenType::Text`] token instead of an error.
//!
//! ### 3. Shared Rule Library
//! Strings, comments and numbers are defined once ([`language::library`]) and
//! reused by every language definition ([`language`]).
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Code → Rule Table → Claimed Spans → Gap Filling → Refinement → Tokens
//! ```
//!
//! ## Configuration and Errors
//!
//! Runtime options live in [`config`]. Table construction and validation errors
//! are [`tokenizer::TokenizerError`]s; everything surfacing at the crate boundary
//! is an [`Error`].

pub mod config;
pub mod error;
pub mod language;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use language::{library::RuleLibrary, LanguageRegistry};
pub use tokenizer::{tokenize, Token, TokenType, Tokenizer};
