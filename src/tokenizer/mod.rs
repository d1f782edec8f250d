//! # Tokenizer Component
//!
//! The tokenizer turns source text into a flat stream of typed tokens for
//! syntax highlighting. It is driven entirely by data: a language is a
//! [`RuleTable`](rule::RuleTable) and one shared engine applies any table.
//!
//! ## Design Principles
//!
//! * **Lossless**: joining the text of all tokens reproduces the input, byte for byte.
//! * **Priority by order**: rules earlier in a table win over later ones.
//! * **Graceful degradation**: text no rule matches becomes plain text rather
//!   than an error.
//! * **Two stages**: a rule may refine its matches, splitting for example a
//!   string literal into body and escape sequences.
//!
//! ## Component Structure
//!
//! * [`token`]: Token values, type tags and position tracking
//! * [`rule`]: Rules, refinements and rule tables
//! * [`micro`]: Stage-2 micro tokenization
//! * [`engine`]: The scanning engine
//! * [`error`]: Configuration and validation errors
//!
//! ## Usage Example
//!
//! ```rust
//! use enlighter::tokenizer::{engine::tokenize, micro::MicroTokenizer, rule::RuleTable, token::TokenType};
//!
//! fn tokenize_example() -> Result<(), Box<dyn std::error::Error>> {
//!     let escapes = MicroTokenizer::uniform(r"\\.", TokenType::Escape)?;
//!     let table = RuleTable::builder("example")
//!         .refined("string", r#""(?:[^"\\]|\\.)*""#, TokenType::String, escapes)
//!         .rule("keyword", r"\b(let|const)\b", TokenType::Keyword)
//!         .build()?;
//!
//!     let tokens = tokenize(r#"let s = "a\tb";"#, &table);
//!     assert_eq!(tokens.len(), 6);
//!     Ok(())
//! }
//! # tokenize_example().unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod micro;
pub mod rule;
pub mod token;

pub use engine::{tokenize, Tokenizer};
pub use error::{TokenizerError, TokenizerResult};
pub use token::{Token, TokenType};
