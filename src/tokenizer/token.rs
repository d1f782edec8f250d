//! # Token Types
//!
//! The values produced by tokenization: [`Token`] pairs a slice of the source text
//! with a [`TokenType`] tag, and [`TokenSpan`] adds the position information a
//! consumer needs to place a token back into the source.
//!
//! ## Type Tags
//!
//! [`TokenType`] is a fixed vocabulary shared by every language definition and every
//! consumer. Each variant has a short, stable code (`s0`, `k1`, `n2`, ...) which is
//! its `Display`, `FromStr` and serde representation:
//!
//! * **Plain**: `text`
//! * **Strings**: `s0`..`s4` (string, alternate string, template, interpolation, escape)
//! * **Keywords**: `k0`..`k3`, `k9`
//! * **Comments**: `c0`..`c2`
//! * **Numbers**: `n0`..`n4`
//! * **Grouping and operators**: `g0`, `g1`, `o0`
//! * **Calls and properties**: `m0`, `m1`, `m3`
//! * **Expressions**: `e0`..`e2`

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lexical category of a token.
///
/// The vocabulary is language independent; a renderer maps each tag to a style
/// without knowing which language produced it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum TokenType {
    /// Unclassified text.
    #[strum(serialize = "text")]
    Text,

    /// Quoted string literal.
    #[strum(serialize = "s0")]
    String,
    /// Alternative string flavour (character literals, raw strings).
    #[strum(serialize = "s1")]
    StringAlt,
    /// Template literal body and delimiters.
    #[strum(serialize = "s2")]
    Template,
    /// Interpolation marker inside a template.
    #[strum(serialize = "s3")]
    Interpolation,
    /// Escape sequence inside a string.
    #[strum(serialize = "s4")]
    Escape,

    /// Declaration keywords.
    #[strum(serialize = "k0")]
    Keyword,
    /// Control-flow keywords.
    #[strum(serialize = "k1")]
    ControlKeyword,
    /// Type and storage keywords.
    #[strum(serialize = "k2")]
    TypeKeyword,
    /// Word operators (`new`, `typeof`, unit suffixes).
    #[strum(serialize = "k3")]
    OperatorKeyword,
    /// Global objects and built-in functions.
    #[strum(serialize = "k9")]
    GlobalKeyword,

    /// Line comment.
    #[strum(serialize = "c0")]
    Comment,
    /// Block comment.
    #[strum(serialize = "c1")]
    BlockComment,
    /// Documentation comment.
    #[strum(serialize = "c2")]
    DocComment,

    #[strum(serialize = "n0")]
    Integer,
    #[strum(serialize = "n1")]
    Float,
    #[strum(serialize = "n2")]
    Hex,
    #[strum(serialize = "n3")]
    Binary,
    #[strum(serialize = "n4")]
    Octal,

    /// Separators such as `,` and `;`.
    #[strum(serialize = "g0")]
    Punctuation,
    /// `(`, `)`, `[`, `]`, `{` and `}`.
    #[strum(serialize = "g1")]
    Bracket,

    #[strum(serialize = "o0")]
    Operator,

    /// Call of a free function (`foo(`).
    #[strum(serialize = "m0")]
    FunctionCall,
    /// Call of a method (`.foo(`).
    #[strum(serialize = "m1")]
    MethodCall,
    /// Property access (`.foo`).
    #[strum(serialize = "m3")]
    Property,

    #[strum(serialize = "e0")]
    Boolean,
    #[strum(serialize = "e1")]
    Null,
    /// Regular expression literal.
    #[strum(serialize = "e2")]
    Regex,
}

impl TokenType {
    pub fn is_plain(&self) -> bool {
        matches!(self, TokenType::Text)
    }

    /// Returns the short code of this type, e.g. `"k0"`.
    pub fn code(&self) -> &'static str {
        // strum's AsRefStr borrows from self, the codes themselves are static
        match self {
            TokenType::Text => "text",
            TokenType::String => "s0",
            TokenType::StringAlt => "s1",
            TokenType::Template => "s2",
            TokenType::Interpolation => "s3",
            TokenType::Escape => "s4",
            TokenType::Keyword => "k0",
            TokenType::ControlKeyword => "k1",
            TokenType::TypeKeyword => "k2",
            TokenType::OperatorKeyword => "k3",
            TokenType::GlobalKeyword => "k9",
            TokenType::Comment => "c0",
            TokenType::BlockComment => "c1",
            TokenType::DocComment => "c2",
            TokenType::Integer => "n0",
            TokenType::Float => "n1",
            TokenType::Hex => "n2",
            TokenType::Binary => "n3",
            TokenType::Octal => "n4",
            TokenType::Punctuation => "g0",
            TokenType::Bracket => "g1",
            TokenType::Operator => "o0",
            TokenType::FunctionCall => "m0",
            TokenType::MethodCall => "m1",
            TokenType::Property => "m3",
            TokenType::Boolean => "e0",
            TokenType::Null => "e1",
            TokenType::Regex => "e2",
        }
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TokenType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        TokenType::from_str(&code)
            .map_err(|_| serde::de::Error::custom(format!("unknown token type: {}", code)))
    }
}

/// A classified piece of source text.
///
/// Tokens are immutable once produced. A token stream covers its input without
/// gaps, so joining the text of every token in order yields the input again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    #[serde(rename = "type")]
    kind: TokenType,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, kind: TokenType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Creates an unclassified token.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(text, TokenType::Text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_parts(self) -> (String, TokenType) {
        (self.text, self.kind)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.kind, self.text)
    }
}

/// Concatenates the text of a token stream.
pub fn join_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// A token together with its position in the source text.
///
/// `start` and `end` are byte offsets, `line` and `column` are 1-based and point
/// at the first character of the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}

/// Attaches positions to a token stream.
///
/// Positions are derived from the token text alone, so this works for any stream
/// that satisfies the coverage invariant.
///
/// # Examples
///
/// ```
/// # use enlighter::tokenizer::token::{locate, Token, TokenType};
/// let tokens = vec![Token::plain("a\n"), Token::new("if", TokenType::ControlKeyword)];
/// let spans = locate(tokens);
/// assert_eq!(spans[1].start, 2);
/// assert_eq!(spans[1].line, 2);
/// assert_eq!(spans[1].column, 1);
/// ```
pub fn locate<I>(tokens: I) -> Vec<TokenSpan>
where
    I: IntoIterator<Item = Token>,
{
    let mut position = 0;
    let mut line = 1; // 1-based
    let mut column = 1; // 1-based

    tokens
        .into_iter()
        .map(|token| {
            let (start, start_line, start_column) = (position, line, column);
            for c in token.text().chars() {
                position += c.len_utf8();
                if c == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            TokenSpan {
                token,
                start,
                end: position,
                line: start_line,
                column: start_column,
            }
        })
        .collect()
}
