use thiserror::Error;

pub type TokenizerResult<T> = Result<T, TokenizerError>;

#[derive(Error, Debug, Clone)]
pub enum TokenizerError {
    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
    #[error("Pattern of rule '{rule}' cannot be searched: {source}")]
    UnsupportedPattern {
        rule: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
    #[error("Refinement of rule '{rule}' changed the token text: expected {expected:?}, found {actual:?}")]
    RefinementMismatch {
        rule: String,
        expected: String,
        actual: String,
    },
    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },
}

impl TokenizerError {
    pub fn invalid_pattern<S: Into<String>>(rule: S, source: regex::Error) -> Self {
        TokenizerError::InvalidPattern {
            rule: rule.into(),
            source,
        }
    }
}
